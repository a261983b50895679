//! Error codes for the awards backend API.
//!
//! Every error that reaches a client carries one of these codes. Add new
//! codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Phase is missing or not one of closed/open/results
    InvalidPhase,
    /// Participant registration without a name or photo
    ParticipantFieldsRequired,
    /// Vote submission without a voter or target id
    VoteIdsRequired,
    /// Voter and target are the same participant
    SelfVote,
    /// Voter or target is not a registered participant
    InvalidParticipantIds,
    /// Malformed request (e.g. unparsable JSON)
    BadRequest,

    // Voting state
    /// Voter already has a vote on record
    AlreadyVoted,
    /// Winner requested before the results phase
    ResultsNotReleased,

    // Resource Not Found
    /// Winner requested but nobody is registered
    NoParticipants,
    /// General not found error (also used for unmatched routes)
    NotFound,

    // Conflicts
    /// Generic conflict (fallback for unmatched unique violations)
    Conflict,

    // System Errors
    /// Database unavailable
    DbUnavailable,
    /// Database timeout (gateway timeout)
    DbTimeout,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
    /// Stored data does not match the expected shape
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidPhase => "INVALID_PHASE",
            Self::ParticipantFieldsRequired => "PARTICIPANT_FIELDS_REQUIRED",
            Self::VoteIdsRequired => "VOTE_IDS_REQUIRED",
            Self::SelfVote => "SELF_VOTE",
            Self::InvalidParticipantIds => "INVALID_PARTICIPANT_IDS",
            Self::BadRequest => "BAD_REQUEST",

            Self::AlreadyVoted => "ALREADY_VOTED",
            Self::ResultsNotReleased => "RESULTS_NOT_RELEASED",

            Self::NoParticipants => "NO_PARTICIPANTS",
            Self::NotFound => "NOT_FOUND",

            Self::Conflict => "CONFLICT",

            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }

    /// Every code, for uniqueness checks.
    pub const ALL: [ErrorCode; 16] = [
        Self::InvalidPhase,
        Self::ParticipantFieldsRequired,
        Self::VoteIdsRequired,
        Self::SelfVote,
        Self::InvalidParticipantIds,
        Self::BadRequest,
        Self::AlreadyVoted,
        Self::ResultsNotReleased,
        Self::NoParticipants,
        Self::NotFound,
        Self::Conflict,
        Self::DbUnavailable,
        Self::DbTimeout,
        Self::Internal,
        Self::ConfigError,
        Self::DataCorruption,
    ];
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
