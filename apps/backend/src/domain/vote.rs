use time::OffsetDateTime;

/// A single ballot. At most one exists per voter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub voter_id: String,
    pub target_id: String,
    pub at: OffsetDateTime,
}
