//! Wire shapes. Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::{Participant, Phase, TallyEntry, Vote};

#[derive(Debug, Deserialize)]
pub struct SetPhaseRequest {
    // String rather than `Phase` so an unknown value surfaces as INVALID_PHASE.
    pub phase: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PhaseResponse {
    pub phase: Phase,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterParticipantRequest {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantResponse {
    pub id: String,
    pub name: String,
    pub bio: String,
    pub photo_url: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Participant> for ParticipantResponse {
    fn from(p: Participant) -> Self {
        Self {
            id: p.id,
            name: p.name,
            bio: p.bio,
            photo_url: p.photo_url,
            created_at: p.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteRequest {
    pub voter_id: Option<String>,
    pub target_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteResponse {
    pub voter_id: String,
    pub target_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub at: OffsetDateTime,
}

impl From<Vote> for VoteResponse {
    fn from(v: Vote) -> Self {
        Self {
            voter_id: v.voter_id,
            target_id: v.target_id,
            at: v.at,
        }
    }
}

/// A participant plus the votes they received.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TallyEntryResponse {
    #[serde(flatten)]
    pub participant: ParticipantResponse,
    pub votes: u64,
}

impl From<TallyEntry> for TallyEntryResponse {
    fn from(entry: TallyEntry) -> Self {
        Self {
            participant: entry.participant.into(),
            votes: entry.votes,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HasVotedResponse {
    pub has_voted: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllVotedResponse {
    pub all_voted: bool,
}
