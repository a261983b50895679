//! DTOs for votes_sea adapter.

use sea_orm::FromQueryResult;

#[derive(Debug, Clone)]
pub struct VoteCreate {
    pub voter_id: String,
    pub target_id: String,
}

impl VoteCreate {
    pub fn new(voter_id: impl Into<String>, target_id: impl Into<String>) -> Self {
        Self {
            voter_id: voter_id.into(),
            target_id: target_id.into(),
        }
    }
}

/// One row of the per-target aggregate.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct TargetCount {
    pub target_id: String,
    pub votes: i64,
}
