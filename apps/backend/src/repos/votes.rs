//! Vote repository functions.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;

use crate::adapters::votes_sea::{self as votes_adapter, VoteCreate};
use crate::domain::Vote;
use crate::entities::votes;
use crate::errors::domain::{DomainError, InfraErrorKind};

impl From<votes::Model> for Vote {
    fn from(model: votes::Model) -> Self {
        Self {
            voter_id: model.voter_id,
            target_id: model.target_id,
            at: model.at,
        }
    }
}

pub async fn create_vote<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    voter_id: &str,
    target_id: &str,
) -> Result<Vote, DomainError> {
    let model = votes_adapter::insert_vote(conn, VoteCreate::new(voter_id, target_id)).await?;
    Ok(Vote::from(model))
}

pub async fn find_vote_by_voter<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    voter_id: &str,
) -> Result<Option<Vote>, DomainError> {
    let model = votes_adapter::find_by_voter(conn, voter_id).await?;
    Ok(model.map(Vote::from))
}

pub async fn has_voted<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    voter_id: &str,
) -> Result<bool, DomainError> {
    Ok(find_vote_by_voter(conn, voter_id).await?.is_some())
}

pub async fn count_votes<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, DomainError> {
    Ok(votes_adapter::count(conn).await?)
}

/// Votes received per target id.
pub async fn vote_counts<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<HashMap<String, u64>, DomainError> {
    let rows = votes_adapter::counts_by_target(conn).await?;

    rows.into_iter()
        .map(|row| {
            let votes = u64::try_from(row.votes).map_err(|_| {
                DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("negative vote count for target {}", row.target_id),
                )
            })?;
            Ok((row.target_id, votes))
        })
        .collect()
}
