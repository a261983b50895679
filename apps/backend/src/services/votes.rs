//! Ballot casting and the read-only views derived from ballots.

use sea_orm::ConnectionTrait;
use tracing::info;

use super::non_blank;
use crate::db::require_db;
use crate::domain::{tally, winner, Phase, TallyEntry, Vote};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use crate::errors::ErrorCode;
use crate::repos::{participants as participants_repo, phase as phase_repo, votes as votes_repo};
use crate::state::app_state::AppState;

pub struct VoteService;

impl VoteService {
    pub fn new() -> Self {
        Self
    }

    /// Records a ballot.
    ///
    /// Checks run in a fixed order and stop at the first failure: ids present,
    /// not a self vote, both ids registered, voter has not voted.
    ///
    /// No transaction: on SQLite a deferred transaction that has already read
    /// cannot be upgraded to a writer while another one commits, and fails
    /// with `SQLITE_BUSY` instead of waiting. Each statement autocommits, so
    /// writers queue on `busy_timeout` and the voter primary key settles any
    /// race as `ALREADY_VOTED`.
    pub async fn cast(
        &self,
        state: &AppState,
        voter_id: Option<String>,
        target_id: Option<String>,
    ) -> Result<Vote, AppError> {
        let (Some(voter_id), Some(target_id)) = (non_blank(voter_id), non_blank(target_id)) else {
            return Err(DomainError::validation(
                ValidationKind::VoteIdsRequired,
                "voterId and targetId are required",
            )
            .into());
        };

        if voter_id == target_id {
            return Err(DomainError::validation(
                ValidationKind::SelfVote,
                "You cannot vote for yourself",
            )
            .into());
        }

        let db = require_db(state)?;
        let vote = record_vote(db, &voter_id, &target_id).await?;

        info!(voter_id = %vote.voter_id, target_id = %vote.target_id, "vote.cast");
        Ok(vote)
    }

    pub async fn has_voted<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        voter_id: &str,
    ) -> Result<bool, AppError> {
        Ok(votes_repo::has_voted(conn, voter_id).await?)
    }

    pub async fn tally<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<TallyEntry>, AppError> {
        let participants = participants_repo::list_participants(conn).await?;
        let counts = votes_repo::vote_counts(conn).await?;
        Ok(tally(participants, &counts))
    }

    /// Top tally entry, available only once results are released.
    pub async fn winner<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<TallyEntry, AppError> {
        let phase = phase_repo::get_phase(conn).await?;
        if phase != Phase::Results {
            return Err(AppError::forbidden(
                ErrorCode::ResultsNotReleased,
                "Results have not been released yet",
            ));
        }

        let participants = participants_repo::list_participants(conn).await?;
        let counts = votes_repo::vote_counts(conn).await?;
        winner(participants, &counts).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::NoParticipants, "No participants registered")
                .into()
        })
    }

    /// True once every registered participant has cast a ballot.
    pub async fn all_voted<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<bool, AppError> {
        let participants = participants_repo::count_participants(conn).await?;
        let votes = votes_repo::count_votes(conn).await?;
        Ok(participants > 0 && votes == participants)
    }
}

/// Registration and repeat-vote checks, then the insert.
async fn record_vote<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    voter_id: &str,
    target_id: &str,
) -> Result<Vote, AppError> {
    let voter_known = participants_repo::participant_exists(conn, voter_id).await?;
    let target_known = participants_repo::participant_exists(conn, target_id).await?;
    if !voter_known || !target_known {
        return Err(DomainError::validation(
            ValidationKind::UnknownParticipant,
            "Voter and target must both be registered participants",
        )
        .into());
    }

    if votes_repo::has_voted(conn, voter_id).await? {
        return Err(DomainError::conflict(
            ConflictKind::AlreadyVoted,
            "This voter has already voted",
        )
        .into());
    }

    // the pre-check can lose a race; the insert then fails on the voter key
    Ok(votes_repo::create_vote(conn, voter_id, target_id).await?)
}

impl Default for VoteService {
    fn default() -> Self {
        Self::new()
    }
}
