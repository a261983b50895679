//! Phase repository functions.

use sea_orm::ConnectionTrait;

use crate::adapters::state_sea;
use crate::domain::Phase;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Current phase; `Closed` when the row has never been written.
pub async fn get_phase<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Phase, DomainError> {
    match state_sea::find_phase_value(conn).await? {
        None => Ok(Phase::default()),
        Some(value) => value.parse::<Phase>().map_err(|e| {
            DomainError::infra(InfraErrorKind::DataCorruption, format!("stored {e}"))
        }),
    }
}

pub async fn set_phase<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    phase: Phase,
) -> Result<Phase, DomainError> {
    state_sea::upsert_phase(conn, phase.as_str()).await?;
    Ok(phase)
}

/// Seeds the phase row with the default if it is absent. Returns whether a row was written.
pub async fn ensure_phase<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<bool, DomainError> {
    Ok(state_sea::ensure_phase_row(conn, Phase::default().as_str()).await?)
}
