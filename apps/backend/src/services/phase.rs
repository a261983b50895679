//! Phase service: read and administratively set the award phase.

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::domain::Phase;
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::phase as phase_repo;

pub struct PhaseService;

impl PhaseService {
    pub fn new() -> Self {
        Self
    }

    pub async fn current<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Phase, AppError> {
        Ok(phase_repo::get_phase(conn).await?)
    }

    /// Any phase may follow any other; only the value itself is checked.
    pub async fn set<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        requested: Option<String>,
    ) -> Result<Phase, AppError> {
        let phase = parse_phase(requested)?;
        let stored = phase_repo::set_phase(conn, phase).await?;
        info!(phase = %stored, "phase.updated");
        Ok(stored)
    }
}

impl Default for PhaseService {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_phase(requested: Option<String>) -> Result<Phase, DomainError> {
    let raw = requested.ok_or_else(|| {
        DomainError::validation(ValidationKind::InvalidPhase, "phase is required")
    })?;

    raw.parse::<Phase>().map_err(|_| {
        DomainError::validation(
            ValidationKind::InvalidPhase,
            format!("Invalid phase '{raw}': expected one of closed, open, results"),
        )
    })
}
