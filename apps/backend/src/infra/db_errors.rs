//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return raw `sea_orm::DbErr`; repos convert through `map_db_err`
//! so that constraint violations surface as the voting errors they stand for.

use tracing::{error, warn};

use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(&format!("SQLSTATE({code})")) || msg.contains(&format!("code: {code}"))
}

fn is_unique_violation(msg: &str) -> bool {
    mentions_sqlstate(msg, "23505")
        || msg.contains("duplicate key value violates unique constraint")
        || msg.contains("UNIQUE constraint failed")
}

fn is_fk_violation(msg: &str) -> bool {
    mentions_sqlstate(msg, "23503")
        || msg.contains("violates foreign key constraint")
        || msg.contains("FOREIGN KEY constraint failed")
}

fn is_check_violation(msg: &str) -> bool {
    mentions_sqlstate(msg, "23514")
        || msg.contains("violates check constraint")
        || msg.contains("CHECK constraint failed")
}

/// SQLite lock contention: SQLITE_BUSY (5), SQLITE_BUSY_SNAPSHOT (517) or
/// SQLITE_LOCKED, reported once `busy_timeout` has run out or cannot apply.
fn is_sqlite_busy(msg: &str) -> bool {
    msg.contains("database is locked")
        || msg.contains("database table is locked")
        || msg.contains("(code: 5)")
        || msg.contains("(code: 517)")
        || msg.contains("SQLITE_BUSY")
}

/// The one-vote-per-voter key, in SQLite and Postgres spelling.
fn is_voter_key(msg: &str) -> bool {
    msg.contains("votes.voter_id") || msg.contains("votes_pkey")
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        sea_orm::DbErr::Type(_) | sea_orm::DbErr::TryIntoErr { .. } => {
            error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Stored row has unexpected shape");
            return DomainError::infra(InfraErrorKind::DataCorruption, "Stored data is invalid");
        }
        _ => {}
    }

    if is_unique_violation(&error_msg) {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unique constraint violation");
        if is_voter_key(&error_msg) {
            return DomainError::conflict(ConflictKind::AlreadyVoted, "This voter has already voted");
        }
        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if is_fk_violation(&error_msg) {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Foreign key constraint violation");
        return DomainError::validation(
            ValidationKind::UnknownParticipant,
            "Voter and target must both be registered participants",
        );
    }

    // votes carries the only check constraint in the schema
    if is_check_violation(&error_msg) {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Check constraint violation");
        return DomainError::validation(ValidationKind::SelfVote, "You cannot vote for yourself");
    }

    if is_sqlite_busy(&error_msg) {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database busy");
        return DomainError::infra(InfraErrorKind::Timeout, "Database busy, retry the request");
    }

    if error_msg.contains("timeout")
        || error_msg.contains("timed out")
        || error_msg.contains("pool")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database timeout or pool issue");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbErr, RuntimeErr};

    use super::*;

    fn exec_err(msg: &str) -> DbErr {
        DbErr::Exec(RuntimeErr::Internal(msg.to_string()))
    }

    #[test]
    fn sqlite_voter_unique_maps_to_already_voted() {
        let err = exec_err("error returned from database: (code: 1555) UNIQUE constraint failed: votes.voter_id");
        assert!(matches!(
            map_db_err(err),
            DomainError::Conflict(ConflictKind::AlreadyVoted, _)
        ));
    }

    #[test]
    fn postgres_voter_pkey_maps_to_already_voted() {
        let err = exec_err(
            "duplicate key value violates unique constraint \"votes_pkey\"",
        );
        assert!(matches!(
            map_db_err(err),
            DomainError::Conflict(ConflictKind::AlreadyVoted, _)
        ));
    }

    #[test]
    fn other_unique_maps_to_generic_conflict() {
        let err = exec_err("UNIQUE constraint failed: participants.id");
        assert!(matches!(
            map_db_err(err),
            DomainError::Conflict(ConflictKind::Other(_), _)
        ));
    }

    #[test]
    fn foreign_key_maps_to_unknown_participant() {
        for msg in [
            "FOREIGN KEY constraint failed",
            "insert or update on table \"votes\" violates foreign key constraint \"fk_votes_target_id\"",
        ] {
            assert!(matches!(
                map_db_err(exec_err(msg)),
                DomainError::Validation(ValidationKind::UnknownParticipant, _)
            ));
        }
    }

    #[test]
    fn check_maps_to_self_vote() {
        for msg in [
            "CHECK constraint failed: voter_id <> target_id",
            "new row for relation \"votes\" violates check constraint \"votes_check\"",
        ] {
            assert!(matches!(
                map_db_err(exec_err(msg)),
                DomainError::Validation(ValidationKind::SelfVote, _)
            ));
        }
    }

    #[test]
    fn connection_errors_are_unavailable() {
        let err = DbErr::Conn(RuntimeErr::Internal("connection refused".into()));
        assert!(matches!(
            map_db_err(err),
            DomainError::Infra(InfraErrorKind::DbUnavailable, _)
        ));
    }

    #[test]
    fn timeouts_are_classified() {
        let err = exec_err("statement timeout");
        assert!(matches!(
            map_db_err(err),
            DomainError::Infra(InfraErrorKind::Timeout, _)
        ));
    }

    #[test]
    fn sqlite_busy_is_a_timeout_not_a_500() {
        for msg in [
            "error returned from database: (code: 5) database is locked",
            "error returned from database: (code: 517) database is locked",
            "error returned from database: (code: 6) database table is locked",
        ] {
            let domain = map_db_err(exec_err(msg));
            assert!(matches!(
                domain,
                DomainError::Infra(InfraErrorKind::Timeout, _)
            ));
            let app = crate::AppError::from(domain);
            assert_eq!(app.status().as_u16(), 504);
            assert_eq!(app.code().as_str(), "DB_TIMEOUT");
        }
    }

    #[test]
    fn unknown_errors_fall_back_to_infra_other() {
        let err = exec_err("no such table: votes");
        assert!(matches!(
            map_db_err(err),
            DomainError::Infra(InfraErrorKind::Other(_), _)
        ));
    }
}
