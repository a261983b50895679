// Unit tests for error mapping - pure domain logic without HTTP or database dependencies
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_kinds_to_400() {
    let cases = [
        (ValidationKind::InvalidPhase, ErrorCode::InvalidPhase),
        (
            ValidationKind::ParticipantFieldsRequired,
            ErrorCode::ParticipantFieldsRequired,
        ),
        (ValidationKind::VoteIdsRequired, ErrorCode::VoteIdsRequired),
        (ValidationKind::SelfVote, ErrorCode::SelfVote),
        (
            ValidationKind::UnknownParticipant,
            ErrorCode::InvalidParticipantIds,
        ),
    ];

    for (kind, expected) in cases {
        let app: AppError = DomainError::validation(kind, "bad input").into();
        assert_eq!(app.code(), expected);
        assert_eq!(app.status().as_u16(), 400);
    }
}

#[test]
fn already_voted_is_a_bad_request_not_a_conflict() {
    let app: AppError = DomainError::conflict(ConflictKind::AlreadyVoted, "voted").into();
    assert_eq!(app.code().as_str(), "ALREADY_VOTED");
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn maps_generic_conflict_to_409() {
    let other = DomainError::conflict(
        ConflictKind::Other("some conflict".to_string()),
        "generic conflict",
    );
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_not_found() {
    let empty = DomainError::not_found(NotFoundKind::NoParticipants, "nobody registered");
    let app: AppError = empty.into();
    assert_eq!(app.code().as_str(), "NO_PARTICIPANTS");
    assert_eq!(app.status().as_u16(), 404);

    let other = DomainError::not_found(NotFoundKind::Other("thing".into()), "missing");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "NOT_FOUND");
}

#[test]
fn maps_infra() {
    let t = DomainError::infra(InfraErrorKind::Timeout, "timeout");
    let app: AppError = t.into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert_eq!(app.status().as_u16(), 504);
    assert!(matches!(app, AppError::Timeout { .. }));

    let down = DomainError::infra(InfraErrorKind::DbUnavailable, "down");
    let app: AppError = down.into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let corr = DomainError::infra(InfraErrorKind::DataCorruption, "bad");
    let app: AppError = corr.into();
    assert_eq!(app.code().as_str(), "DATA_CORRUPTION");
    assert_eq!(app.status().as_u16(), 500);

    let other = DomainError::infra(InfraErrorKind::Other("unknown".to_string()), "other");
    let app: AppError = other.into();
    assert_eq!(app.code(), ErrorCode::Internal);
    assert_eq!(app.code().as_str(), "INTERNAL");
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn constructor_helpers() {
    let validation = DomainError::validation(ValidationKind::SelfVote, "self vote");
    assert!(matches!(
        validation,
        DomainError::Validation(ValidationKind::SelfVote, _)
    ));

    let conflict = DomainError::conflict(ConflictKind::AlreadyVoted, "voted");
    assert!(matches!(
        conflict,
        DomainError::Conflict(ConflictKind::AlreadyVoted, _)
    ));

    let not_found = DomainError::not_found(NotFoundKind::NoParticipants, "missing");
    assert!(matches!(
        not_found,
        DomainError::NotFound(NotFoundKind::NoParticipants, _)
    ));

    let infra = DomainError::infra(InfraErrorKind::Timeout, "timeout");
    assert!(matches!(
        infra,
        DomainError::Infra(InfraErrorKind::Timeout, _)
    ));
}
