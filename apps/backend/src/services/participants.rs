//! Participant registration and listing.

use sea_orm::ConnectionTrait;
use tracing::info;

use super::non_blank;
use crate::domain::Participant;
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::participants as participants_repo;

/// Raw registration input as received from the client.
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
}

pub struct ParticipantService;

impl ParticipantService {
    pub fn new() -> Self {
        Self
    }

    pub async fn register<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        input: Registration,
    ) -> Result<Participant, AppError> {
        let (Some(name), Some(photo_url)) = (non_blank(input.name), non_blank(input.photo_url))
        else {
            return Err(DomainError::validation(
                ValidationKind::ParticipantFieldsRequired,
                "name and photoUrl are required",
            )
            .into());
        };
        let bio = input.bio.map(|b| b.trim().to_string()).unwrap_or_default();

        let participant =
            participants_repo::create_participant(conn, &name, &bio, &photo_url).await?;
        info!(participant_id = %participant.id, "participant.registered");
        Ok(participant)
    }

    pub async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Participant>, AppError> {
        Ok(participants_repo::list_participants(conn).await?)
    }
}

impl Default for ParticipantService {
    fn default() -> Self {
        Self::new()
    }
}
