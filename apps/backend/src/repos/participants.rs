//! Participant repository functions.

use sea_orm::ConnectionTrait;

use crate::adapters::participants_sea::{self as participants_adapter, ParticipantCreate};
use crate::domain::Participant;
use crate::entities::participants;
use crate::errors::domain::DomainError;

impl From<participants::Model> for Participant {
    fn from(model: participants::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            bio: model.bio,
            photo_url: model.photo_url,
            created_at: model.created_at,
        }
    }
}

pub async fn create_participant<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    bio: &str,
    photo_url: &str,
) -> Result<Participant, DomainError> {
    let dto = ParticipantCreate::new(name, photo_url).with_bio(bio);
    let model = participants_adapter::create_participant(conn, dto).await?;
    Ok(Participant::from(model))
}

pub async fn list_participants<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Participant>, DomainError> {
    let models = participants_adapter::list_participants(conn).await?;
    Ok(models.into_iter().map(Participant::from).collect())
}

pub async fn participant_exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
) -> Result<bool, DomainError> {
    Ok(participants_adapter::exists(conn, id).await?)
}

pub async fn count_participants<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<u64, DomainError> {
    Ok(participants_adapter::count(conn).await?)
}
