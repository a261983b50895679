//! SeaORM adapter for the participant roster.

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryOrder, Set,
};
use ulid::Ulid;

use crate::entities::participants;

pub mod dto;

pub use dto::ParticipantCreate;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn create_participant<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ParticipantCreate,
) -> Result<participants::Model, sea_orm::DbErr> {
    let active = participants::ActiveModel {
        id: Set(Ulid::new().to_string()),
        name: Set(dto.name),
        bio: Set(dto.bio),
        photo_url: Set(dto.photo_url),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    active.insert(conn).await
}

/// All participants in registration order.
pub async fn list_participants<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<participants::Model>, sea_orm::DbErr> {
    participants::Entity::find()
        .order_by_asc(participants::Column::CreatedAt)
        .order_by_asc(participants::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
) -> Result<Option<participants::Model>, sea_orm::DbErr> {
    participants::Entity::find_by_id(id.to_string())
        .one(conn)
        .await
}

pub async fn exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
) -> Result<bool, sea_orm::DbErr> {
    Ok(find_by_id(conn, id).await?.is_some())
}

pub async fn count<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    participants::Entity::find().count(conn).await
}
