//! SeaORM adapter for ballots.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QuerySelect, Set,
};

use crate::entities::votes;

pub mod dto;

pub use dto::{TargetCount, VoteCreate};

/// Plain insert. A second vote from the same voter fails on the primary key,
/// which `map_db_err` turns into `AlreadyVoted`.
pub async fn insert_vote<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: VoteCreate,
) -> Result<votes::Model, sea_orm::DbErr> {
    let active = votes::ActiveModel {
        voter_id: Set(dto.voter_id),
        target_id: Set(dto.target_id),
        at: Set(time::OffsetDateTime::now_utc()),
    };

    active.insert(conn).await
}

pub async fn find_by_voter<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    voter_id: &str,
) -> Result<Option<votes::Model>, sea_orm::DbErr> {
    votes::Entity::find_by_id(voter_id.to_string())
        .one(conn)
        .await
}

pub async fn count<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, sea_orm::DbErr> {
    votes::Entity::find().count(conn).await
}

/// Number of votes per target. Targets with zero votes are absent.
pub async fn counts_by_target<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<TargetCount>, sea_orm::DbErr> {
    votes::Entity::find()
        .select_only()
        .column(votes::Column::TargetId)
        .column_as(Expr::col(votes::Column::VoterId).count(), "votes")
        .group_by(votes::Column::TargetId)
        .into_model::<TargetCount>()
        .all(conn)
        .await
}
