//! SeaORM adapter for the key/value `state` table.

use sea_orm::sea_query::OnConflict;
use sea_orm::{ConnectionTrait, EntityTrait, Set};

use crate::entities::voting_state::{self, PHASE_KEY};

pub async fn find_phase_value<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Option<String>, sea_orm::DbErr> {
    Ok(voting_state::Entity::find_by_id(PHASE_KEY.to_string())
        .one(conn)
        .await?
        .map(|row| row.value))
}

/// Seeds the phase row with `initial` unless one already exists.
pub async fn ensure_phase_row<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    initial: &str,
) -> Result<bool, sea_orm::DbErr> {
    let row = voting_state::ActiveModel {
        key: Set(PHASE_KEY.to_string()),
        value: Set(initial.to_string()),
    };

    let rows = voting_state::Entity::insert(row)
        .on_conflict(
            OnConflict::column(voting_state::Column::Key)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    Ok(rows == 1)
}

pub async fn upsert_phase<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    value: &str,
) -> Result<(), sea_orm::DbErr> {
    let row = voting_state::ActiveModel {
        key: Set(PHASE_KEY.to_string()),
        value: Set(value.to_string()),
    };

    voting_state::Entity::insert(row)
        .on_conflict(
            OnConflict::column(voting_state::Column::Key)
                .update_column(voting_state::Column::Value)
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    Ok(())
}
