use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "votes")]
pub struct Model {
    /// One row per voter; the key itself enforces a single vote.
    #[sea_orm(primary_key, auto_increment = false, column_name = "voter_id")]
    pub voter_id: String,
    #[sea_orm(column_name = "target_id")]
    pub target_id: String,
    pub at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::participants::Entity",
        from = "Column::VoterId",
        to = "super::participants::Column::Id",
        on_delete = "Restrict"
    )]
    Voter,
    #[sea_orm(
        belongs_to = "super::participants::Entity",
        from = "Column::TargetId",
        to = "super::participants::Column::Id",
        on_delete = "Restrict"
    )]
    Target,
}

impl ActiveModelBehavior for ActiveModel {}
