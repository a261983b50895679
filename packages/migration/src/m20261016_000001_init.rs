use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Participants {
    Table,
    Id,
    Name,
    Bio,
    PhotoUrl,
    CreatedAt,
}

#[derive(Iden)]
enum Votes {
    Table,
    VoterId,
    TargetId,
    At,
}

#[derive(Iden)]
enum State {
    Table,
    Key,
    Value,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // participants
        manager
            .create_table(
                Table::create()
                    .table(Participants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Participants::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Participants::Name).string().not_null())
                    .col(
                        ColumnDef::new(Participants::Bio)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Participants::PhotoUrl).string().not_null())
                    .col(
                        ColumnDef::new(Participants::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_participants_created_at")
                    .table(Participants::Table)
                    .col(Participants::CreatedAt)
                    .col(Participants::Id)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // votes: the primary key on voter_id is what guarantees one vote per voter
        manager
            .create_table(
                Table::create()
                    .table(Votes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Votes::VoterId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Votes::TargetId).string().not_null())
                    .col(
                        ColumnDef::new(Votes::At)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .check(Expr::col(Votes::VoterId).ne(Expr::col(Votes::TargetId)))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_votes_voter_id")
                            .from(Votes::Table, Votes::VoterId)
                            .to(Participants::Table, Participants::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_votes_target_id")
                            .from(Votes::Table, Votes::TargetId)
                            .to(Participants::Table, Participants::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_votes_target_id")
                    .table(Votes::Table)
                    .col(Votes::TargetId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // state: single keyed rows (only "phase" today)
        manager
            .create_table(
                Table::create()
                    .table(State::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(State::Key).string().not_null().primary_key())
                    .col(ColumnDef::new(State::Value).string().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Votes::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Participants::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(State::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
