use sea_orm_migration::{prelude::*, schema::*};

use super::m20260701_000002_create_campaign_table::Campaign;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameSession::Table)
                    .if_not_exists()
                    .col(pk_auto(GameSession::Id))
                    .col(integer(GameSession::CampaignId))
                    .col(string(GameSession::Title))
                    .col(text_null(GameSession::Description))
                    .col(timestamp_null(GameSession::ScheduledFor))
                    .col(
                        timestamp(GameSession::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(GameSession::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_session_campaign_id")
                            .from(GameSession::Table, GameSession::CampaignId)
                            .to(Campaign::Table, Campaign::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameSession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameSession {
    Table,
    Id,
    CampaignId,
    Title,
    Description,
    ScheduledFor,
    CreatedAt,
    UpdatedAt,
}
