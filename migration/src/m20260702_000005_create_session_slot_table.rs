use sea_orm_migration::{prelude::*, schema::*};

use super::m20260701_000004_create_game_session_table::GameSession;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SessionSlot::Table)
                    .if_not_exists()
                    .col(pk_auto(SessionSlot::Id))
                    .col(integer(SessionSlot::SessionId))
                    .col(timestamp(SessionSlot::SlotFrom))
                    .col(timestamp(SessionSlot::SlotTo))
                    .col(text_null(SessionSlot::Note))
                    .col(
                        timestamp(SessionSlot::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(SessionSlot::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_session_slot_session_id")
                            .from(SessionSlot::Table, SessionSlot::SessionId)
                            .to(GameSession::Table, GameSession::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_session_slot_session_id")
                    .table(SessionSlot::Table)
                    .col(SessionSlot::SessionId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SessionSlot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SessionSlot {
    Table,
    Id,
    SessionId,
    SlotFrom,
    SlotTo,
    Note,
    CreatedAt,
    UpdatedAt,
}
