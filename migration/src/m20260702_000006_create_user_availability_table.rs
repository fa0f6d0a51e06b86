use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260701_000001_create_user_table::User,
    m20260702_000005_create_session_slot_table::SessionSlot,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserAvailability::Table)
                    .if_not_exists()
                    .col(pk_auto(UserAvailability::Id))
                    .col(integer(UserAvailability::UserId))
                    .col(integer(UserAvailability::SlotId))
                    .col(timestamp(UserAvailability::AvailableFrom))
                    .col(timestamp(UserAvailability::AvailableTo))
                    .col(text_null(UserAvailability::Note))
                    .col(
                        timestamp(UserAvailability::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(UserAvailability::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_availability_user_id")
                            .from(UserAvailability::Table, UserAvailability::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_availability_slot_id")
                            .from(UserAvailability::Table, UserAvailability::SlotId)
                            .to(SessionSlot::Table, SessionSlot::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_availability_slot_user")
                    .table(UserAvailability::Table)
                    .col(UserAvailability::SlotId)
                    .col(UserAvailability::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserAvailability::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserAvailability {
    Table,
    Id,
    UserId,
    SlotId,
    AvailableFrom,
    AvailableTo,
    Note,
    CreatedAt,
    UpdatedAt,
}
