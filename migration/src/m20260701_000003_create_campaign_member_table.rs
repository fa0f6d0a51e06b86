use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260701_000001_create_user_table::User, m20260701_000002_create_campaign_table::Campaign,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CampaignMember::Table)
                    .if_not_exists()
                    .col(pk_auto(CampaignMember::Id))
                    .col(integer(CampaignMember::CampaignId))
                    .col(integer(CampaignMember::UserId))
                    .col(string_len(CampaignMember::Role, 16))
                    .col(
                        timestamp(CampaignMember::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_campaign_member_campaign_id")
                            .from(CampaignMember::Table, CampaignMember::CampaignId)
                            .to(Campaign::Table, Campaign::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_campaign_member_user_id")
                            .from(CampaignMember::Table, CampaignMember::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("uq_campaign_member_campaign_user")
                            .col(CampaignMember::CampaignId)
                            .col(CampaignMember::UserId)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CampaignMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CampaignMember {
    Table,
    Id,
    CampaignId,
    UserId,
    Role,
    CreatedAt,
}
