pub use sea_orm_migration::prelude::*;

mod m20260701_000001_create_user_table;
mod m20260701_000002_create_campaign_table;
mod m20260701_000003_create_campaign_member_table;
mod m20260701_000004_create_game_session_table;
mod m20260702_000005_create_session_slot_table;
mod m20260702_000006_create_user_availability_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260701_000001_create_user_table::Migration),
            Box::new(m20260701_000002_create_campaign_table::Migration),
            Box::new(m20260701_000003_create_campaign_member_table::Migration),
            Box::new(m20260701_000004_create_game_session_table::Migration),
            Box::new(m20260702_000005_create_session_slot_table::Migration),
            Box::new(m20260702_000006_create_user_availability_table::Migration),
        ]
    }
}
