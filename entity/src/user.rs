use sea_orm::entity::prelude::*;

/// Account identity. Authentication itself lives outside this service;
/// only the row needed for ownership and role checks is modeled here.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::campaign_member::Entity")]
    CampaignMember,
    #[sea_orm(has_many = "super::user_availability::Entity")]
    UserAvailability,
}

impl Related<super::campaign_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CampaignMember.def()
    }
}

impl Related<super::user_availability::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserAvailability.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
