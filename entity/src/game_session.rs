use sea_orm::entity::prelude::*;

/// A play session within a campaign. Scheduling candidates for the session
/// are modeled separately as `session_slot` rows; `scheduled_for` is only
/// filled in once the GM has settled on a final time.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "game_session")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub campaign_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub scheduled_for: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::campaign::Entity",
        from = "Column::CampaignId",
        to = "super::campaign::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Campaign,
    #[sea_orm(has_many = "super::session_slot::Entity")]
    SessionSlot,
}

impl Related<super::campaign::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Campaign.def()
    }
}

impl Related<super::session_slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SessionSlot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
