use sea_orm::entity::prelude::*;

/// A candidate time window for a game session.
///
/// Invariant enforced by the slot repository: `slot_to > slot_from`.
/// Availability intervals reference the slot and must lie within its bounds.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "session_slot")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub session_id: i32,
    pub slot_from: DateTimeUtc,
    pub slot_to: DateTimeUtc,
    #[sea_orm(column_type = "Text", nullable)]
    pub note: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::game_session::Entity",
        from = "Column::SessionId",
        to = "super::game_session::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    GameSession,
    #[sea_orm(has_many = "super::user_availability::Entity")]
    UserAvailability,
}

impl Related<super::game_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameSession.def()
    }
}

impl Related<super::user_availability::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserAvailability.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
