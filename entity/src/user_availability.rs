use sea_orm::entity::prelude::*;

/// One availability interval reported by a user inside a session slot.
///
/// A user may hold several rows per slot; the availability repository
/// guarantees they never overlap (half-open semantics, touching endpoints
/// allowed) and that each lies within the parent slot's bounds.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_availability")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub slot_id: i32,
    pub available_from: DateTimeUtc,
    pub available_to: DateTimeUtc,
    #[sea_orm(column_type = "Text", nullable)]
    pub note: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::session_slot::Entity",
        from = "Column::SlotId",
        to = "super::session_slot::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    SessionSlot,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::session_slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SessionSlot.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
