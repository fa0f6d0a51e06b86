//! SeaORM entity definitions for the sessionboard database schema.

pub mod campaign;
pub mod campaign_member;
pub mod game_session;
pub mod session_slot;
pub mod user;
pub mod user_availability;

pub mod prelude {
    pub use super::campaign::Entity as Campaign;
    pub use super::campaign_member::Entity as CampaignMember;
    pub use super::game_session::Entity as GameSession;
    pub use super::session_slot::Entity as SessionSlot;
    pub use super::user::Entity as User;
    pub use super::user_availability::Entity as UserAvailability;
}
