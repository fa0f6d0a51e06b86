//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let campaign = factory::campaign::create_campaign(&db).await?;
//!
//!     // Create with all dependencies
//!     let (gm, campaign, session) =
//!         factory::helpers::create_session_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Using builder pattern for customization
//! let slot = factory::session_slot::SessionSlotFactory::new(&db, session.id)
//!     .bounds(from, to)
//!     .note(Some("Saturday evening".to_string()))
//!     .build()
//!     .await?;
//!
//! // Using convenience functions with custom values
//! let member = factory::create_member_with_role(&db, campaign.id, user.id, CampaignRole::Gm).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `campaign` - Create campaign entities
//! - `campaign_member` - Create campaign membership entities
//! - `game_session` - Create game session entities
//! - `session_slot` - Create session slot entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod campaign;
pub mod campaign_member;
pub mod game_session;
pub mod helpers;
pub mod session_slot;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use campaign::create_campaign;
pub use campaign_member::{create_member, create_member_with_role};
pub use game_session::create_game_session;
pub use session_slot::{create_slot, create_slot_with_bounds};
pub use user::create_user;
