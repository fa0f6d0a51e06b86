//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use entity::campaign_member::CampaignRole;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a game session with all dependencies.
///
/// This is a convenience method that creates:
/// 1. User (as campaign GM)
/// 2. Campaign
/// 3. Campaign membership with the GM role
/// 4. Game session
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((gm, campaign, session))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_session_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::campaign::Model,
        entity::game_session::Model,
    ),
    DbErr,
> {
    let gm = crate::factory::user::create_user(db).await?;
    let campaign = crate::factory::campaign::create_campaign(db).await?;
    crate::factory::campaign_member::create_member_with_role(
        db,
        campaign.id,
        gm.id,
        CampaignRole::Gm,
    )
    .await?;
    let session = crate::factory::game_session::create_game_session(db, campaign.id).await?;

    Ok((gm, campaign, session))
}

/// Creates a session slot with all dependencies.
///
/// Extends [`create_session_with_dependencies`] with a slot inserted under
/// the created session, using the factory's default bounds. Useful for
/// availability tests that only need one slot to attach intervals to.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((gm, campaign, session, slot))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_slot_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::campaign::Model,
        entity::game_session::Model,
        entity::session_slot::Model,
    ),
    DbErr,
> {
    let (gm, campaign, session) = create_session_with_dependencies(db).await?;
    let slot = crate::factory::session_slot::create_slot(db, session.id).await?;

    Ok((gm, campaign, session, slot))
}
