//! Campaign member factory for creating test membership entities.
//!
//! This module provides factory methods for creating campaign membership
//! entities with sensible defaults, reducing boilerplate in tests. The factory
//! supports customization through a builder pattern.

use chrono::Utc;
use entity::campaign_member::CampaignRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test campaign memberships with customizable fields.
///
/// Provides a builder pattern for creating membership entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::campaign_member::CampaignMemberFactory;
/// use entity::campaign_member::CampaignRole;
///
/// let member = CampaignMemberFactory::new(&db, campaign.id, user.id)
///     .role(CampaignRole::Gm)
///     .build()
///     .await?;
/// ```
pub struct CampaignMemberFactory<'a> {
    db: &'a DatabaseConnection,
    campaign_id: i32,
    user_id: i32,
    role: CampaignRole,
}

impl<'a> CampaignMemberFactory<'a> {
    /// Creates a new CampaignMemberFactory with default values.
    ///
    /// Defaults:
    /// - role: `CampaignRole::Player`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `campaign_id` - Campaign the membership belongs to
    /// - `user_id` - User being added to the campaign
    ///
    /// # Returns
    /// - `CampaignMemberFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, campaign_id: i32, user_id: i32) -> Self {
        Self {
            db,
            campaign_id,
            user_id,
            role: CampaignRole::Player,
        }
    }

    /// Sets the role for the membership.
    ///
    /// # Arguments
    /// - `role` - Campaign role to assign
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn role(mut self, role: CampaignRole) -> Self {
        self.role = role;
        self
    }

    /// Builds and inserts the membership entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::campaign_member::Model)` - Created membership entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::campaign_member::Model, DbErr> {
        entity::campaign_member::ActiveModel {
            id: ActiveValue::NotSet,
            campaign_id: ActiveValue::Set(self.campaign_id),
            user_id: ActiveValue::Set(self.user_id),
            role: ActiveValue::Set(self.role),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a campaign membership with the default `Player` role.
///
/// Shorthand for `CampaignMemberFactory::new(db, campaign_id, user_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `campaign_id` - Campaign the membership belongs to
/// - `user_id` - User being added to the campaign
///
/// # Returns
/// - `Ok(entity::campaign_member::Model)` - Created membership entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_member(
    db: &DatabaseConnection,
    campaign_id: i32,
    user_id: i32,
) -> Result<entity::campaign_member::Model, DbErr> {
    CampaignMemberFactory::new(db, campaign_id, user_id)
        .build()
        .await
}

/// Creates a campaign membership with a specific role.
///
/// Shorthand for `CampaignMemberFactory::new(db, campaign_id, user_id).role(role).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `campaign_id` - Campaign the membership belongs to
/// - `user_id` - User being added to the campaign
/// - `role` - Campaign role to assign
///
/// # Returns
/// - `Ok(entity::campaign_member::Model)` - Created membership entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let gm = create_member_with_role(&db, campaign.id, user.id, CampaignRole::Gm).await?;
/// ```
pub async fn create_member_with_role(
    db: &DatabaseConnection,
    campaign_id: i32,
    user_id: i32,
    role: CampaignRole,
) -> Result<entity::campaign_member::Model, DbErr> {
    CampaignMemberFactory::new(db, campaign_id, user_id)
        .role(role)
        .build()
        .await
}
