//! Campaign factory for creating test campaign entities.
//!
//! This module provides factory methods for creating campaign entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test campaigns with customizable fields.
///
/// Provides a builder pattern for creating campaign entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::campaign::CampaignFactory;
///
/// let campaign = CampaignFactory::new(&db)
///     .name("Curse of Strahd")
///     .description(Some("Gothic horror".to_string()))
///     .build()
///     .await?;
/// ```
pub struct CampaignFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
}

impl<'a> CampaignFactory<'a> {
    /// Creates a new CampaignFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Campaign {id}"` where id is auto-incremented
    /// - description: `Some("Test campaign description")`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CampaignFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Campaign {}", id),
            description: Some("Test campaign description".to_string()),
        }
    }

    /// Sets the campaign name.
    ///
    /// # Arguments
    /// - `name` - Display name for the campaign
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the campaign description.
    ///
    /// # Arguments
    /// - `description` - Optional campaign description
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Builds and inserts the campaign entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::campaign::Model)` - Created campaign entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::campaign::Model, DbErr> {
        entity::campaign::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a campaign with default values.
///
/// Shorthand for `CampaignFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::campaign::Model)` - Created campaign entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let campaign = create_campaign(&db).await?;
/// ```
pub async fn create_campaign(db: &DatabaseConnection) -> Result<entity::campaign::Model, DbErr> {
    CampaignFactory::new(db).build().await
}
