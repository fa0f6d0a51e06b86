//! Game session factory for creating test session entities.
//!
//! This module provides factory methods for creating game session entities
//! with sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test game sessions with customizable fields.
///
/// Provides a builder pattern for creating game session entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::game_session::GameSessionFactory;
///
/// let session = GameSessionFactory::new(&db, campaign.id)
///     .title("Session 12: The Amber Temple")
///     .build()
///     .await?;
/// ```
pub struct GameSessionFactory<'a> {
    db: &'a DatabaseConnection,
    campaign_id: i32,
    title: String,
    description: Option<String>,
    scheduled_for: Option<chrono::DateTime<Utc>>,
}

impl<'a> GameSessionFactory<'a> {
    /// Creates a new GameSessionFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Session {id}"` where id is auto-incremented
    /// - description: `Some("Test session description")`
    /// - scheduled_for: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `campaign_id` - Campaign the session belongs to
    ///
    /// # Returns
    /// - `GameSessionFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, campaign_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            campaign_id,
            title: format!("Session {}", id),
            description: Some("Test session description".to_string()),
            scheduled_for: None,
        }
    }

    /// Sets the session title.
    ///
    /// # Arguments
    /// - `title` - Display title for the session
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the session description.
    ///
    /// # Arguments
    /// - `description` - Optional session description
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the finalized session time.
    ///
    /// # Arguments
    /// - `scheduled_for` - Time the session is scheduled to run, if decided
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn scheduled_for(mut self, scheduled_for: Option<chrono::DateTime<Utc>>) -> Self {
        self.scheduled_for = scheduled_for;
        self
    }

    /// Builds and inserts the game session entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::game_session::Model)` - Created game session entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::game_session::Model, DbErr> {
        let now = Utc::now();
        entity::game_session::ActiveModel {
            id: ActiveValue::NotSet,
            campaign_id: ActiveValue::Set(self.campaign_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            scheduled_for: ActiveValue::Set(self.scheduled_for),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a game session with default values for the specified campaign.
///
/// Shorthand for `GameSessionFactory::new(db, campaign_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `campaign_id` - Campaign the session belongs to
///
/// # Returns
/// - `Ok(entity::game_session::Model)` - Created game session entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let session = create_game_session(&db, campaign.id).await?;
/// ```
pub async fn create_game_session(
    db: &DatabaseConnection,
    campaign_id: i32,
) -> Result<entity::game_session::Model, DbErr> {
    GameSessionFactory::new(db, campaign_id).build().await
}
