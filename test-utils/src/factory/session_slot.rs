//! Session slot factory for creating test slot entities.
//!
//! This module provides factory methods for creating session slot entities
//! with sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test session slots with customizable fields.
///
/// Provides a builder pattern for creating slot entities with default values
/// that can be overridden as needed for specific test scenarios. Tests that
/// assert on interval arithmetic should set explicit bounds via `bounds()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::session_slot::SessionSlotFactory;
///
/// let slot = SessionSlotFactory::new(&db, session.id)
///     .bounds(from, to)
///     .note(Some("Saturday evening".to_string()))
///     .build()
///     .await?;
/// ```
pub struct SessionSlotFactory<'a> {
    db: &'a DatabaseConnection,
    session_id: i32,
    slot_from: chrono::DateTime<Utc>,
    slot_to: chrono::DateTime<Utc>,
    note: Option<String>,
}

impl<'a> SessionSlotFactory<'a> {
    /// Creates a new SessionSlotFactory with default values.
    ///
    /// Defaults:
    /// - slot_from: `{id}` days from now, where id is auto-incremented
    /// - slot_to: 4 hours after slot_from
    /// - note: `None`
    ///
    /// Staggering slot_from by the counter keeps multiple default slots in
    /// one test distinct and ordered by creation.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `session_id` - Game session the slot belongs to
    ///
    /// # Returns
    /// - `SessionSlotFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, session_id: i32) -> Self {
        let id = next_id();
        let slot_from = Utc::now() + Duration::days(id as i64);
        Self {
            db,
            session_id,
            slot_from,
            slot_to: slot_from + Duration::hours(4),
            note: None,
        }
    }

    /// Sets both slot bounds.
    ///
    /// # Arguments
    /// - `slot_from` - Start of the candidate window
    /// - `slot_to` - End of the candidate window
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn bounds(mut self, slot_from: chrono::DateTime<Utc>, slot_to: chrono::DateTime<Utc>) -> Self {
        self.slot_from = slot_from;
        self.slot_to = slot_to;
        self
    }

    /// Sets the slot note.
    ///
    /// # Arguments
    /// - `note` - Optional free-form note for the slot
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn note(mut self, note: Option<String>) -> Self {
        self.note = note;
        self
    }

    /// Builds and inserts the slot entity into the database.
    ///
    /// The factory inserts directly, bypassing repository validation, so
    /// tests can also construct deliberately odd slots when needed.
    ///
    /// # Returns
    /// - `Ok(entity::session_slot::Model)` - Created slot entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::session_slot::Model, DbErr> {
        let now = Utc::now();
        entity::session_slot::ActiveModel {
            id: ActiveValue::NotSet,
            session_id: ActiveValue::Set(self.session_id),
            slot_from: ActiveValue::Set(self.slot_from),
            slot_to: ActiveValue::Set(self.slot_to),
            note: ActiveValue::Set(self.note),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a session slot with default values for the specified session.
///
/// Shorthand for `SessionSlotFactory::new(db, session_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `session_id` - Game session the slot belongs to
///
/// # Returns
/// - `Ok(entity::session_slot::Model)` - Created slot entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let slot = create_slot(&db, session.id).await?;
/// ```
pub async fn create_slot(
    db: &DatabaseConnection,
    session_id: i32,
) -> Result<entity::session_slot::Model, DbErr> {
    SessionSlotFactory::new(db, session_id).build().await
}

/// Creates a session slot with explicit bounds.
///
/// Shorthand for `SessionSlotFactory::new(db, session_id).bounds(from, to).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `session_id` - Game session the slot belongs to
/// - `slot_from` - Start of the candidate window
/// - `slot_to` - End of the candidate window
///
/// # Returns
/// - `Ok(entity::session_slot::Model)` - Created slot entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let slot = create_slot_with_bounds(&db, session.id, from, to).await?;
/// ```
pub async fn create_slot_with_bounds(
    db: &DatabaseConnection,
    session_id: i32,
    slot_from: chrono::DateTime<Utc>,
    slot_to: chrono::DateTime<Utc>,
) -> Result<entity::session_slot::Model, DbErr> {
    SessionSlotFactory::new(db, session_id)
        .bounds(slot_from, slot_to)
        .build()
        .await
}
