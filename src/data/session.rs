use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

/// Read-only access to game sessions.
///
/// Session CRUD itself lives outside the scheduling subsystem; this
/// repository only resolves the rows the slot routes need for existence
/// and campaign lookups.
pub struct GameSessionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameSessionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a game session by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The session
    /// - `Ok(None)`: Session not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::game_session::Model>, DbErr> {
        entity::prelude::GameSession::find_by_id(id).one(self.db).await
    }
}
