use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by their primary id.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The user
    /// - `Ok(None)`: User not found
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }
}
