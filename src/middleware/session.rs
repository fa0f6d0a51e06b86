//! Type-safe session management wrappers.
//!
//! Authentication itself (login, token exchange) lives outside this service;
//! the only session state the scheduling backend consumes is the logged-in
//! user's id, written by the external auth layer. `AuthSession` wraps that
//! single key so handlers never touch raw session strings.

use tower_sessions::Session;

use crate::error::AppError;

const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's id in the session.
    ///
    /// Called by the external authentication layer after a successful login
    /// to establish a logged-in session; tests use it to impersonate users.
    ///
    /// # Returns
    /// - `Ok(())` - User id successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the logged-in user's id from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        let user_id = self.session.get::<i32>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }

    /// Removes all session state, logging the user out.
    ///
    /// # Returns
    /// - `Ok(())` - Session cleared
    /// - `Err(AppError::SessionErr(_))` - Failed to clear session
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
