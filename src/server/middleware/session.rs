//! Type-safe session management wrappers.
//!
//! Wraps the tower-sessions `Session` so handlers never touch raw session keys.

use tower_sessions::Session;

use crate::server::error::AppError;

// Session key constants
const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Handles the logged-in user's ID and session lifecycle operations.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's ID in the session.
    ///
    /// Called after successful login to establish a logged-in session. The
    /// session ID is cycled first so a pre-login session cannot be fixated.
    ///
    /// # Returns
    /// - `Ok(())` - User ID successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the logged-in user's ID from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        let user_id = self.session.get::<i32>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }

    /// Checks if a user is currently logged in.
    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.get_user_id().await?.is_some())
    }

    /// Clears all data from the session.
    ///
    /// Used during logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
