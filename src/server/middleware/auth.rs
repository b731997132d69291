use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::{Role, User},
};

pub enum Permission {
    /// Owner dashboard and booking management.
    Owner,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the logged-in user and checks every listed permission.
    ///
    /// An empty list only requires a logged-in user.
    ///
    /// # Returns
    /// - `Ok(User)` - Logged in with all permissions
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session points at a deleted user
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Owner => {
                    if user.role != Role::Owner {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted to access an owner endpoint without the owner role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Resolves the logged-in user if there is one.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Logged in
    /// - `Ok(None)` - Anonymous, or the session points at a deleted user
    pub async fn current_user(&self) -> Result<Option<User>, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(None);
        };

        UserRepository::new(self.db).find_by_id(user_id).await
    }
}
