//! User data repository for database operations.
//!
//! Credential records: creation, point lookups and the password reset token
//! columns. Uniqueness of email and username is left to the unique constraints.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, SqlErr,
};

use crate::server::{
    error::AppError,
    model::user::{CreateUserParam, User},
};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `param` - Username, email, already-hashed password and role
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - Email or username is already taken
    /// - `Err(AppError::DbErr)` - Any other database error
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let result = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            reset_password_token: ActiveValue::Set(None),
            reset_password_expires: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await;

        match result {
            Ok(entity) => User::from_entity(entity),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(AppError::Conflict(
                    "Email or username already exists".to_string(),
                )),
                _ => Err(err.into()),
            },
        }
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError)` - Database error or corrupt stored role
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Finds a user by exact email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Stores a reset token digest and its expiry, replacing any earlier token.
    ///
    /// # Arguments
    /// - `user_id` - Account the token belongs to
    /// - `token_hash` - SHA-256 hex digest of the token sent by email
    /// - `expires_at` - Instant after which the token is rejected
    ///
    /// # Returns
    /// - `Ok(())` - Token stored (or no matching user)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_reset_token(
        &self,
        user_id: i32,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::ResetPasswordToken,
                Expr::value(Some(token_hash)),
            )
            .col_expr(
                entity::user::Column::ResetPasswordExpires,
                Expr::value(Some(expires_at)),
            )
            .filter(entity::user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Clears the reset token columns of a user if they still hold `token_hash`.
    ///
    /// A token issued after `token_hash` is left in place.
    ///
    /// # Returns
    /// - `Ok(true)` - Token cleared
    /// - `Ok(false)` - User missing or holding a different token
    pub async fn clear_reset_token(&self, user_id: i32, token_hash: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::ResetPasswordToken,
                Expr::value(Option::<String>::None),
            )
            .col_expr(
                entity::user::Column::ResetPasswordExpires,
                Expr::value(Option::<DateTime<Utc>>::None),
            )
            .filter(entity::user::Column::Id.eq(user_id))
            .filter(entity::user::Column::ResetPasswordToken.eq(token_hash))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Finds the user holding an unexpired reset token.
    ///
    /// # Arguments
    /// - `token_hash` - SHA-256 hex digest of the presented token
    /// - `now` - Current instant; tokens expiring at or before it are ignored
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Token matches and has not expired
    /// - `Ok(None)` - Unknown or expired token
    pub async fn find_by_reset_token(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::ResetPasswordToken.eq(token_hash))
            .filter(entity::user::Column::ResetPasswordExpires.gt(now))
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Replaces the password of the user holding an unexpired reset token and
    /// clears the token, in a single conditional update.
    ///
    /// # Arguments
    /// - `token_hash` - SHA-256 hex digest of the presented token
    /// - `password_hash` - bcrypt hash of the new password
    /// - `now` - Current instant used for the expiry check
    ///
    /// # Returns
    /// - `Ok(true)` - Password replaced; the token can no longer be used
    /// - `Ok(false)` - Token unknown, expired or already used
    /// - `Err(DbErr)` - Database error during update
    pub async fn reset_password_with_token(
        &self,
        token_hash: &str,
        password_hash: String,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::Password, Expr::value(password_hash))
            .col_expr(
                entity::user::Column::ResetPasswordToken,
                Expr::value(Option::<String>::None),
            )
            .col_expr(
                entity::user::Column::ResetPasswordExpires,
                Expr::value(Option::<DateTime<Utc>>::None),
            )
            .filter(entity::user::Column::ResetPasswordToken.eq(token_hash))
            .filter(entity::user::Column::ResetPasswordExpires.gt(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sets a new password hash and clears any pending reset token.
    ///
    /// # Returns
    /// - `Ok(true)` - Password updated
    /// - `Ok(false)` - No user with that ID
    pub async fn update_password(&self, user_id: i32, password_hash: String) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::Password, Expr::value(password_hash))
            .col_expr(
                entity::user::Column::ResetPasswordToken,
                Expr::value(Option::<String>::None),
            )
            .col_expr(
                entity::user::Column::ResetPasswordExpires,
                Expr::value(Option::<DateTime<Utc>>::None),
            )
            .filter(entity::user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
