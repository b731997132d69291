//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Password every factory user gets unless overridden.
pub const DEFAULT_PASSWORD: &str = "Passw0rd";

/// bcrypt cost used for factory users; the minimum keeps tests fast.
const TEST_BCRYPT_COST: u32 = 4;

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let owner = UserFactory::new(&db)
///     .email("owner@example.com")
///     .role("owner")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    email: String,
    password: String,
    role: String,
    reset_password_token: Option<String>,
    reset_password_expires: Option<DateTime<Utc>>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user{id}"` where id is auto-incremented
    /// - email: `"user{id}@example.com"`
    /// - password: [`DEFAULT_PASSWORD`]
    /// - role: `"customer"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user{}", id),
            email: format!("user{}@example.com", id),
            password: DEFAULT_PASSWORD.to_string(),
            role: "customer".to_string(),
            reset_password_token: None,
            reset_password_expires: None,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the plaintext password; it is hashed on `build()`.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Sets a stored reset token digest and its expiry.
    ///
    /// # Arguments
    /// - `token_hash` - Hex SHA-256 digest as it would be persisted
    /// - `expires` - Expiry timestamp
    pub fn reset_token(mut self, token_hash: impl Into<String>, expires: DateTime<Utc>) -> Self {
        self.reset_password_token = Some(token_hash.into());
        self.reset_password_expires = Some(expires);
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert or hashing failure
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let hashed = bcrypt::hash(&self.password, TEST_BCRYPT_COST)
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(hashed),
            role: ActiveValue::Set(self.role),
            reset_password_token: ActiveValue::Set(self.reset_password_token),
            reset_password_expires: ActiveValue::Set(self.reset_password_expires),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a customer with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with the `owner` role.
pub async fn create_owner(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role("owner").build().await
}
