//! User domain models and parameters.
//!
//! Users sign up with a username, email and password. Owners are provisioned
//! directly in the database; every signup creates a customer.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};

use crate::{
    model::user::UserDto,
    server::{error::AppError, util::parse::parse_stored},
};

/// Account role controlling access to owner endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Customer,
    Owner,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Owner => "owner",
        }
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Role::Customer),
            "owner" => Ok(Role::Owner),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registered account.
///
/// Carries the password hash for credential checks in the service layer. The
/// hash never leaves the server: `into_dto` drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// bcrypt hash of the password.
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - Stored role is unknown
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = parse_stored("role", entity.role)?;

        Ok(Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password,
            role,
            created_at: entity.created_at,
        })
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            role: self.role.to_string(),
        }
    }
}

/// Parameters for inserting a new user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Validated signup input.
#[derive(Debug, Clone)]
pub struct SignupParam {
    pub username: String,
    pub email: String,
    pub password: String,
}
