//! Credential format rules and bcrypt hashing.

use crate::server::error::{internal::InternalError, validation::ValidationError, AppError};

/// bcrypt work factor for stored passwords.
pub const BCRYPT_COST: u32 = 10;

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Non-alphanumeric characters a password may contain.
const PASSWORD_SYMBOLS: &str = "@$!%*?&";

/// Checks the email shape `local@domain.tld` with no whitespace and a single `@`.
///
/// # Returns
/// - `Ok(())` - Email looks deliverable
/// - `Err(ValidationError::InvalidEmail)` - Otherwise
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
                && domain
                    .rsplit_once('.')
                    .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
                    .unwrap_or(false)
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Checks password strength.
///
/// At least 8 characters drawn from ASCII letters, digits and `@$!%*?&`, containing
/// at least one lowercase letter, one uppercase letter and one digit.
///
/// # Returns
/// - `Ok(())` - Password is strong enough
/// - `Err(ValidationError::WeakPassword)` - Otherwise
pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let allowed = password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SYMBOLS.contains(c));

    let strong = allowed
        && password.chars().count() >= MIN_PASSWORD_LENGTH
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit());

    if strong {
        Ok(())
    } else {
        Err(ValidationError::WeakPassword)
    }
}

/// Hashes a password with bcrypt on the blocking thread pool.
pub async fn hash_password(password: String) -> Result<String, AppError> {
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, BCRYPT_COST))
        .await
        .map_err(InternalError::from)?
        .map_err(InternalError::from)?;

    Ok(hashed)
}

/// Verifies a password against a stored bcrypt hash on the blocking thread pool.
pub async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(InternalError::from)?
        .map_err(InternalError::from)?;

    Ok(matches)
}
