use thiserror::Error;

/// Malformed or missing request input. Every variant maps to 400 Bad Request and the
/// display text is returned to the client verbatim.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Email and password are required")]
    MissingCredentials,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password must be at least 8 characters, with 1 uppercase, 1 lowercase, and 1 number.")]
    WeakPassword,

    #[error("Start date must not be after end date")]
    InvalidDateRange,

    #[error("{0} must be a non-negative amount")]
    InvalidAmount(&'static str),

    #[error("Unknown {field} '{value}'")]
    UnknownValue { field: &'static str, value: String },

    #[error("{0}")]
    Invalid(String),
}
