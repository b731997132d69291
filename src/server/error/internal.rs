use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored column holds a value outside its known set.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unexpected value '{value}' stored in column {column}")]
    InvalidStoredValue {
        /// Column the value was read from
        column: &'static str,
        /// The offending stored value
        value: String,
    },

    /// Password hashing or verification failed inside bcrypt.
    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// A blocking task panicked or was cancelled.
    #[error("Blocking task failed: {0}")]
    BlockingTask(#[from] tokio::task::JoinError),
}
