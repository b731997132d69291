use thiserror::Error;

/// Failures while composing or delivering outgoing email.
#[derive(Error, Debug)]
pub enum MailError {
    /// Sender or recipient is not a valid mailbox.
    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The message could not be assembled.
    #[error("Failed to build email: {0}")]
    Build(#[from] lettre::error::Error),

    /// The SMTP server rejected the message or could not be reached.
    #[error("Failed to send email: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}
