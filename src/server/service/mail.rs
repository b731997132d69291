//! Outgoing email.
//!
//! `Mailer` is chosen once at startup: SMTP when a host is configured, otherwise
//! a mailer that only logs the recipient and subject.

use lettre::{
    message::{header::ContentType, Mailbox},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

#[cfg(test)]
use std::sync::{Arc, Mutex};

use crate::server::error::{mail::MailError, AppError};

/// A single message to deliver.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    /// HTML body.
    pub body: String,
}

#[derive(Clone)]
pub enum Mailer {
    /// Delivers through an SMTP relay.
    Smtp {
        transport: AsyncSmtpTransport<Tokio1Executor>,
        from: Mailbox,
    },
    /// Logs messages instead of sending them.
    Log,
    /// Records messages in memory.
    #[cfg(test)]
    Outbox(Arc<Mutex<Vec<OutgoingMail>>>),
    /// Rejects every message.
    #[cfg(test)]
    Failing,
}

impl Mailer {
    /// Sends a message.
    ///
    /// # Returns
    /// - `Ok(())` - Message accepted by the transport
    /// - `Err(AppError::MailErr(_))` - Invalid recipient, build failure or SMTP error
    pub async fn send(&self, mail: OutgoingMail) -> Result<(), AppError> {
        match self {
            Mailer::Smtp { transport, from } => {
                let to: Mailbox = mail.to.parse().map_err(MailError::from)?;

                let message = Message::builder()
                    .from(from.clone())
                    .to(to)
                    .subject(mail.subject)
                    .header(ContentType::TEXT_HTML)
                    .body(mail.body)
                    .map_err(MailError::from)?;

                transport.send(message).await.map_err(MailError::from)?;

                tracing::info!("Sent email to {}", mail.to);
            }
            Mailer::Log => {
                // the body may carry a reset token
                tracing::info!(
                    to = %mail.to,
                    subject = %mail.subject,
                    "SMTP not configured, email not sent"
                );
            }
            #[cfg(test)]
            Mailer::Outbox(outbox) => {
                if let Ok(mut sent) = outbox.lock() {
                    sent.push(mail);
                }
            }
            #[cfg(test)]
            Mailer::Failing => {
                // not a mailbox, so parsing always fails
                "undeliverable".parse::<Mailbox>().map_err(MailError::from)?;
            }
        }

        Ok(())
    }
}

/// Builds the password reset email.
///
/// # Arguments
/// - `to` - Recipient address
/// - `reset_url` - Link to the frontend reset form, token included
pub fn password_reset_mail(to: &str, reset_url: &str) -> OutgoingMail {
    let body = format!(
        r#"<div style="font-family: Arial, sans-serif; padding: 20px;">
  <h2>Password Reset Request</h2>
  <p>You requested a password reset for your La Piscina account.</p>
  <p>Click the button below to set a new password (link expires in 15 minutes):</p>
  <a href="{reset_url}" target="_blank" style="background-color: #F57C00; color: white; padding: 10px 20px; text-decoration: none; border-radius: 5px; display: inline-block; margin: 10px 0;">Reset Password</a>
  <p>If you didn't request this, please ignore this email.</p>
</div>"#
    );

    OutgoingMail {
        to: to.to_string(),
        subject: "Password Reset Request".to_string(),
        body,
    }
}
