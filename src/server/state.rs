//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned into each handler through Axum's
//! state extraction. Every field is cheap to clone: the database connection is a
//! pool handle and the SMTP transport shares its pool internally.

use sea_orm::DatabaseConnection;

use crate::server::service::mail::Mailer;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Outgoing mail transport for password reset emails.
    pub mailer: Mailer,

    /// Public base URL of this server, used to build amenity image links.
    pub app_url: String,

    /// Base URL of the frontend, used to build password reset links.
    pub frontend_url: String,
}

impl AppState {
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `mailer` - Outgoing mail transport
    /// - `app_url` - Public base URL of this server
    /// - `frontend_url` - Base URL of the frontend
    pub fn new(
        db: DatabaseConnection,
        mailer: Mailer,
        app_url: String,
        frontend_url: String,
    ) -> Self {
        Self {
            db,
            mailer,
            app_url,
            frontend_url,
        }
    }
}
