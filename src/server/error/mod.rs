//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod booking;
pub mod config;
pub mod internal;
pub mod mail;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, booking::BookingError, config::ConfigError, internal::InternalError,
        mail::MailError, validation::ValidationError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors (`AuthError`,
/// `BookingError`, `ValidationError`) handle their own response mapping, while
/// infrastructure failures collapse into a generic 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for status code mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Booking lifecycle error such as an illegal status transition.
    #[error(transparent)]
    BookingErr(#[from] BookingError),

    /// Malformed or missing request input. Always 400 Bad Request.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Internal invariant violation, e.g. an unknown enum value stored in the database.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Outgoing email could not be built or delivered.
    #[error(transparent)]
    MailErr(#[from] MailError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx database driver error (session store migrations).
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Socket or filesystem error while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error. Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Unique key conflict, e.g. a duplicate email at signup.
    ///
    /// Reported as 400 Bad Request so clients of the signup form get the same
    /// status as for other input problems.
    #[error("{0}")]
    Conflict(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - `ValidationErr`, `Conflict`
/// - 404 Not Found - `NotFound`
/// - Variable - `AuthErr` and `BookingErr`, delegated to their own `into_response()`
/// - 500 Internal Server Error - everything else, logged server-side
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::BookingErr(err) => err.into_response(),
            Self::ValidationErr(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
