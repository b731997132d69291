use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::model::transaction::BookingStatus};

#[derive(Error, Debug, PartialEq)]
pub enum BookingError {
    /// The requested booking status change is not an edge of the lifecycle.
    ///
    /// Results in a 409 Conflict response.
    #[error("Cannot move a booking from {from} to {to}")]
    InvalidTransition {
        from: BookingStatus,
        to: BookingStatus,
    },

    /// A concurrent request changed the transaction between read and write.
    ///
    /// Results in a 409 Conflict response; the client may retry.
    #[error("Transaction {0} was modified concurrently, please retry")]
    ConcurrentModification(i32),
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        (
            StatusCode::CONFLICT,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
