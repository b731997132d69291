use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user id is stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Failed to find user ID in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Results in a 401 Unauthorized response; the session is stale.
    #[error("User {0} from session was not found in the database")]
    UserNotInDatabase(i32),

    /// The authenticated user lacks the role required by the endpoint.
    ///
    /// Results in a 403 Forbidden response. The reason is logged, not returned.
    #[error("User {0} was denied access: {1}")]
    AccessDenied(i32, String),

    /// Login attempted with an email that matches no account.
    ///
    /// Results in a 400 Bad Request response.
    #[error("User not found")]
    UnknownEmail,

    /// Login attempted with the wrong password.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Invalid password")]
    InvalidPassword,

    /// Presented reset token does not match any user or has expired.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Token is invalid or has expired.")]
    InvalidResetToken,
}

/// Converts authentication errors into HTTP responses.
///
/// Credential problems stay at 400 like the signup and reset forms; missing or stale
/// sessions map to 401 and role failures to 403. Access denials are logged at debug
/// level with their reason while the client only sees a generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                "You must be logged in to do that".to_string(),
            ),
            Self::AccessDenied(_, _) => {
                tracing::debug!("{}", self);
                (
                    StatusCode::FORBIDDEN,
                    "You do not have permission to access this resource".to_string(),
                )
            }
            Self::UnknownEmail | Self::InvalidPassword | Self::InvalidResetToken => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
        };

        (status, Json(ErrorDto { error })).into_response()
    }
}
