use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{
            ForgotPasswordDto, LoginDto, LoginResponseDto, ResetPasswordDto, SignupDto, UserDto,
        },
    },
    server::{
        error::AppError, middleware::session::AuthSession, service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new customer account.
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Missing fields, password mismatch, invalid email, weak password
///   or email/username already taken
/// - `500 Internal Server Error` - Database or hashing failure
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "Account created", body = MessageDto),
        (status = 400, description = "Invalid signup data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db).signup(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            message: "User created successfully".to_string(),
        }),
    ))
}

/// Log in with email and password.
///
/// Stores the user ID in the session on success. The response never carries
/// the password hash.
///
/// # Returns
/// - `200 OK` - Logged in
/// - `400 Bad Request` - Missing credentials, unknown email or wrong password
/// - `500 Internal Server Error` - Database or session failure
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponseDto),
        (status = 400, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db).login(payload).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    tracing::debug!("User {} logged in", user.id);

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            message: "Login successful".to_string(),
            user: user.into_dto(),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cleared", body = MessageDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out successfully".to_string(),
        }),
    ))
}

/// Request a password reset link by email.
///
/// Always answers 200 for unknown or missing emails so the endpoint cannot be
/// used to discover which accounts exist.
///
/// # Returns
/// - `200 OK` - Request accepted
/// - `500 Internal Server Error` - Reset email could not be delivered
#[utoipa::path(
    post,
    path = "/api/auth/forgot-password",
    tag = AUTH_TAG,
    request_body = ForgotPasswordDto,
    responses(
        (status = 200, description = "Request accepted", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db)
        .forgot_password(payload.email, &state.mailer, &state.frontend_url)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Reset link sent.".to_string(),
        }),
    ))
}

/// Set a new password using a reset token.
///
/// # Returns
/// - `200 OK` - Password replaced
/// - `400 Bad Request` - Mismatch, weak password, or invalid/expired token
/// - `500 Internal Server Error` - Database or hashing failure
#[utoipa::path(
    post,
    path = "/api/auth/reset-password",
    tag = AUTH_TAG,
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Password replaced", body = MessageDto),
        (status = 400, description = "Invalid token or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db).reset_password(payload).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Password reset successful.".to_string(),
        }),
    ))
}

/// Get the user of the current session.
///
/// # Returns
/// - `200 OK` - Logged-in user
/// - `404 Not Found` - Anonymous session, or the user no longer exists
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 404, description = "No user in session", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let Some(user_id) = AuthSession::new(&session).get_user_id().await? else {
        return Err(AppError::NotFound("User not found".to_string()));
    };

    let Some(user) = AuthService::new(&state.db).find_by_id(user_id).await? else {
        return Err(AppError::NotFound("User not found".to_string()));
    };

    Ok((StatusCode::OK, Json(user.into_dto())))
}
