//! Owner dashboard: analytics and booking management.
//!
//! Every handler here requires the `owner` role.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        analytics::{AnalyticsDto, AnalyticsQuery},
        api::ErrorDto,
        transaction::{AddExtensionDto, TransactionDto, UpdateStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            analytics::DateRange,
            transaction::{BookingStatus, ExtensionParam},
        },
        service::{analytics::AnalyticsService, transaction::TransactionService},
        state::AppState,
    },
};

/// Tag for grouping owner endpoints in OpenAPI documentation
pub static OWNER_TAG: &str = "owner";

/// Sales analytics for a range of local days.
///
/// Missing bounds default to the current month up to today.
///
/// # Returns
/// - `200 OK` - Financials, booking sources, status counts and daily trend
/// - `400 Bad Request` - Start date after end date
/// - `401 Unauthorized` / `403 Forbidden` - Not logged in, or not an owner
#[utoipa::path(
    get,
    path = "/api/owner/analytics",
    tag = OWNER_TAG,
    params(AnalyticsQuery),
    responses(
        (status = 200, description = "Analytics for the range", body = AnalyticsDto),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_analytics(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<AnalyticsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner])
        .await?;

    let range = DateRange::from_query(query.start, query.end)?;
    let analytics = AnalyticsService::new(&state.db).get_analytics(range).await?;

    Ok((StatusCode::OK, Json(analytics.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/owner/transactions",
    tag = OWNER_TAG,
    responses(
        (status = 200, description = "All bookings, newest first", body = Vec<TransactionDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_transactions(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner])
        .await?;

    let transactions = TransactionService::new(&state.db)
        .get_all_with_reservations()
        .await?;

    let transactions_dto: Vec<TransactionDto> =
        transactions.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(transactions_dto)))
}

/// Bookings created today, in resort local time.
#[utoipa::path(
    get,
    path = "/api/owner/transactions/today",
    tag = OWNER_TAG,
    responses(
        (status = 200, description = "Today's bookings, newest first", body = Vec<TransactionDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_todays_transactions(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner])
        .await?;

    let transactions = TransactionService::new(&state.db)
        .get_todays_transactions()
        .await?;

    let transactions_dto: Vec<TransactionDto> =
        transactions.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(transactions_dto)))
}

#[utoipa::path(
    get,
    path = "/api/owner/transactions/{id}",
    tag = OWNER_TAG,
    params(
        ("id" = i32, Path, description = "Transaction ID")
    ),
    responses(
        (status = 200, description = "Booking", body = TransactionDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an owner", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_transaction(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner])
        .await?;

    let transaction = TransactionService::new(&state.db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Transaction {} not found", id)))?;

    Ok((StatusCode::OK, Json(transaction.into_dto())))
}

/// Move a booking to another status.
///
/// # Returns
/// - `200 OK` - Updated booking
/// - `400 Bad Request` - Unknown status name
/// - `404 Not Found` - No such booking
/// - `409 Conflict` - The lifecycle does not allow the move, or a concurrent change won
#[utoipa::path(
    put,
    path = "/api/owner/transactions/{id}/status",
    tag = OWNER_TAG,
    params(
        ("id" = i32, Path, description = "Transaction ID")
    ),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Updated booking", body = TransactionDto),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an owner", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Status change not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_transaction_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner])
        .await?;

    let next: BookingStatus = payload.booking_status.trim().parse()?;
    let transaction = TransactionService::new(&state.db)
        .update_status(id, next)
        .await?;

    Ok((StatusCode::OK, Json(transaction.into_dto())))
}

/// Check in a confirmed booking, settling its balance.
#[utoipa::path(
    post,
    path = "/api/owner/transactions/{id}/check-in",
    tag = OWNER_TAG,
    params(
        ("id" = i32, Path, description = "Transaction ID")
    ),
    responses(
        (status = 200, description = "Checked-in booking", body = TransactionDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an owner", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Booking is not confirmed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_in_transaction(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner])
        .await?;

    let transaction = TransactionService::new(&state.db).check_in(id).await?;

    Ok((StatusCode::OK, Json(transaction.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/owner/transactions/{id}/cancel",
    tag = OWNER_TAG,
    params(
        ("id" = i32, Path, description = "Transaction ID")
    ),
    responses(
        (status = 200, description = "Cancelled booking", body = TransactionDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an owner", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Booking can no longer be cancelled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_transaction(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner])
        .await?;

    let transaction = TransactionService::new(&state.db).cancel(id).await?;

    Ok((StatusCode::OK, Json(transaction.into_dto())))
}

/// Record a stay extension.
///
/// Appends the extension record to the booking's history and adds its cost to
/// the total amount and the outstanding balance.
///
/// # Returns
/// - `200 OK` - Extended booking
/// - `400 Bad Request` - Negative or non-finite cost
/// - `404 Not Found` - No such booking
/// - `409 Conflict` - Concurrent updates kept winning
#[utoipa::path(
    post,
    path = "/api/owner/transactions/{id}/extensions",
    tag = OWNER_TAG,
    params(
        ("id" = i32, Path, description = "Transaction ID")
    ),
    request_body = AddExtensionDto,
    responses(
        (status = 200, description = "Extended booking", body = TransactionDto),
        (status = 400, description = "Invalid cost", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an owner", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 409, description = "Concurrent modification", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_transaction_extension(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<AddExtensionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Owner])
        .await?;

    let extension = ExtensionParam::new(payload.extension, payload.cost)?;
    let transaction = TransactionService::new(&state.db)
        .add_extension(id, extension)
        .await?;

    Ok((StatusCode::OK, Json(transaction.into_dto())))
}
