use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        transaction::{
            CreateTransactionDto, CreatedTransactionDto, CustomerLookupQuery, TransactionDto,
        },
    },
    server::{
        error::AppError, middleware::auth::AuthGuard,
        model::transaction::CreateTransactionParam, service::transaction::TransactionService,
        state::AppState,
    },
};

/// Tag for grouping customer booking endpoints in OpenAPI documentation
pub static TRANSACTION_TAG: &str = "transaction";

/// Place a booking.
///
/// Bookings can be made anonymously; when a customer is logged in the booking
/// is linked to their account. New bookings start Pending with a partial
/// payment unless an owner enters them.
///
/// # Returns
/// - `201 Created` - Booking stored
/// - `400 Bad Request` - Invalid booking data or duplicate reference
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/transactions",
    tag = TRANSACTION_TAG,
    request_body = CreateTransactionDto,
    responses(
        (status = 201, description = "Booking stored", body = CreatedTransactionDto),
        (status = 400, description = "Invalid booking data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_transaction(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTransactionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).current_user().await?;

    let param = CreateTransactionParam::from_dto(payload, user.as_ref())?;
    let transaction = TransactionService::new(&state.db).create(param).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedTransactionDto {
            id: transaction.id,
            transaction_ref: transaction.transaction_ref,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/transactions/ref/{transaction_ref}",
    tag = TRANSACTION_TAG,
    params(
        ("transaction_ref" = String, Path, description = "Booking reference, e.g. TX-AB12CD34")
    ),
    responses(
        (status = 200, description = "Booking", body = TransactionDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_transaction_by_ref(
    State(state): State<AppState>,
    Path(transaction_ref): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let transaction = TransactionService::new(&state.db)
        .find_by_ref(&transaction_ref)
        .await?
        .ok_or_else(|| AppError::NotFound("Transaction not found".to_string()))?;

    Ok((StatusCode::OK, Json(transaction.into_dto())))
}

/// Find bookings by customer name and contact number.
#[utoipa::path(
    get,
    path = "/api/transactions/lookup",
    tag = TRANSACTION_TAG,
    params(CustomerLookupQuery),
    responses(
        (status = 200, description = "Matching bookings, newest first", body = Vec<TransactionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn lookup_transactions(
    State(state): State<AppState>,
    Query(query): Query<CustomerLookupQuery>,
) -> Result<impl IntoResponse, AppError> {
    let transactions = TransactionService::new(&state.db)
        .find_by_customer(&query.customer_name, &query.contact_number)
        .await?;

    let transactions_dto: Vec<TransactionDto> =
        transactions.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(transactions_dto)))
}

/// Bookings of the logged-in user.
///
/// # Access Control
/// Requires a logged-in user
#[utoipa::path(
    get,
    path = "/api/transactions/mine",
    tag = TRANSACTION_TAG,
    responses(
        (status = 200, description = "The user's bookings, newest first", body = Vec<TransactionDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_transactions(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let transactions = TransactionService::new(&state.db)
        .find_by_user_id(user.id)
        .await?;

    let transactions_dto: Vec<TransactionDto> =
        transactions.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(transactions_dto)))
}
