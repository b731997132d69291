use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        amenity::{self, AMENITY_TAG},
        auth::{self, AUTH_TAG},
        owner::{self, OWNER_TAG},
        transaction::{self, TRANSACTION_TAG},
    },
    error::{config::ConfigError, AppError},
    service::amenity::AMENITY_IMAGE_PATH,
    state::AppState,
};

/// Directory the amenity pictures are served from.
const AMENITY_IMAGE_DIR: &str = "uploads/am_images";

#[derive(OpenApi)]
#[openapi(
    info(title = "Piscina API", description = "Resort booking backend"),
    paths(
        auth::signup,
        auth::login,
        auth::logout,
        auth::forgot_password,
        auth::reset_password,
        auth::get_user,
        amenity::get_all_amenities,
        amenity::get_amenity,
        transaction::create_transaction,
        transaction::get_transaction_by_ref,
        transaction::lookup_transactions,
        transaction::get_my_transactions,
        owner::get_analytics,
        owner::get_all_transactions,
        owner::get_todays_transactions,
        owner::get_transaction,
        owner::update_transaction_status,
        owner::check_in_transaction,
        owner::cancel_transaction,
        owner::add_transaction_extension,
    ),
    tags(
        (name = AUTH_TAG, description = "Accounts, sessions and password reset"),
        (name = AMENITY_TAG, description = "Amenity catalog"),
        (name = TRANSACTION_TAG, description = "Customer bookings"),
        (name = OWNER_TAG, description = "Owner dashboard and booking management"),
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/forgot-password", post(auth::forgot_password))
        .route("/api/auth/reset-password", post(auth::reset_password))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/amenities/all", get(amenity::get_all_amenities))
        .route("/api/amenities/{id}", get(amenity::get_amenity))
        .route("/api/transactions", post(transaction::create_transaction))
        .route(
            "/api/transactions/ref/{transaction_ref}",
            get(transaction::get_transaction_by_ref),
        )
        .route(
            "/api/transactions/lookup",
            get(transaction::lookup_transactions),
        )
        .route(
            "/api/transactions/mine",
            get(transaction::get_my_transactions),
        )
        .route("/api/owner/analytics", get(owner::get_analytics))
        .route("/api/owner/transactions", get(owner::get_all_transactions))
        .route(
            "/api/owner/transactions/today",
            get(owner::get_todays_transactions),
        )
        .route("/api/owner/transactions/{id}", get(owner::get_transaction))
        .route(
            "/api/owner/transactions/{id}/status",
            put(owner::update_transaction_status),
        )
        .route(
            "/api/owner/transactions/{id}/check-in",
            post(owner::check_in_transaction),
        )
        .route(
            "/api/owner/transactions/{id}/cancel",
            post(owner::cancel_transaction),
        )
        .route(
            "/api/owner/transactions/{id}/extensions",
            post(owner::add_transaction_extension),
        )
        .nest_service(AMENITY_IMAGE_PATH, ServeDir::new(AMENITY_IMAGE_DIR))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "API is running"
}

/// Builds the CORS layer for the frontend origin.
///
/// With an origin configured, credentialed requests (the session cookie) are
/// allowed from that origin only. Without one any origin may call the API but
/// cookies are not shared.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer for the configured origin
/// - `Err(AppError::ConfigErr(_))` - `ORIGIN` is not a valid header value
pub fn cors_layer(origin: Option<&str>) -> Result<CorsLayer, AppError> {
    let Some(origin) = origin else {
        return Ok(CorsLayer::permissive());
    };

    let origin = HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvVar {
        name: "ORIGIN".to_string(),
        reason: e.to_string(),
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]))
}
