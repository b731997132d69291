use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{amenity::AmenityDto, api::ErrorDto},
    server::{error::AppError, service::amenity::AmenityService, state::AppState},
};

/// Tag for grouping amenity endpoints in OpenAPI documentation
pub static AMENITY_TAG: &str = "amenity";

/// List every amenity with public image URLs.
#[utoipa::path(
    get,
    path = "/api/amenities/all",
    tag = AMENITY_TAG,
    responses(
        (status = 200, description = "All amenities", body = Vec<AmenityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_amenities(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let amenities = AmenityService::new(&state.db, &state.app_url)
        .get_all()
        .await?;

    let amenities_dto: Vec<AmenityDto> = amenities.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(amenities_dto)))
}

/// Get one amenity.
///
/// # Returns
/// - `200 OK` - Amenity found
/// - `404 Not Found` - No amenity with that ID
#[utoipa::path(
    get,
    path = "/api/amenities/{id}",
    tag = AMENITY_TAG,
    params(
        ("id" = i32, Path, description = "Amenity ID")
    ),
    responses(
        (status = 200, description = "Amenity", body = AmenityDto),
        (status = 404, description = "Amenity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_amenity(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let amenity = AmenityService::new(&state.db, &state.app_url)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Amenity not found".to_string()))?;

    Ok((StatusCode::OK, Json(amenity.into_dto())))
}
