use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AmenityDto {
    pub id: i32,
    pub name: String,
    pub price: f64,
    /// Absolute URL of the amenity picture.
    pub image: Option<String>,
    pub description: Option<String>,
    pub capacity: Option<i32>,
    pub category: Option<String>,
}
