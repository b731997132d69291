//! Amenity catalog models.

use crate::model::amenity::AmenityDto;

/// Bookable amenity such as a cottage, room or pool table.
#[derive(Debug, Clone, PartialEq)]
pub struct Amenity {
    pub id: i32,
    pub name: String,
    pub price: f64,
    /// Stored file name under the uploads directory, or an absolute URL.
    pub image: Option<String>,
    pub description: Option<String>,
    pub capacity: Option<i32>,
    pub category: Option<String>,
}

impl Amenity {
    pub fn from_entity(entity: entity::amenity::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            price: entity.price,
            image: entity.image,
            description: entity.description,
            capacity: entity.capacity,
            category: entity.category,
        }
    }

    /// Converts to a DTO. `image` must already be resolved to a public URL.
    pub fn into_dto(self) -> AmenityDto {
        AmenityDto {
            id: self.id,
            name: self.name,
            price: self.price,
            image: self.image,
            description: self.description,
            capacity: self.capacity,
            category: self.category,
        }
    }
}
