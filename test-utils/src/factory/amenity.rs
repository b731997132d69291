//! Amenity factory for creating test catalog entries.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test amenities with customizable fields.
pub struct AmenityFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    price: f64,
    image: Option<String>,
    description: Option<String>,
    capacity: Option<i32>,
    category: Option<String>,
}

impl<'a> AmenityFactory<'a> {
    /// Creates a new AmenityFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Cottage {id}"`
    /// - price: `1500.0`
    /// - image: `"cottage{id}.jpg"`
    /// - capacity: `10`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Cottage {}", id),
            price: 1500.0,
            image: Some(format!("cottage{}.jpg", id)),
            description: Some("Shaded cottage by the pool".to_string()),
            capacity: Some(10),
            category: Some("Cottage".to_string()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }

    /// Builds and inserts the amenity entity into the database.
    pub async fn build(self) -> Result<entity::amenity::Model, DbErr> {
        entity::amenity::ActiveModel {
            name: ActiveValue::Set(self.name),
            price: ActiveValue::Set(self.price),
            image: ActiveValue::Set(self.image),
            description: ActiveValue::Set(self.description),
            capacity: ActiveValue::Set(self.capacity),
            category: ActiveValue::Set(self.category),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an amenity with default values.
pub async fn create_amenity(db: &DatabaseConnection) -> Result<entity::amenity::Model, DbErr> {
    AmenityFactory::new(db).build().await
}
