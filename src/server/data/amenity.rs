//! Amenity catalog repository. Read-only.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::amenity::Amenity;

pub struct AmenityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AmenityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every amenity ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Amenity>, DbErr> {
        let entities = entity::prelude::Amenity::find()
            .order_by_asc(entity::amenity::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Amenity::from_entity).collect())
    }

    /// Gets an amenity by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Amenity))` - Amenity found
    /// - `Ok(None)` - No amenity with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Amenity>, DbErr> {
        let entity = entity::prelude::Amenity::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Amenity::from_entity))
    }
}
