//! Amenity catalog with public image URLs.

use sea_orm::DatabaseConnection;

use crate::server::{data::amenity::AmenityRepository, error::AppError, model::amenity::Amenity};

/// Public path under which amenity pictures are served.
pub const AMENITY_IMAGE_PATH: &str = "/uploads/am_images";

pub struct AmenityService<'a> {
    db: &'a DatabaseConnection,
    app_url: &'a str,
}

impl<'a> AmenityService<'a> {
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `app_url` - Public base URL of this server, used to build image links
    pub fn new(db: &'a DatabaseConnection, app_url: &'a str) -> Self {
        Self { db, app_url }
    }

    /// Gets every amenity with resolved image URLs.
    pub async fn get_all(&self) -> Result<Vec<Amenity>, AppError> {
        let amenities = AmenityRepository::new(self.db).get_all().await?;

        Ok(amenities
            .into_iter()
            .map(|amenity| format_amenity(amenity, self.app_url))
            .collect())
    }

    /// Gets an amenity by ID with a resolved image URL.
    ///
    /// # Returns
    /// - `Ok(Some(Amenity))` - Amenity found
    /// - `Ok(None)` - No amenity with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Amenity>, AppError> {
        let amenity = AmenityRepository::new(self.db).find_by_id(id).await?;

        Ok(amenity.map(|amenity| format_amenity(amenity, self.app_url)))
    }
}

/// Resolves the stored image of an amenity into a public URL.
///
/// Absolute `http://` and `https://` values are kept as they are, file names are
/// placed under the uploads path of `app_url`, and a missing image stays `None`.
pub fn format_amenity(mut amenity: Amenity, app_url: &str) -> Amenity {
    amenity.image = amenity
        .image
        .filter(|image| !image.trim().is_empty())
        .map(|image| {
            if image.starts_with("http://") || image.starts_with("https://") {
                image
            } else {
                format!(
                    "{}{}/{}",
                    app_url.trim_end_matches('/'),
                    AMENITY_IMAGE_PATH,
                    image.trim_start_matches('/')
                )
            }
        });

    amenity
}
