use super::*;

/// Tests finding an amenity by ID.
///
/// Expected: Ok(Some) with the stored image file name untouched
#[tokio::test]
async fn finds_existing_amenity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Amenity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = AmenityFactory::new(db)
        .image(Some("kubo.jpg".to_string()))
        .build()
        .await?;

    let amenity = AmenityRepository::new(db).find_by_id(stored.id).await?;

    assert_eq!(amenity.and_then(|a| a.image), Some("kubo.jpg".to_string()));

    Ok(())
}

/// Tests looking up a missing amenity.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Amenity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(AmenityRepository::new(db).find_by_id(1).await?.is_none());

    Ok(())
}
