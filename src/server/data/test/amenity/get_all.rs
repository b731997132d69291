use super::*;

/// Tests listing amenities in ID order.
///
/// Expected: Ok with both amenities, lowest ID first
#[tokio::test]
async fn lists_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Amenity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = AmenityFactory::new(db).name("Kubo").build().await?;
    let second = AmenityFactory::new(db).name("Pavilion").build().await?;

    let amenities = AmenityRepository::new(db).get_all().await?;

    let ids: Vec<i32> = amenities.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(amenities[0].name, "Kubo");

    Ok(())
}
