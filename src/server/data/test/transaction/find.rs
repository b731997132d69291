use super::*;

/// Tests finding a booking by ID with its reservation lines.
///
/// Expected: Ok(Some) with the line attached
#[tokio::test]
async fn find_by_id_attaches_reservations() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = TransactionFactory::new(db).build().await?;
    ReservationFactory::new(db, stored.id)
        .amenity_name("Cabana")
        .build()
        .await?;
    let other = TransactionFactory::new(db).build().await?;
    ReservationFactory::new(db, other.id).build().await?;

    let tx = TransactionRepository::new(db)
        .find_by_id(stored.id)
        .await?
        .unwrap();

    assert_eq!(tx.reservations.len(), 1);
    assert_eq!(tx.reservations[0].amenity_name, "Cabana");

    Ok(())
}

/// Tests looking up a missing booking.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_by_id_returns_none_when_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(TransactionRepository::new(db).find_by_id(42).await?.is_none());

    Ok(())
}

/// Tests finding a booking by its public reference.
///
/// Expected: Ok(Some) with matching ID
#[tokio::test]
async fn find_by_ref_matches_reference() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = TransactionFactory::new(db)
        .transaction_ref("TX-REF00001")
        .build()
        .await?;

    let repo = TransactionRepository::new(db);

    assert_eq!(
        repo.find_by_ref("TX-REF00001").await?.map(|t| t.id),
        Some(stored.id)
    );
    assert!(repo.find_by_ref("TX-NOPE0000").await?.is_none());

    Ok(())
}

/// Tests customer lookup requires both name and contact and orders newest first.
///
/// Expected: two matching bookings, newest first
#[tokio::test]
async fn find_by_customer_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let older = TransactionFactory::new(db)
        .customer("Maria", "0918")
        .created_at(Utc::now() - Duration::days(3))
        .build()
        .await?;
    let newer = TransactionFactory::new(db)
        .customer("Maria", "0918")
        .created_at(Utc::now() - Duration::days(1))
        .build()
        .await?;
    TransactionFactory::new(db)
        .customer("Maria", "0999")
        .build()
        .await?;

    let found = TransactionRepository::new(db)
        .find_by_customer("Maria", "0918")
        .await?;

    let ids: Vec<i32> = found.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Tests listing a user's bookings.
///
/// Expected: only the user's bookings
#[tokio::test]
async fn find_by_user_id_filters_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let mine = TransactionFactory::new(db).user_id(user.id).build().await?;
    TransactionFactory::new(db).build().await?;

    let found = TransactionRepository::new(db).find_by_user_id(user.id).await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, mine.id);

    Ok(())
}

/// Tests that a malformed stored history reads as empty.
///
/// Expected: Ok with empty extension_history
#[tokio::test]
async fn malformed_history_reads_as_empty() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = TransactionFactory::new(db)
        .extension_history(json!({"not": "an array"}))
        .build()
        .await?;

    let tx = TransactionRepository::new(db)
        .find_by_id(stored.id)
        .await?
        .unwrap();

    assert!(tx.extension_history.is_empty());

    Ok(())
}

/// Tests listing every booking newest first.
///
/// Expected: all bookings, newest first
#[tokio::test]
async fn get_all_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let older = TransactionFactory::new(db)
        .created_at(Utc::now() - Duration::hours(5))
        .build()
        .await?;
    let newer = TransactionFactory::new(db).build().await?;

    let all = TransactionRepository::new(db).get_all().await?;

    let ids: Vec<i32> = all.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}
