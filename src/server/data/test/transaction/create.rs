use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests creating a booking with reservation lines.
///
/// Verifies the defaults, the empty extension history, version 0 and that the
/// lines come back attached.
///
/// Expected: Ok with two reservations
#[tokio::test]
async fn creates_booking_with_reservations() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut second = cottage_line();
    second.amenity_name = "Pool Table".to_string();

    let tx = TransactionRepository::new(db)
        .create(
            booking_param(vec![cottage_line(), second]),
            "TX-AAAA1111".to_string(),
        )
        .await?;

    assert_eq!(tx.transaction_ref, "TX-AAAA1111");
    assert_eq!(tx.booking_status, BookingStatus::Pending);
    assert_eq!(tx.payment_status, PaymentStatus::Partial);
    assert_eq!(tx.booking_type, BookingType::Online);
    assert!(tx.extension_history.is_empty());
    assert_eq!(tx.version, 0);
    assert_eq!(tx.reservations.len(), 2);
    assert_eq!(tx.reservations[0].amenity_name, "Cottage A");
    assert_eq!(tx.reservations[1].amenity_name, "Pool Table");
    assert!(tx.reservations.iter().all(|r| r.transaction_id == tx.id));

    Ok(())
}

/// Tests creating a booking with a reference that is already used.
///
/// Verifies the conflict is reported and nothing from the second booking is
/// written, reservations included.
///
/// Expected: Err(AppError::Conflict), one transaction and one reservation row
#[tokio::test]
async fn duplicate_reference_writes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TransactionRepository::new(db);
    repo.create(booking_param(vec![cottage_line()]), "TX-DUP00001".to_string())
        .await?;

    let result = repo
        .create(booking_param(vec![cottage_line()]), "TX-DUP00001".to_string())
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(entity::prelude::Transaction::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Reservation::find().count(db).await?, 1);

    Ok(())
}

/// Tests linking a booking to a registered user.
///
/// Expected: Ok with user_id set
#[tokio::test]
async fn links_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = create_user(db).await?;
    let mut param = booking_param(vec![]);
    param.user_id = Some(user.id);

    let tx = TransactionRepository::new(db)
        .create(param, "TX-USER0001".to_string())
        .await?;

    assert_eq!(tx.user_id, Some(user.id));

    Ok(())
}
