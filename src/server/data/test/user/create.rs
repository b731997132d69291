use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests creating a new customer.
///
/// Verifies that the repository stores the user with the customer role and the
/// given password hash.
///
/// Expected: Ok with exactly one user row
#[tokio::test]
async fn creates_customer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(customer_param("alice", "alice@x.com")).await?;

    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@x.com");
    assert_eq!(user.role, Role::Customer);

    let count = entity::prelude::User::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests signing up twice with the same email.
///
/// Verifies that the unique constraint violation is reported as a conflict and
/// no second row is written.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(customer_param("alice", "alice@x.com")).await?;

    let result = repo.create(customer_param("alice2", "alice@x.com")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests signing up twice with the same username.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(customer_param("alice", "alice@x.com")).await?;

    let result = repo.create(customer_param("alice", "other@x.com")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
