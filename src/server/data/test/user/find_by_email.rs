use super::*;

/// Tests finding an existing user by email.
///
/// Expected: Ok(Some) with matching ID
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = UserFactory::new(db).email("bob@x.com").build().await?;

    let user = UserRepository::new(db).find_by_email("bob@x.com").await?;

    assert_eq!(user.map(|u| u.id), Some(stored.id));

    Ok(())
}

/// Tests looking up an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).email("bob@x.com").build().await?;

    let user = UserRepository::new(db).find_by_email("carol@x.com").await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests that a corrupt stored role surfaces as an internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_unknown_stored_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .email("odd@x.com")
        .role("superuser")
        .build()
        .await?;

    let result = UserRepository::new(db).find_by_email("odd@x.com").await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
