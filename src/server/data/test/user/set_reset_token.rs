use super::*;

/// Tests that issuing a second token replaces the first.
///
/// Verifies only the most recent digest can be found.
///
/// Expected: old digest not found, new digest found
#[tokio::test]
async fn replaces_previous_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;
    let repo = UserRepository::new(db);
    let expires = Utc::now() + Duration::minutes(15);

    repo.set_reset_token(user.id, "first".to_string(), expires).await?;
    repo.set_reset_token(user.id, "second".to_string(), expires).await?;

    assert!(repo.find_by_reset_token("first", Utc::now()).await?.is_none());
    assert_eq!(
        repo.find_by_reset_token("second", Utc::now())
            .await?
            .map(|u| u.id),
        Some(user.id)
    );

    Ok(())
}

/// Tests clearing a stored token.
///
/// Expected: token no longer found
#[tokio::test]
async fn clear_removes_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db)
        .reset_token("digest", Utc::now() + Duration::minutes(15))
        .build()
        .await?;
    let repo = UserRepository::new(db);

    assert!(repo.clear_reset_token(user.id, "digest").await?);

    assert!(repo.find_by_reset_token("digest", Utc::now()).await?.is_none());

    Ok(())
}

/// Tests clearing with a digest that was since replaced.
///
/// Verifies revoking an older token leaves a newer one usable.
///
/// Expected: nothing cleared, newer digest still found
#[tokio::test]
async fn clear_keeps_newer_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;
    let repo = UserRepository::new(db);
    let expires = Utc::now() + Duration::minutes(15);

    repo.set_reset_token(user.id, "older".to_string(), expires).await?;
    repo.set_reset_token(user.id, "newer".to_string(), expires).await?;

    assert!(!repo.clear_reset_token(user.id, "older").await?);
    assert_eq!(
        repo.find_by_reset_token("newer", Utc::now())
            .await?
            .map(|u| u.id),
        Some(user.id)
    );

    Ok(())
}
