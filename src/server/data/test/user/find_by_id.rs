use super::*;

/// Tests finding an existing user by ID.
///
/// Expected: Ok(Some(user)) with matching fields
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("luke@example.com")
        .firstname("Luke")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_id(created.id).await?;

    assert!(result.is_some());
    let user = result.unwrap();
    assert_eq!(user.id, created.id);
    assert_eq!(user.email, "luke@example.com");
    assert_eq!(user.firstname, "Luke");

    Ok(())
}

/// Tests looking up an ID that was never assigned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.find_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}
