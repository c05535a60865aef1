use super::*;

/// Tests listing users from an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_without_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    assert!(users.is_empty());

    Ok(())
}

/// Tests listing every user ordered by ID.
///
/// Expected: Ok with users in insertion order
#[tokio::test]
async fn returns_users_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let third = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}

/// Tests that inactive users are still listed.
///
/// Expected: Ok with the inactive user included
#[tokio::test]
async fn includes_inactive_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .is_active(false)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    assert_eq!(users.len(), 1);
    assert!(!users[0].is_active);

    Ok(())
}
