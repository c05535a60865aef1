use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository assigns an id, stores every field and marks
/// the user as active.
///
/// Expected: Ok with is_active set to true
#[tokio::test]
async fn creates_active_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(param("a@b.com")).await?;

    assert!(user.id > 0);
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.password, "x");
    assert_eq!(user.member_since, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(user.firstname, "Ana");
    assert_eq!(user.lastname, "Lee");
    assert!(user.is_active);

    Ok(())
}

/// Tests that identifiers are distinct across inserts.
///
/// Expected: second id differs from the first
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo.create(param("first@b.com")).await?;
    let second = repo.create(param("second@b.com")).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}

/// Tests rejecting a duplicate email.
///
/// Verifies that the unique constraint on email surfaces as a unique
/// constraint violation rather than silently inserting a second row.
///
/// Expected: Err with SqlErr::UniqueConstraintViolation
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(param("a@b.com")).await?;
    let result = repo.create(param("a@b.com")).await;

    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
