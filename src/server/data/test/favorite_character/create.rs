use super::*;

/// Tests creating a favorite character association.
///
/// Expected: Ok with the association referencing both rows
#[tokio::test]
async fn creates_association() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;

    let repo = FavoriteCharacterRepository::new(db);
    let favorite = repo.create(user.id, character.id).await?;

    assert!(favorite.id > 0);
    assert_eq!(favorite.user_id, user.id);
    assert_eq!(favorite.character_id, character.id);

    Ok(())
}

/// Tests that the same pair cannot be stored twice.
///
/// Verifies that the unique index over `(user_id, character_id)` rejects the
/// second insert.
///
/// Expected: Err with SqlErr::UniqueConstraintViolation
#[tokio::test]
async fn fails_for_duplicate_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;

    let repo = FavoriteCharacterRepository::new(db);
    repo.create(user.id, character.id).await?;
    let result = repo.create(user.id, character.id).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that two users may favorite the same character.
///
/// Expected: Ok for both inserts
#[tokio::test]
async fn allows_same_character_for_different_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;

    let repo = FavoriteCharacterRepository::new(db);
    let a = repo.create(first.id, character.id).await?;
    let b = repo.create(second.id, character.id).await?;

    assert_ne!(a.id, b.id);

    Ok(())
}
