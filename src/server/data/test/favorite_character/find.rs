use super::*;

/// Tests finding an existing association.
///
/// Expected: Ok(Some(favorite))
#[tokio::test]
async fn finds_existing_association() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;
    let created = factory::create_favorite_character(db, user.id, character.id).await?;

    let repo = FavoriteCharacterRepository::new(db);
    let found = repo.find(user.id, character.id).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, created.id);

    Ok(())
}

/// Tests that another user's association is not returned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_other_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;
    factory::create_favorite_character(db, owner.id, character.id).await?;

    let repo = FavoriteCharacterRepository::new(db);

    assert!(repo.find(other.id, character.id).await?.is_none());

    Ok(())
}
