use super::*;

/// Tests deleting an association by ID.
///
/// Expected: Ok(true) and the association no longer exists
#[tokio::test]
async fn deletes_association() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;
    let favorite = factory::create_favorite_character(db, user.id, character.id).await?;

    let repo = FavoriteCharacterRepository::new(db);
    let deleted = repo.delete(favorite.id).await?;

    assert!(deleted);
    assert!(repo.find(user.id, character.id).await?.is_none());

    Ok(())
}

/// Tests deleting an ID that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FavoriteCharacterRepository::new(db);

    assert!(!repo.delete(123).await?);

    Ok(())
}

/// Tests that deleting leaves the character in the catalog.
///
/// Expected: character row still present
#[tokio::test]
async fn keeps_catalog_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, character, _) = factory::helpers::create_user_with_favorites(db).await?;

    let repo = FavoriteCharacterRepository::new(db);
    let favorite = repo.find(user.id, character.id).await?.unwrap();
    repo.delete(favorite.id).await?;

    let catalog = crate::server::data::character::CharacterRepository::new(db)
        .find_by_id(character.id)
        .await?;
    assert!(catalog.is_some());

    Ok(())
}
