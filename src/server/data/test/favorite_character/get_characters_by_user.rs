use super::*;

/// Tests listing the characters a user has favorited.
///
/// Verifies that the join returns catalog rows in the order the favorites
/// were added, not by character ID.
///
/// Expected: Ok with characters in favorite order
#[tokio::test]
async fn returns_characters_in_favorite_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let luke = factory::create_character(db).await?;
    let leia = factory::create_character(db).await?;
    factory::create_favorite_character(db, user.id, leia.id).await?;
    factory::create_favorite_character(db, user.id, luke.id).await?;

    let repo = FavoriteCharacterRepository::new(db);
    let characters = repo.get_characters_by_user(user.id).await?;

    let ids: Vec<i32> = characters.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![leia.id, luke.id]);

    Ok(())
}

/// Tests that only the requested user's favorites are returned.
///
/// Expected: Ok with only the owner's character
#[tokio::test]
async fn excludes_other_users_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let mine = factory::create_character(db).await?;
    let theirs = factory::create_character(db).await?;
    factory::create_favorite_character(db, owner.id, mine.id).await?;
    factory::create_favorite_character(db, other.id, theirs.id).await?;

    let repo = FavoriteCharacterRepository::new(db);
    let characters = repo.get_characters_by_user(owner.id).await?;

    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0].id, mine.id);

    Ok(())
}

/// Tests a user without favorites.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_without_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_character(db).await?;

    let repo = FavoriteCharacterRepository::new(db);

    assert!(repo.get_characters_by_user(user.id).await?.is_empty());

    Ok(())
}
