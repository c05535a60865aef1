use super::*;

/// Tests listing the catalog ordered by ID.
///
/// Expected: Ok with characters in insertion order
#[tokio::test]
async fn returns_characters_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_character(db).await?;
    let second = factory::create_character(db).await?;

    let repo = CharacterRepository::new(db);
    let characters = repo.get_all().await?;

    assert_eq!(characters.len(), 2);
    assert_eq!(characters[0].id, first.id);
    assert_eq!(characters[1].id, second.id);

    Ok(())
}

/// Tests listing an empty catalog.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_catalog() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
