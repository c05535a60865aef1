use super::*;

/// Tests finding a character by ID.
///
/// Expected: Ok(Some(character))
#[tokio::test]
async fn finds_existing_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::character::CharacterFactory::new(db)
        .name("Leia Organa")
        .height(Some(150))
        .weight(Some(49))
        .build()
        .await?;

    let repo = CharacterRepository::new(db);
    let character = repo.find_by_id(created.id).await?;

    assert!(character.is_some());
    let character = character.unwrap();
    assert_eq!(character.name, "Leia Organa");
    assert_eq!(character.height, Some(150));

    Ok(())
}

/// Tests looking up a character that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);

    assert!(repo.find_by_id(42).await?.is_none());

    Ok(())
}

/// Tests reading back a character whose measurements are unknown.
///
/// Expected: Ok(Some(character)) with height and weight as None
#[tokio::test]
async fn keeps_missing_measurements() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Character)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::character::CharacterFactory::new(db)
        .name("Unknown")
        .height(None)
        .weight(None)
        .build()
        .await?;

    let repo = CharacterRepository::new(db);
    let character = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(character.height, None);
    assert_eq!(character.weight, None);

    Ok(())
}
