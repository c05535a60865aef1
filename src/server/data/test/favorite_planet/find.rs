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

    let (user, _, planet) = factory::helpers::create_user_with_favorites(db).await?;

    let repo = FavoritePlanetRepository::new(db);
    let found = repo.find(user.id, planet.id).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().planet_id, planet.id);

    Ok(())
}

/// Tests looking up a planet the user never favorited.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unfavorited_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;

    let repo = FavoritePlanetRepository::new(db);

    assert!(repo.find(user.id, planet.id).await?.is_none());

    Ok(())
}
