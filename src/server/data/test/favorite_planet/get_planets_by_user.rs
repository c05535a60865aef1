use super::*;

/// Tests listing the planets a user has favorited.
///
/// Expected: Ok with planets in favorite order
#[tokio::test]
async fn returns_planets_in_favorite_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let tatooine = factory::create_planet(db).await?;
    let hoth = factory::create_planet(db).await?;
    factory::create_favorite_planet(db, user.id, hoth.id).await?;
    factory::create_favorite_planet(db, user.id, tatooine.id).await?;

    let repo = FavoritePlanetRepository::new(db);
    let planets = repo.get_planets_by_user(user.id).await?;

    let ids: Vec<i32> = planets.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![hoth.id, tatooine.id]);

    Ok(())
}

/// Tests a user without favorite planets.
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

    let repo = FavoritePlanetRepository::new(db);

    assert!(repo.get_planets_by_user(user.id).await?.is_empty());

    Ok(())
}
