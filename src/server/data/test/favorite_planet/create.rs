use super::*;

/// Tests creating a favorite planet association.
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
    let planet = factory::create_planet(db).await?;

    let repo = FavoritePlanetRepository::new(db);
    let favorite = repo.create(user.id, planet.id).await?;

    assert_eq!(favorite.user_id, user.id);
    assert_eq!(favorite.planet_id, planet.id);

    Ok(())
}

/// Tests that the same pair cannot be stored twice.
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
    let planet = factory::create_planet(db).await?;

    let repo = FavoritePlanetRepository::new(db);
    repo.create(user.id, planet.id).await?;
    let result = repo.create(user.id, planet.id).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
