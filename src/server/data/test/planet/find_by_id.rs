use super::*;

/// Tests finding a planet by ID.
///
/// Expected: Ok(Some(planet))
#[tokio::test]
async fn finds_existing_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::planet::PlanetFactory::new(db)
        .name("Tatooine")
        .population(Some(200000))
        .build()
        .await?;

    let repo = PlanetRepository::new(db);
    let planet = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(planet.name, "Tatooine");
    assert_eq!(planet.population, Some(200000));

    Ok(())
}

/// Tests looking up a planet that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);

    assert!(repo.find_by_id(7).await?.is_none());

    Ok(())
}

/// Tests reading back a population outside the 32-bit range.
///
/// Expected: Ok(Some(planet)) with the full population preserved
#[tokio::test]
async fn preserves_large_population() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::planet::PlanetFactory::new(db)
        .name("Coruscant")
        .population(Some(1_000_000_000_000))
        .build()
        .await?;

    let repo = PlanetRepository::new(db);
    let planet = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(planet.population, Some(1_000_000_000_000));

    Ok(())
}
