use super::*;

/// Tests listing planets ordered by ID.
///
/// Expected: Ok with planets in insertion order
#[tokio::test]
async fn returns_planets_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_planet(db).await?;
    let second = factory::create_planet(db).await?;
    let third = factory::create_planet(db).await?;

    let repo = PlanetRepository::new(db);
    let planets = repo.get_all().await?;

    let ids: Vec<i32> = planets.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}
