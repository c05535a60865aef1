use super::*;

/// Tests deleting an association by ID.
///
/// Expected: Ok(true) and a second delete returns Ok(false)
#[tokio::test]
async fn deletes_association_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let planet = factory::create_planet(db).await?;
    let favorite = factory::create_favorite_planet(db, user.id, planet.id).await?;

    let repo = FavoritePlanetRepository::new(db);

    assert!(repo.delete(favorite.id).await?);
    assert!(!repo.delete(favorite.id).await?);

    Ok(())
}
