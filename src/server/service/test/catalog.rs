use super::*;
use crate::server::service::{character::CharacterService, planet::PlanetService};

/// Tests listing and fetching characters through the service.
///
/// Expected: list contains the character; unknown id yields None
#[tokio::test]
async fn lists_and_fetches_characters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let luke = factory::character::CharacterFactory::new(db)
        .name("Luke Skywalker")
        .build()
        .await?;

    let service = CharacterService::new(db);
    let all = service.get_all().await?;

    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Luke Skywalker");
    assert_eq!(service.get_by_id(luke.id).await?.map(|c| c.id), Some(luke.id));
    assert!(service.get_by_id(luke.id + 1).await?.is_none());

    Ok(())
}

/// Tests listing and fetching planets through the service.
///
/// Expected: list contains the planet; unknown id yields None
#[tokio::test]
async fn lists_and_fetches_planets() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hoth = factory::planet::PlanetFactory::new(db)
        .name("Hoth")
        .population(None)
        .build()
        .await?;

    let service = PlanetService::new(db);
    let all = service.get_all().await?;

    assert_eq!(all.len(), 1);
    assert_eq!(all[0].population, None);
    assert_eq!(service.get_by_id(hoth.id).await?.map(|p| p.name), Some("Hoth".to_string()));
    assert!(service.get_by_id(hoth.id + 1).await?.is_none());

    Ok(())
}
