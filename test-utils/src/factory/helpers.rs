//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user who has favorited one character and one planet.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, character, planet))` - Tuple of the created user and favorited targets
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_favorites(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::character::Model,
        entity::planet::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let character = crate::factory::character::create_character(db).await?;
    let planet = crate::factory::planet::create_planet(db).await?;

    crate::factory::favorite_character::create_favorite_character(db, user.id, character.id)
        .await?;
    crate::factory::favorite_planet::create_favorite_planet(db, user.id, planet.id).await?;

    Ok((user, character, planet))
}
