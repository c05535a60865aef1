//! Factory for user-planet favorite associations.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a favorite association between a user and a planet.
///
/// Both rows must already exist.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the user
/// - `planet_id` - ID of the planet
///
/// # Returns
/// - `Ok(entity::favorite_planet::Model)` - Created association
/// - `Err(DbErr)` - Database error during insert
pub async fn create_favorite_planet(
    db: &DatabaseConnection,
    user_id: i32,
    planet_id: i32,
) -> Result<entity::favorite_planet::Model, DbErr> {
    entity::favorite_planet::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        planet_id: ActiveValue::Set(planet_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
