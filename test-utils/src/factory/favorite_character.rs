//! Factory for user-character favorite associations.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a favorite association between a user and a character.
///
/// Both rows must already exist.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the user
/// - `character_id` - ID of the character
///
/// # Returns
/// - `Ok(entity::favorite_character::Model)` - Created association
/// - `Err(DbErr)` - Database error during insert
pub async fn create_favorite_character(
    db: &DatabaseConnection,
    user_id: i32,
    character_id: i32,
) -> Result<entity::favorite_character::Model, DbErr> {
    entity::favorite_character::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        character_id: ActiveValue::Set(character_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
