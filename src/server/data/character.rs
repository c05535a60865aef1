//! Character catalog repository.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::character::Character;

/// Repository providing database operations for catalog characters.
pub struct CharacterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a character by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(Character))` - Character found
    /// - `Ok(None)` - No character with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Character>, DbErr> {
        let entity = entity::prelude::Character::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Character::from_entity))
    }

    /// Gets every character ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Character>, DbErr> {
        let entities = entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Character::from_entity).collect())
    }
}
