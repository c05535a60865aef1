//! Favorite character repository for database operations.
//!
//! This module provides the `FavoriteCharacterRepository` for managing the many-to-many
//! relationship between users and catalog characters. Listing a user's favorites is a
//! single join from characters to the association table, keyed by user id.

use sea_orm::{
    sea_query::JoinType, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::{character::Character, favorite::FavoriteCharacter};

/// Repository for user favorite character operations.
pub struct FavoriteCharacterRepository<'a> {
    /// Database connection for executing queries.
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteCharacterRepository<'a> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for executing queries
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the association between a user and a character.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user
    /// - `character_id` - ID of the character
    ///
    /// # Returns
    /// - `Ok(Some(FavoriteCharacter))` - The user has favorited the character
    /// - `Ok(None)` - No such association
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<Option<FavoriteCharacter>, DbErr> {
        let entity = entity::prelude::FavoriteCharacter::find()
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .filter(entity::favorite_character::Column::CharacterId.eq(character_id))
            .one(self.db)
            .await?;

        Ok(entity.map(FavoriteCharacter::from_entity))
    }

    /// Creates an association between a user and a character.
    ///
    /// Does not check whether the association already exists; the unique index on
    /// `(user_id, character_id)` makes a duplicate insert fail with a
    /// `UniqueConstraintViolation`.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user
    /// - `character_id` - ID of the character
    ///
    /// # Returns
    /// - `Ok(FavoriteCharacter)` - The created association
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, user_id: i32, character_id: i32) -> Result<FavoriteCharacter, DbErr> {
        let entity = entity::prelude::FavoriteCharacter::insert(
            entity::favorite_character::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                character_id: ActiveValue::Set(character_id),
                ..Default::default()
            },
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(FavoriteCharacter::from_entity(entity))
    }

    /// Deletes an association by its ID.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was removed
    /// - `Ok(false)` - No row with that ID existed
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::FavoriteCharacter::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the characters a user has favorited, in the order they were added.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user
    ///
    /// # Returns
    /// - `Ok(Vec<Character>)` - Favorited characters (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_characters_by_user(&self, user_id: i32) -> Result<Vec<Character>, DbErr> {
        let entities = entity::prelude::Character::find()
            .join(
                JoinType::InnerJoin,
                entity::character::Relation::FavoriteCharacter.def(),
            )
            .filter(entity::favorite_character::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_character::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Character::from_entity).collect())
    }
}
