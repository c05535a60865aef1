//! Favorite service for business logic.
//!
//! Orchestrates the user, catalog and association repositories to list and
//! mutate a user's favorite characters and planets. Duplicate detection relies
//! on the unique index over each association table: the pre-insert lookup gives
//! a fast answer for the common case, and a unique violation raised by a
//! concurrent insert is reported the same way.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        character::CharacterRepository, favorite_character::FavoriteCharacterRepository,
        favorite_planet::FavoritePlanetRepository, planet::PlanetRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        character::Character,
        favorite::{AddFavoriteOutcome, Favorites},
        planet::Planet,
    },
    service::is_unique_violation,
};

/// Service providing business logic for user favorites.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the characters a user has favorited.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user
    ///
    /// # Returns
    /// - `Ok(Some(Vec<Character>))` - The user exists; list may be empty
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_favorite_characters(
        &self,
        user_id: i32,
    ) -> Result<Option<Vec<Character>>, AppError> {
        if !self.user_exists(user_id).await? {
            return Ok(None);
        }

        let repo = FavoriteCharacterRepository::new(self.db);
        let characters = repo.get_characters_by_user(user_id).await?;

        Ok(Some(characters))
    }

    /// Gets both favorite lists of a user.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user
    ///
    /// # Returns
    /// - `Ok(Some(Favorites))` - The user exists; either list may be empty
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_favorites(&self, user_id: i32) -> Result<Option<Favorites>, AppError> {
        if !self.user_exists(user_id).await? {
            return Ok(None);
        }

        let characters = FavoriteCharacterRepository::new(self.db)
            .get_characters_by_user(user_id)
            .await?;
        let planets = FavoritePlanetRepository::new(self.db)
            .get_planets_by_user(user_id)
            .await?;

        Ok(Some(Favorites {
            characters,
            planets,
        }))
    }

    /// Marks a character as favorite for a user.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user
    /// - `character_id` - ID of the character
    ///
    /// # Returns
    /// - `Ok(AddFavoriteOutcome::Added(Character))` - Association created
    /// - `Ok(AddFavoriteOutcome::UserNotFound)` - No user with that ID
    /// - `Ok(AddFavoriteOutcome::TargetNotFound)` - No character with that ID
    /// - `Ok(AddFavoriteOutcome::AlreadyFavorite)` - Association already existed
    /// - `Err(AppError::DbErr)` - Database error during query or insert
    pub async fn add_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<AddFavoriteOutcome<Character>, AppError> {
        if !self.user_exists(user_id).await? {
            return Ok(AddFavoriteOutcome::UserNotFound);
        }

        let Some(character) = CharacterRepository::new(self.db)
            .find_by_id(character_id)
            .await?
        else {
            return Ok(AddFavoriteOutcome::TargetNotFound);
        };

        let repo = FavoriteCharacterRepository::new(self.db);
        if repo.find(user_id, character_id).await?.is_some() {
            return Ok(AddFavoriteOutcome::AlreadyFavorite);
        }

        match repo.create(user_id, character_id).await {
            Ok(_) => {
                tracing::debug!("User {} favorited character {}", user_id, character_id);
                Ok(AddFavoriteOutcome::Added(character))
            }
            Err(err) if is_unique_violation(&err) => Ok(AddFavoriteOutcome::AlreadyFavorite),
            Err(err) => Err(err.into()),
        }
    }

    /// Marks a planet as favorite for a user.
    ///
    /// Same outcomes as [`FavoriteService::add_character`].
    pub async fn add_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<AddFavoriteOutcome<Planet>, AppError> {
        if !self.user_exists(user_id).await? {
            return Ok(AddFavoriteOutcome::UserNotFound);
        }

        let Some(planet) = PlanetRepository::new(self.db).find_by_id(planet_id).await? else {
            return Ok(AddFavoriteOutcome::TargetNotFound);
        };

        let repo = FavoritePlanetRepository::new(self.db);
        if repo.find(user_id, planet_id).await?.is_some() {
            return Ok(AddFavoriteOutcome::AlreadyFavorite);
        }

        match repo.create(user_id, planet_id).await {
            Ok(_) => {
                tracing::debug!("User {} favorited planet {}", user_id, planet_id);
                Ok(AddFavoriteOutcome::Added(planet))
            }
            Err(err) if is_unique_violation(&err) => Ok(AddFavoriteOutcome::AlreadyFavorite),
            Err(err) => Err(err.into()),
        }
    }

    /// Removes a character from a user's favorites.
    ///
    /// # Returns
    /// - `Ok(true)` - Association removed
    /// - `Ok(false)` - The user had not favorited that character
    /// - `Err(AppError::DbErr)` - Database error during query or delete
    pub async fn remove_character(&self, user_id: i32, character_id: i32) -> Result<bool, AppError> {
        let repo = FavoriteCharacterRepository::new(self.db);

        let Some(favorite) = repo.find(user_id, character_id).await? else {
            return Ok(false);
        };

        Ok(repo.delete(favorite.id).await?)
    }

    /// Removes a planet from a user's favorites.
    ///
    /// # Returns
    /// - `Ok(true)` - Association removed
    /// - `Ok(false)` - The user had not favorited that planet
    /// - `Err(AppError::DbErr)` - Database error during query or delete
    pub async fn remove_planet(&self, user_id: i32, planet_id: i32) -> Result<bool, AppError> {
        let repo = FavoritePlanetRepository::new(self.db);

        let Some(favorite) = repo.find(user_id, planet_id).await? else {
            return Ok(false);
        };

        Ok(repo.delete(favorite.id).await?)
    }

    async fn user_exists(&self, user_id: i32) -> Result<bool, AppError> {
        let user = UserRepository::new(self.db).find_by_id(user_id).await?;
        Ok(user.is_some())
    }
}
