//! Favorite planet repository for database operations.
//!
//! This module provides the `FavoritePlanetRepository` for managing the many-to-many
//! relationship between users and catalog planets. Listing a user's favorites is a
//! single join from planets to the association table, keyed by user id.

use sea_orm::{
    sea_query::JoinType, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::{favorite::FavoritePlanet, planet::Planet};

/// Repository for user favorite planet operations.
pub struct FavoritePlanetRepository<'a> {
    /// Database connection for executing queries.
    db: &'a DatabaseConnection,
}

impl<'a> FavoritePlanetRepository<'a> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for executing queries
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the association between a user and a planet.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user
    /// - `planet_id` - ID of the planet
    ///
    /// # Returns
    /// - `Ok(Some(FavoritePlanet))` - The user has favorited the planet
    /// - `Ok(None)` - No such association
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<Option<FavoritePlanet>, DbErr> {
        let entity = entity::prelude::FavoritePlanet::find()
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .filter(entity::favorite_planet::Column::PlanetId.eq(planet_id))
            .one(self.db)
            .await?;

        Ok(entity.map(FavoritePlanet::from_entity))
    }

    /// Creates an association between a user and a planet.
    ///
    /// Does not check whether the association already exists; the unique index on
    /// `(user_id, planet_id)` makes a duplicate insert fail with a
    /// `UniqueConstraintViolation`.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user
    /// - `planet_id` - ID of the planet
    ///
    /// # Returns
    /// - `Ok(FavoritePlanet)` - The created association
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, user_id: i32, planet_id: i32) -> Result<FavoritePlanet, DbErr> {
        let entity = entity::prelude::FavoritePlanet::insert(
            entity::favorite_planet::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                planet_id: ActiveValue::Set(planet_id),
                ..Default::default()
            },
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(FavoritePlanet::from_entity(entity))
    }

    /// Deletes an association by its ID.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was removed
    /// - `Ok(false)` - No row with that ID existed
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::FavoritePlanet::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the planets a user has favorited, in the order they were added.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user
    ///
    /// # Returns
    /// - `Ok(Vec<Planet>)` - Favorited planets (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_planets_by_user(&self, user_id: i32) -> Result<Vec<Planet>, DbErr> {
        let entities = entity::prelude::Planet::find()
            .join(JoinType::InnerJoin, entity::planet::Relation::FavoritePlanet.def())
            .filter(entity::favorite_planet::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite_planet::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Planet::from_entity).collect())
    }
}
