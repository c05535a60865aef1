use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Character};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Character)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements generated from entity models, executed in insertion order.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements executed after every table exists.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called. Tables should
    /// be added in dependency order (tables with foreign keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index to create once all tables exist.
    ///
    /// Entity models only describe single-column uniqueness, so composite unique
    /// indexes that the migrations create must be added explicitly.
    ///
    /// # Arguments
    /// - `index` - Index statement to execute
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds the user and catalog tables (User, Character, Planet).
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(User)
            .with_table(Character)
            .with_table(Planet)
    }

    /// Adds every table required for favorite operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - User
    /// - Character
    /// - Planet
    /// - FavoriteCharacter (unique on user_id + character_id)
    /// - FavoritePlanet (unique on user_id + planet_id)
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_favorite_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_favorite_tables(self) -> Self {
        self.with_catalog_tables()
            .with_table(FavoriteCharacter)
            .with_table(FavoritePlanet)
            .with_index(
                Index::create()
                    .unique()
                    .name("idx_favorite_characters_user_character_unique")
                    .table(FavoriteCharacter)
                    .col(entity::favorite_character::Column::UserId)
                    .col(entity::favorite_character::Column::CharacterId)
                    .to_owned(),
            )
            .with_index(
                Index::create()
                    .unique()
                    .name("idx_favorite_planets_user_planet_unique")
                    .table(FavoritePlanet)
                    .col(entity::favorite_planet::Column::UserId)
                    .col(entity::favorite_planet::Column::PlanetId)
                    .to_owned(),
            )
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements followed by all CREATE INDEX statements.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
