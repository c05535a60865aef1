//! Character factory for creating test catalog characters.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test characters with customizable fields.
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    height: Option<i32>,
    weight: Option<i32>,
}

impl<'a> CharacterFactory<'a> {
    /// Creates a new CharacterFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Character {id}"`
    /// - height: `Some(172)`
    /// - weight: `Some(77)`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Character {}", next_id()),
            height: Some(172),
            weight: Some(77),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn height(mut self, height: Option<i32>) -> Self {
        self.height = height;
        self
    }

    pub fn weight(mut self, weight: Option<i32>) -> Self {
        self.weight = weight;
        self
    }

    /// Builds and inserts the character entity into the database.
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            name: ActiveValue::Set(self.name),
            height: ActiveValue::Set(self.height),
            weight: ActiveValue::Set(self.weight),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character with default values.
pub async fn create_character(db: &DatabaseConnection) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db).build().await
}
