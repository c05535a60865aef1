use sea_orm::DatabaseConnection;

use crate::server::{
    data::character::CharacterRepository, error::AppError, model::character::Character,
};

pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the whole character catalog
    pub async fn get_all(&self) -> Result<Vec<Character>, AppError> {
        let repo = CharacterRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a character by ID, `None` if it does not exist
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Character>, AppError> {
        let repo = CharacterRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }
}
