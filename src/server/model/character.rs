//! Character domain model.

use crate::model::character::CharacterDto;

/// Catalog character.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub height: Option<i32>,
    pub weight: Option<i32>,
}

impl Character {
    pub fn into_dto(self) -> CharacterDto {
        CharacterDto {
            id: self.id,
            name: self.name,
            height: self.height,
            weight: self.weight,
        }
    }

    pub fn from_entity(entity: entity::character::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            height: entity.height,
            weight: entity.weight,
        }
    }
}
