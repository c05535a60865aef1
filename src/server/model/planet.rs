//! Planet domain model.

use crate::model::planet::PlanetDto;

/// Catalog planet.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub population: Option<i64>,
}

impl Planet {
    pub fn into_dto(self) -> PlanetDto {
        PlanetDto {
            id: self.id,
            name: self.name,
            population: self.population,
        }
    }

    pub fn from_entity(entity: entity::planet::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            population: entity.population,
        }
    }
}
