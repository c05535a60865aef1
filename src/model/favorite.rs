//! Response envelopes for favorite endpoints.
//!
//! Favorites are never serialized as association rows; each one is expanded
//! into the character or planet it points at.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{character::CharacterDto, planet::PlanetDto};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct FavoriteCharactersResponseDto {
    pub msg: String,
    pub favorite_characters: Vec<CharacterDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct FavoritesResponseDto {
    pub msg: String,
    #[serde(rename = "Favorite_Characters")]
    pub favorite_characters: Vec<CharacterDto>,
    #[serde(rename = "Favorite_Planets")]
    pub favorite_planets: Vec<PlanetDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct FavoriteCharacterCreatedDto {
    pub msg: String,
    pub personaje: CharacterDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct FavoritePlanetCreatedDto {
    pub msg: String,
    pub planeta: PlanetDto,
}
