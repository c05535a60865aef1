use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub height: Option<i32>,
    pub weight: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CharactersResponseDto {
    pub msg: String,
    #[serde(rename = "Characters")]
    pub characters: Vec<CharacterDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CharacterResponseDto {
    pub msg: String,
    #[serde(rename = "Character")]
    pub character: CharacterDto,
}
