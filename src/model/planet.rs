use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub population: Option<i64>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PlanetsResponseDto {
    pub msg: String,
    #[serde(rename = "Planets")]
    pub planets: Vec<PlanetDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PlanetResponseDto {
    pub msg: String,
    #[serde(rename = "Planet")]
    pub planet: PlanetDto,
}
