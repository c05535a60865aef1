use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        planet::{PlanetResponseDto, PlanetsResponseDto},
    },
    server::{
        controller::path::IdPath, error::AppError, service::planet::PlanetService,
        state::AppState,
    },
};

/// Tag for grouping planet endpoints in OpenAPI documentation
pub static PLANET_TAG: &str = "planets";

/// List the planet catalog.
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "All planets", body = PlanetsResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let planets = PlanetService::new(&state.db).get_all().await?;

    Ok(Json(PlanetsResponseDto {
        msg: "Planetas listados correctamente".to_string(),
        planets: planets.into_iter().map(|p| p.into_dto()).collect(),
    }))
}

/// Get a single planet by ID.
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "The planet", body = PlanetResponseDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    IdPath(id): IdPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let planet = PlanetService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("El planeta con id {} no existe", id)))?;

    Ok(Json(PlanetResponseDto {
        msg: "Planeta Listado con exito".to_string(),
        planet: planet.into_dto(),
    }))
}
