use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        character::{CharacterResponseDto, CharactersResponseDto},
    },
    server::{
        controller::path::IdPath, error::AppError, service::character::CharacterService,
        state::AppState,
    },
};

/// Tag for grouping character endpoints in OpenAPI documentation
pub static CHARACTER_TAG: &str = "people";

/// List the character catalog.
#[utoipa::path(
    get,
    path = "/people",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "All characters", body = CharactersResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let characters = CharacterService::new(&state.db).get_all().await?;

    Ok(Json(CharactersResponseDto {
        msg: "Personajes listados con exito".to_string(),
        characters: characters.into_iter().map(|c| c.into_dto()).collect(),
    }))
}

/// Get a single character by ID.
///
/// # Returns
/// - `200 OK` - The character
/// - `404 Not Found` - No character with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = CHARACTER_TAG,
    params(
        ("id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "The character", body = CharacterResponseDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    IdPath(id): IdPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let character = CharacterService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("El personaje con id {} no existe", id)))?;

    Ok(Json(CharacterResponseDto {
        msg: "Personaje Listado correctamente".to_string(),
        character: character.into_dto(),
    }))
}
