//! Handlers for per-user favorite lists.
//!
//! Listing endpoints answer 404 for an unknown user. The add and remove
//! endpoints always answer 200; when nothing changed the body carries only a
//! `msg` explaining why, which is the contract existing front ends rely on.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::{
            FavoriteCharacterCreatedDto, FavoriteCharactersResponseDto, FavoritePlanetCreatedDto,
            FavoritesResponseDto,
        },
    },
    server::{
        controller::path::IdPath, error::AppError, model::favorite::AddFavoriteOutcome,
        service::favorite::FavoriteService, state::AppState,
    },
};

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorite";

fn user_not_found(user_id: i32) -> String {
    format!("El usuario con id {} no existe", user_id)
}

/// List the characters a user has favorited.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - User ID
///
/// # Returns
/// - `200 OK` - Favorited characters, possibly empty
/// - `404 Not Found` - No user with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/{id}/favorites_characters",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Favorited characters", body = FavoriteCharactersResponseDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorite_characters(
    State(state): State<AppState>,
    IdPath(id): IdPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let characters = FavoriteService::new(&state.db)
        .get_favorite_characters(id)
        .await?
        .ok_or_else(|| AppError::NotFound(user_not_found(id)))?;

    Ok(Json(FavoriteCharactersResponseDto {
        msg: "Favoritos listados con exito".to_string(),
        favorite_characters: characters.into_iter().map(|c| c.into_dto()).collect(),
    }))
}

/// List both favorite kinds of a user.
///
/// # Returns
/// - `200 OK` - Favorited characters and planets, either possibly empty
/// - `404 Not Found` - No user with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/{id}/favorites",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Favorited characters and planets", body = FavoritesResponseDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorites(
    State(state): State<AppState>,
    IdPath(id): IdPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let favorites = FavoriteService::new(&state.db)
        .get_favorites(id)
        .await?
        .ok_or_else(|| AppError::NotFound(user_not_found(id)))?;

    Ok(Json(FavoritesResponseDto {
        msg: "Favoritos listados con exito".to_string(),
        favorite_characters: favorites
            .characters
            .into_iter()
            .map(|c| c.into_dto())
            .collect(),
        favorite_planets: favorites.planets.into_iter().map(|p| p.into_dto()).collect(),
    }))
}

/// Mark a character as favorite for a user.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user_id` - User ID
/// - `character_id` - Character ID
///
/// # Returns
/// - `200 OK` - `{msg, personaje}` when created, `{msg}` when the user or
///   character is missing or the favorite already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/favorite/{user_id}/character/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("character_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Favorite created, or a message explaining why not", body = FavoriteCharacterCreatedDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    IdPath((user_id, character_id)): IdPath<(i32, i32)>,
) -> Result<Response, AppError> {
    let outcome = FavoriteService::new(&state.db)
        .add_character(user_id, character_id)
        .await?;

    let response = match outcome {
        AddFavoriteOutcome::Added(character) => Json(FavoriteCharacterCreatedDto {
            msg: "Personaje favorito creado con Exito".to_string(),
            personaje: character.into_dto(),
        })
        .into_response(),
        AddFavoriteOutcome::UserNotFound => {
            Json(MessageDto::new(user_not_found(user_id))).into_response()
        }
        AddFavoriteOutcome::TargetNotFound => Json(MessageDto::new(format!(
            "El personaje con id {} no existe",
            character_id
        )))
        .into_response(),
        AddFavoriteOutcome::AlreadyFavorite => Json(MessageDto::new(format!(
            "El personaje con id {} ya es favorito del usuario {}",
            character_id, user_id
        )))
        .into_response(),
    };

    Ok(response)
}

/// Mark a planet as favorite for a user.
///
/// # Returns
/// - `200 OK` - `{msg, planeta}` when created, `{msg}` when the user or
///   planet is missing or the favorite already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/favorite/{user_id}/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Favorite created, or a message explaining why not", body = FavoritePlanetCreatedDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    IdPath((user_id, planet_id)): IdPath<(i32, i32)>,
) -> Result<Response, AppError> {
    let outcome = FavoriteService::new(&state.db)
        .add_planet(user_id, planet_id)
        .await?;

    let response = match outcome {
        AddFavoriteOutcome::Added(planet) => Json(FavoritePlanetCreatedDto {
            msg: "Planeta favorito creado con Exito".to_string(),
            planeta: planet.into_dto(),
        })
        .into_response(),
        AddFavoriteOutcome::UserNotFound => {
            Json(MessageDto::new(user_not_found(user_id))).into_response()
        }
        AddFavoriteOutcome::TargetNotFound => Json(MessageDto::new(format!(
            "El planeta con id {} no existe",
            planet_id
        )))
        .into_response(),
        AddFavoriteOutcome::AlreadyFavorite => Json(MessageDto::new(format!(
            "El planeta con id {} ya es favorito del usuario {}",
            planet_id, user_id
        )))
        .into_response(),
    };

    Ok(response)
}

/// Remove a planet from a user's favorites.
///
/// # Returns
/// - `200 OK` - `{msg}` whether or not the favorite existed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/favorite/{user_id}/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Favorite removed, or a message saying it did not exist", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    IdPath((user_id, planet_id)): IdPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let removed = FavoriteService::new(&state.db)
        .remove_planet(user_id, planet_id)
        .await?;

    if !removed {
        return Ok(Json(MessageDto::new(format!(
            "El favorito con id {} del usuario {} no existe",
            planet_id, user_id
        ))));
    }

    Ok(Json(MessageDto::new("Planeta Favorito eliminado con exito")))
}

/// Remove a character from a user's favorites.
///
/// The path segment is `characters`, plural, unlike the matching POST route.
///
/// # Returns
/// - `200 OK` - `{msg}` whether or not the favorite existed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/favorite/{user_id}/characters/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("character_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "Favorite removed, or a message saying it did not exist", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_favorite_character(
    State(state): State<AppState>,
    IdPath((user_id, character_id)): IdPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let removed = FavoriteService::new(&state.db)
        .remove_character(user_id, character_id)
        .await?;

    if !removed {
        return Ok(Json(MessageDto::new(format!(
            "El favorito con id {} del usuario {} no existe",
            character_id, user_id
        ))));
    }

    Ok(Json(MessageDto::new("Personaje Favorito eliminado con exito")))
}
