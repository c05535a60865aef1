use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{CreateUserDto, UserDto, UserResponseDto, UsersResponseDto},
    },
    server::{
        controller::path::IdPath, error::AppError, model::user::CreateUserParam,
        service::user::UserService, state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Liveness probe kept from the original front end contract.
///
/// # Returns
/// - `200 OK` - Static greeting
#[utoipa::path(
    get,
    path = "/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Static greeting", body = MessageDto)
    ),
)]
pub async fn health_check() -> impl IntoResponse {
    Json(MessageDto::new("Hello, this is your GET /user response "))
}

/// Register a new user.
///
/// Required fields are checked in order (email, password, member_since,
/// firstname, lastname) and the first missing one is reported. The endpoint
/// answers 200 rather than 201 on success.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Registration body, or the rejection produced while parsing it
///
/// # Returns
/// - `200 OK` - The created user, without password
/// - `400 Bad Request` - Body missing or not JSON, a required field absent,
///   an invalid date, or an email already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/user",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "User registered", body = UserResponseDto),
        (status = 400, description = "Missing body or required field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!("Rejected registration body: {}", rejection);
        AppError::BadRequest("Debe enviar información".to_string())
    })?;

    let param = CreateUserParam::from_dto(payload)?;

    let user = UserService::new(&state.db).create_user(param).await?;

    Ok(Json(UserResponseDto {
        msg: "registro exitoso".to_string(),
        user: user.into_dto(),
    }))
}

/// List every registered user.
///
/// # Returns
/// - `200 OK` - All users ordered by ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = UsersResponseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all_users().await?;

    let users: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok(Json(UsersResponseDto {
        msg: "Usuarios listados correctamente".to_string(),
        users,
    }))
}

/// Get a single user by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - User ID
///
/// # Returns
/// - `200 OK` - The user
/// - `404 Not Found` - No user with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user", body = UserResponseDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(id): IdPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let Some(user) = UserService::new(&state.db).get_user(id).await? else {
        return Err(AppError::NotFound(format!(
            "El usuario con id {} no existe",
            id
        )));
    };

    Ok(Json(UserResponseDto {
        msg: "Usuario Listado con exito".to_string(),
        user: user.into_dto(),
    }))
}
