//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered through `utoipa_axum` so its annotation lands in a
//! single OpenAPI document. The document is not served; it is flattened into the
//! route list returned by `GET /`.

use std::sync::Arc;

use axum::{Extension, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{controller, state::AppState};

/// Builds the application's HTTP router with all API endpoints.
///
/// Handlers that share a path are registered together so that both methods are
/// recorded under one OpenAPI path item. Requests matching no route fall through
/// to a JSON 404.
///
/// # Registered Endpoints
/// - `GET /` - Route sitemap
/// - `GET /user`, `POST /user` - Greeting and registration
/// - `GET /users`, `GET /users/{id}` - User listing and lookup
/// - `GET /users/{id}/favorites_characters`, `GET /users/{id}/favorites` - Favorite listings
/// - `GET /people`, `GET /people/{id}` - Character catalog
/// - `GET /planets`, `GET /planets/{id}` - Planet catalog
/// - `POST /favorite/{user_id}/character/{character_id}` - Add favorite character
/// - `DELETE /favorite/{user_id}/characters/{character_id}` - Remove favorite character
/// - `POST|DELETE /favorite/{user_id}/planet/{planet_id}` - Add or remove favorite planet
///
/// # Returns
/// An Axum `Router<AppState>` awaiting its state
pub fn router() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holonet", description = "Star Wars catalog and favorites API"), tags(
        (name = controller::sitemap::SITEMAP_TAG, description = "Route discovery"),
        (name = controller::user::USER_TAG, description = "User registration and lookup"),
        (name = controller::character::CHARACTER_TAG, description = "Character catalog"),
        (name = controller::planet::PLANET_TAG, description = "Planet catalog"),
        (name = controller::favorite::FAVORITE_TAG, description = "Per-user favorites"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::sitemap::get_sitemap))
        .routes(routes!(
            controller::user::health_check,
            controller::user::create_user
        ))
        .routes(routes!(controller::user::get_users))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(controller::favorite::get_favorite_characters))
        .routes(routes!(controller::favorite::get_favorites))
        .routes(routes!(controller::character::get_characters))
        .routes(routes!(controller::character::get_character))
        .routes(routes!(controller::planet::get_planets))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(controller::favorite::add_favorite_character))
        .routes(routes!(controller::favorite::delete_favorite_character))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::delete_favorite_planet
        ))
        .split_for_parts();

    let sitemap = Arc::new(controller::sitemap::routes_from_openapi(&api));

    routes
        .fallback(controller::sitemap::not_found)
        .layer(Extension(sitemap))
}
