//! Route discovery handlers.
//!
//! The sitemap is derived from the OpenAPI document the router assembles from
//! handler annotations, so it always matches the registered routes.

use std::sync::Arc;

use axum::{http::Uri, Extension, Json};
use utoipa::openapi::{path::Operation, OpenApi};

use crate::{
    model::api::{RouteDto, SitemapDto},
    server::error::AppError,
};

/// Tag for grouping diagnostic endpoints in OpenAPI documentation
pub static SITEMAP_TAG: &str = "sitemap";

/// Flattens an OpenAPI document into one entry per method and path.
///
/// Paths are listed in lexical order; methods within a path follow the order
/// GET, POST, PUT, PATCH, DELETE.
pub fn routes_from_openapi(api: &OpenApi) -> Vec<RouteDto> {
    let mut routes = Vec::new();

    for (path, item) in &api.paths.paths {
        let methods: [(&str, &Option<Operation>); 5] = [
            ("GET", &item.get),
            ("POST", &item.post),
            ("PUT", &item.put),
            ("PATCH", &item.patch),
            ("DELETE", &item.delete),
        ];

        for (method, operation) in methods {
            if operation.is_some() {
                routes.push(RouteDto {
                    method: method.to_string(),
                    path: path.clone(),
                });
            }
        }
    }

    routes
}

/// List every route the API serves.
///
/// # Returns
/// - `200 OK` - Method and path of each registered route
#[utoipa::path(
    get,
    path = "/",
    tag = SITEMAP_TAG,
    responses(
        (status = 200, description = "Registered routes", body = SitemapDto)
    ),
)]
pub async fn get_sitemap(Extension(routes): Extension<Arc<Vec<RouteDto>>>) -> Json<SitemapDto> {
    Json(SitemapDto {
        msg: "Rutas disponibles".to_string(),
        routes: routes.as_ref().clone(),
    })
}

/// Answers any request that matched no route.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("La ruta {} no existe", uri.path()))
}
