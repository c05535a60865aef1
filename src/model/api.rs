use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned for every error response.
///
/// The message travels under `msg`, the same key success bodies use, so clients
/// display every response the same way.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub msg: String,
    pub status_code: u16,
}

/// Body carrying only a display message.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub msg: String,
}

impl MessageDto {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// A single route listed by the sitemap.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct RouteDto {
    pub method: String,
    pub path: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct SitemapDto {
    pub msg: String,
    pub routes: Vec<RouteDto>,
}
