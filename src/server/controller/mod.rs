//! HTTP request handlers.
//!
//! One handler per method and path. Handlers convert request payloads into
//! server parameter types, call the matching service, and convert the returned
//! domain models into response DTOs. Each handler carries a `#[utoipa::path]`
//! annotation; the router collects them into the OpenAPI document that also
//! backs the `GET /` sitemap.

pub mod character;
pub mod favorite;
pub mod path;
pub mod planet;
pub mod sitemap;
pub mod user;

#[cfg(test)]
mod test;
