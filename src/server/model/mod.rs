//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary, keeping database and API
//! concerns out of the service layer.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
