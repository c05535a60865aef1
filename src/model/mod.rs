//! Wire DTOs shared by every endpoint.
//!
//! These are the JSON shapes clients see. Field names follow the public API
//! contract exactly, including its mixed casing.

pub mod api;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
