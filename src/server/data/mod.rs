//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! entity. Repositories borrow an explicit database handle, use SeaORM entity models
//! internally and return domain models to keep the data layer separate from business
//! logic. Relationships are traversed with explicit join queries keyed by foreign id.

pub mod character;
pub mod favorite_character;
pub mod favorite_planet;
pub mod planet;
pub mod user;

#[cfg(test)]
mod test;
