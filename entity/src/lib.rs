//! SeaORM entity definitions for the holonet schema.

pub mod prelude;

pub mod character;
pub mod favorite_character;
pub mod favorite_planet;
pub mod planet;
pub mod user;
