mod character;
mod favorite_character;
mod favorite_planet;
mod planet;
mod user;
