//! Favorite association domain models.
//!
//! Associations are internal bookkeeping; callers see the favorited catalog
//! entries, which is why `Favorites` holds characters and planets directly.

use super::{character::Character, planet::Planet};

/// Association row linking a user to a favorited character.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteCharacter {
    pub id: i32,
    pub user_id: i32,
    pub character_id: i32,
}

impl FavoriteCharacter {
    pub fn from_entity(entity: entity::favorite_character::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            character_id: entity.character_id,
        }
    }
}

/// Association row linking a user to a favorited planet.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoritePlanet {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: i32,
}

impl FavoritePlanet {
    pub fn from_entity(entity: entity::favorite_planet::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            planet_id: entity.planet_id,
        }
    }
}

/// Both favorite lists of a single user, expanded to catalog entries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Favorites {
    pub characters: Vec<Character>,
    pub planets: Vec<Planet>,
}

/// Result of trying to add a favorite.
///
/// Only `Added` creates a row; the other variants describe why nothing changed.
#[derive(Debug, Clone, PartialEq)]
pub enum AddFavoriteOutcome<T> {
    /// The association was created; carries the favorited catalog entry.
    Added(T),
    UserNotFound,
    TargetNotFound,
    AlreadyFavorite,
}
