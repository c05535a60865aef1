use crate::server::data::favorite_character::FavoriteCharacterRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find;
mod get_characters_by_user;
