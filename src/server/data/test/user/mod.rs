use crate::server::{data::user::UserRepository, model::user::CreateUserParam};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod get_all;

fn param(email: &str) -> CreateUserParam {
    CreateUserParam {
        email: email.to_string(),
        password: "x".to_string(),
        member_since: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        firstname: "Ana".to_string(),
        lastname: "Lee".to_string(),
    }
}
