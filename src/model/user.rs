use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public projection of a user. The password is never part of it.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub member_since: NaiveDate,
    pub firstname: String,
    pub lastname: String,
    pub is_active: bool,
}

/// Registration payload.
///
/// Every field is optional at the wire level so that a missing field can be
/// reported with its own message instead of a generic deserialization error.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct CreateUserDto {
    pub email: Option<String>,
    pub password: Option<String>,
    /// Calendar date, `YYYY-MM-DD`.
    pub member_since: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UsersResponseDto {
    pub msg: String,
    pub users: Vec<UserDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UserResponseDto {
    pub msg: String,
    pub user: UserDto,
}
