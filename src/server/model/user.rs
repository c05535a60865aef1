//! User domain models and parameters.
//!
//! Provides the domain model for registered users and the parameter type used
//! to create them from a registration payload.

use chrono::NaiveDate;

use crate::{
    model::user::{CreateUserDto, UserDto},
    server::error::AppError,
};

/// Registered user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    /// Opaque credential as submitted; never leaves the server.
    pub password: String,
    pub member_since: NaiveDate,
    pub firstname: String,
    pub lastname: String,
    pub is_active: bool,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password is dropped here and never reaches the wire.
    ///
    /// # Returns
    /// - `UserDto` - The public projection of the user
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            member_since: self.member_since,
            firstname: self.firstname,
            lastname: self.lastname,
            is_active: self.is_active,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            password: entity.password,
            member_since: entity.member_since,
            firstname: entity.firstname,
            lastname: entity.lastname,
            is_active: entity.is_active,
        }
    }
}

/// Parameters for registering a new user.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateUserParam {
    pub email: String,
    pub password: String,
    pub member_since: NaiveDate,
    pub firstname: String,
    pub lastname: String,
}

impl CreateUserParam {
    /// Validates a registration payload and converts it into creation parameters.
    ///
    /// Fields are checked in a fixed order and the first missing one is reported,
    /// so clients always see the same message for the same payload.
    ///
    /// # Arguments
    /// - `dto` - Registration payload as received
    ///
    /// # Returns
    /// - `Ok(CreateUserParam)` - Every required field is present and `member_since` is a date
    /// - `Err(AppError::BadRequest)` - A field is missing or `member_since` is not `YYYY-MM-DD`
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        let email = required(dto.email, "Debe ingresar el e-mail")?;
        let password = required(dto.password, "Debe ingresar el password")?;
        let member_since = required(dto.member_since, "Debe ingresar una fecha de creación")?;
        let firstname = required(dto.firstname, "Debe ingresar el nombre")?;
        let lastname = required(dto.lastname, "Debe ingresar el apellido")?;

        let member_since = member_since.trim().parse::<NaiveDate>().map_err(|_| {
            AppError::BadRequest(format!(
                "La fecha de creación '{}' no es válida, use el formato AAAA-MM-DD",
                member_since
            ))
        })?;

        Ok(Self {
            email,
            password,
            member_since,
            firstname,
            lastname,
        })
    }
}

fn required(value: Option<String>, message: &str) -> Result<String, AppError> {
    value.ok_or_else(|| AppError::BadRequest(message.to_string()))
}
