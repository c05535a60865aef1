//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Existence checks and duplicate handling for favorites
//! - **Orchestration**: Coordinating multiple repository calls per request
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

use sea_orm::{DbErr, SqlErr};

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;

/// Whether a failed write was rejected by a unique index.
///
/// Services use this to turn duplicate inserts into domain outcomes instead of
/// internal errors.
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

#[cfg(test)]
mod test;
