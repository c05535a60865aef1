//! User service for business logic.
//!
//! This module provides the `UserService` for listing, fetching and registering
//! users while working with domain models rather than DTOs.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, User},
    service::is_unique_violation,
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every registered user.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users ordered by ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        let user_repo = UserRepository::new(self.db);
        let users = user_repo.get_all().await?;
        Ok(users)
    }

    /// Retrieves a user by ID.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user to look up
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_user(&self, user_id: i32) -> Result<Option<User>, AppError> {
        let user_repo = UserRepository::new(self.db);
        let user = user_repo.find_by_id(user_id).await?;
        Ok(user)
    }

    /// Registers a new user.
    ///
    /// # Arguments
    /// - `param` - Validated registration fields
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with its assigned ID
    /// - `Err(AppError::BadRequest)` - The email is already registered
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create_user(&self, param: CreateUserParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);
        let email = param.email.clone();

        match user_repo.create(param).await {
            Ok(user) => {
                tracing::info!("Registered user {} with id {}", user.email, user.id);
                Ok(user)
            }
            Err(err) if is_unique_violation(&err) => Err(AppError::BadRequest(format!(
                "El e-mail {} ya está registrado",
                email
            ))),
            Err(err) => Err(err.into()),
        }
    }
}
