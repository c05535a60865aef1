//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database
//! with conversion between entity models and domain models at the infrastructure boundary.

use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::user::{CreateUserParam, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// The identifier is assigned by the store and `is_active` starts as `true`.
    ///
    /// # Arguments
    /// - `param` - Validated registration fields
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with its assigned id
    /// - `Err(DbErr)` - Database error during insert, including a unique violation on email
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(param.password),
            member_since: ActiveValue::Set(param.member_since),
            firstname: ActiveValue::Set(param.firstname),
            lastname: ActiveValue::Set(param.lastname),
            is_active: ActiveValue::Set(true),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by primary key.
    ///
    /// # Arguments
    /// - `id` - User ID
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets all users ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Every user (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }
}
