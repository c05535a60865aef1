//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .email("ana@example.com")
///     .firstname("Ana")
///     .lastname("Lee")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    password: String,
    member_since: NaiveDate,
    firstname: String,
    lastname: String,
    is_active: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"` where id is auto-incremented
    /// - password: `"password"`
    /// - member_since: `2024-01-01`
    /// - firstname: `"First {id}"`, lastname: `"Last {id}"`
    /// - is_active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("user{}@example.com", id),
            password: "password".to_string(),
            member_since: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            firstname: format!("First {}", id),
            lastname: format!("Last {}", id),
            is_active: true,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn member_since(mut self, member_since: NaiveDate) -> Self {
        self.member_since = member_since;
        self
    }

    pub fn firstname(mut self, firstname: impl Into<String>) -> Self {
        self.firstname = firstname.into();
        self
    }

    pub fn lastname(mut self, lastname: impl Into<String>) -> Self {
        self.lastname = lastname.into();
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(self.password),
            member_since: ActiveValue::Set(self.member_since),
            firstname: ActiveValue::Set(self.firstname),
            lastname: ActiveValue::Set(self.lastname),
            is_active: ActiveValue::Set(self.is_active),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
