//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let character = factory::create_character(&db).await?;
//!     let favorite = factory::create_favorite_character(&db, user.id, character.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("ana@example.com")
//!     .firstname("Ana")
//!     .build()
//!     .await?;
//! ```

pub mod character;
pub mod favorite_character;
pub mod favorite_planet;
pub mod helpers;
pub mod planet;
pub mod user;

pub use character::create_character;
pub use favorite_character::create_favorite_character;
pub use favorite_planet::create_favorite_planet;
pub use planet::create_planet;
pub use user::create_user;
