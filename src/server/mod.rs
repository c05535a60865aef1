//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation: HTTP handlers,
//! business rules, data access, and the infrastructure that wires them together.
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (the database pool)
//! - **Startup** (`startup`) - Database connection, migrations, and middleware stack
//! - **Router** (`router`) - Route registration and OpenAPI collection
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request, after trailing slashes are trimmed
//! 2. **Controller** validates the payload, converts DTOs to params, calls the service
//! 3. **Service** applies business rules and orchestrates repositories
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts domain models to DTOs and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
