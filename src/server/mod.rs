//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Key assignment, not-found handling and flight search
//!   orchestration
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and validated parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (the database pool)
//! - **Startup** (`startup`) - Tracing, database connection, migrations and shutdown signal
//! - **Router** (`router`) - Route assembly, API documentation and global layers
//! - **Util** (`util/`) - Request extractors and key generation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** parses the body and query into DTOs, validates them into params
//! 3. **Service** executes business logic, orchestrates data operations
//! 4. **Data** queries the database, converts entities to domain models
//! 5. **Controller** converts domain models to DTOs and picks the response status
//! 6. **Error** maps any failure onto a status code and `{ "message": ... }` body

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

#[cfg(test)]
mod test;
