//! Travel API Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the travel
//! API. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases, factories that insert realistic travel sample documents and fixtures that build
//! entity models without touching the database.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//! use entity::prelude::Airport;
//!
//! #[tokio::test]
//! async fn test_airport_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Airport)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     let airport = factory::create_airport(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
