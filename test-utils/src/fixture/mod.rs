//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them to unit test
//! entity-to-domain conversions and DTO mapping without database overhead.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let airport = fixture::airport::entity();
//! let route = fixture::route::entity();
//! ```

pub mod airport;
pub mod hotel;
pub mod route;

pub use airport::entity as airport_entity;
pub use hotel::entity as hotel_entity;
pub use route::{entity as route_entity, schedule_entity};
