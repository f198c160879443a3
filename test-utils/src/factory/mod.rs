//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests. Each
//! entity has its own factory module with both a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let airport = factory::create_airport(&db).await?;
//! let hotel = factory::create_hotel(&db).await?;
//!
//! // A route with its airline and both endpoint airports
//! let (airline, from, to, route) = factory::helpers::create_route_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let airport = factory::airport::AirportFactory::new(&db)
//!     .name("San Francisco Intl")
//!     .faa("SFO")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `airport` - Create airport entities
//! - `airline` - Create airline entities
//! - `route` - Create route entities with their schedule entries
//! - `hotel` - Create hotel entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod airline;
pub mod airport;
pub mod helpers;
pub mod hotel;
pub mod route;

pub use airline::create_airline;
pub use airport::create_airport;
pub use hotel::create_hotel;
pub use route::create_route;
