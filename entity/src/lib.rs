//! SeaORM entities backing the travel sample collections.
//!
//! Embedded sub-documents are stored relationally: an airport's geolocation is
//! flattened into nullable `geo_*` columns and a route's schedule lives in the
//! `route_schedule` child table ordered by `position`.

pub mod prelude;

pub mod airline;
pub mod airport;
pub mod hotel;
pub mod route;
pub mod route_schedule;
