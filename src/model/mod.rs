//! Request and response DTOs exchanged over the HTTP API.
//!
//! Field names follow the stored document shapes (`airportname`, `sourceairport`, ...) so
//! existing travel sample clients keep working.

pub mod airport;
pub mod api;
pub mod hotel;
pub mod route;
