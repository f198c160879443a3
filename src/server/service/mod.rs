//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer. They
//! assign keys to new documents, turn a missing record into `AppError::NotFound` and
//! coordinate repositories where an operation spans resources, as flight search does.

pub mod airport;
pub mod hotel;
pub mod route;
