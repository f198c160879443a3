//! HTTP request handlers.
//!
//! Each resource module exposes its handlers annotated with `#[utoipa::path]` and a unit
//! struct implementing `ResourceRoutes`, which assembles them into an `OpenApiRouter` so
//! the routes and the generated API document cannot drift apart.

pub mod airport;
pub mod hotel;
pub mod param;
pub mod route;

use utoipa_axum::router::{OpenApiRouter, UtoipaMethodRouter};

use crate::server::state::AppState;

/// Operations every resource collection offers.
///
/// Implementors return the documented method router of each operation; `router`
/// combines them. Collections mounted at `/{resource}` serve `get_all` and `create`,
/// while `/{resource}/{id}` serves the remaining operations.
pub trait ResourceRoutes {
    /// `GET /{resource}` - list with `limit`, `skip` and `search`.
    fn get_all() -> UtoipaMethodRouter<AppState>;

    /// `GET /{resource}/{id}`
    fn get_by_id() -> UtoipaMethodRouter<AppState>;

    /// `POST /{resource}` - responds 201 with the created document.
    fn create() -> UtoipaMethodRouter<AppState>;

    /// `PATCH /{resource}/{id}` - responds 204.
    fn update() -> UtoipaMethodRouter<AppState>;

    /// `PUT /{resource}/{id}` - responds 204.
    fn replace() -> UtoipaMethodRouter<AppState>;

    /// `DELETE /{resource}/{id}` - responds 204.
    fn delete() -> UtoipaMethodRouter<AppState>;

    fn router() -> OpenApiRouter<AppState> {
        OpenApiRouter::new()
            .routes(Self::get_all())
            .routes(Self::create())
            .routes(Self::get_by_id())
            .routes(Self::update())
            .routes(Self::replace())
            .routes(Self::delete())
    }
}
