use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        airport::{AirportRoutes, AIRPORT_TAG},
        hotel::{HotelRoutes, HOTEL_TAG},
        route::{FlightPathRoutes, ROUTE_TAG},
        ResourceRoutes,
    },
    error::{AppError, InternalServerError},
    state::AppState,
};

/// Path the Swagger UI is served at.
pub const API_DOCS_PATH: &str = "/api-docs";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Travel Sample API",
        description = "CRUD access to airports, flight paths and hotels, plus flight search"
    ),
    tags(
        (name = AIRPORT_TAG, description = "Airport documents"),
        (name = ROUTE_TAG, description = "Routes between airports and flight search"),
        (name = HOTEL_TAG, description = "Hotel documents")
    )
)]
struct ApiDoc;

/// Builds the application router with every resource, the API documentation and the
/// global layers.
pub fn router(state: AppState) -> Router {
    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(AirportRoutes::router())
        .merge(FlightPathRoutes::router())
        .merge(HotelRoutes::router())
        .split_for_parts();

    routes
        .route("/", get(ready))
        .merge(
            SwaggerUi::new(API_DOCS_PATH).url(format!("{}/openapi.json", API_DOCS_PATH), api),
        )
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            CorsLayer::new()
                .allow_origin(cors::Any)
                .allow_methods(cors::Any)
                .allow_headers(cors::Any),
        )
        .with_state(state)
}

async fn ready() -> &'static str {
    "I am ready!!"
}

async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    InternalServerError(format!("Handler panicked: {}", details)).into_response()
}
