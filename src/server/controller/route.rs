use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use utoipa_axum::{router::UtoipaMethodRouter, routes};

use crate::{
    model::{
        api::ErrorDto,
        route::{
            FlightPathsDto, FlightSearchDto, PatchRouteDto, RouteBodyDto, RouteDto, RouteListDto,
        },
    },
    server::{
        controller::{param::FlightPathsParams, ResourceRoutes},
        error::{validation::ValidationError, AppError},
        model::{
            query::ListQuery,
            route::{FlightMatch, FlightSearchQuery, Route, RouteParams, UpdateRouteParams},
        },
        service::route::RouteService,
        state::AppState,
        util::extract::{AppJson, AppQuery},
    },
};

/// Tag for grouping flight path endpoints in OpenAPI documentation
pub static ROUTE_TAG: &str = "flightPaths";

/// Routes of the `/flightPaths` collection.
pub struct FlightPathRoutes;

impl ResourceRoutes for FlightPathRoutes {
    fn get_all() -> UtoipaMethodRouter<AppState> {
        routes!(get_flight_paths)
    }

    fn get_by_id() -> UtoipaMethodRouter<AppState> {
        routes!(get_flight_path_by_id)
    }

    fn create() -> UtoipaMethodRouter<AppState> {
        routes!(create_flight_path)
    }

    fn update() -> UtoipaMethodRouter<AppState> {
        routes!(update_flight_path)
    }

    fn replace() -> UtoipaMethodRouter<AppState> {
        routes!(replace_flight_path)
    }

    fn delete() -> UtoipaMethodRouter<AppState> {
        routes!(delete_flight_path)
    }
}

/// Search flights between two airports, or list routes.
///
/// With `from` and `to` set to airport keys, returns the scheduled flights of routes
/// between the two airports ordered by airline name, optionally restricted to `weekDay`.
/// Without either, lists routes like any other collection, with `search` matched
/// against `airline`.
///
/// # Returns
/// - `200 OK` - Flight search hits or page of routes
/// - `400 Bad Request` - Only one of `from`/`to` given, or malformed query parameters
/// - `404 Not Found` - `from` or `to` is not a known airport
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/flightPaths",
    tag = ROUTE_TAG,
    params(FlightPathsParams),
    responses(
        (status = 200, description = "Flight search hits or page of routes", body = FlightPathsDto),
        (status = 400, description = "Incomplete flight search or malformed query", body = ErrorDto),
        (status = 404, description = "Airport not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flight_paths(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<FlightPathsParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = RouteService::new(&state.db);

    let limit = params.limit();
    let from = params.from.filter(|from| !from.is_empty());
    let to = params.to.filter(|to| !to.is_empty());

    let body = match (from, to) {
        (Some(from), Some(to)) => {
            let flights = service
                .search_flights(FlightSearchQuery {
                    week_day: params.week_day,
                    limit,
                    skip: params.skip,
                    ..FlightSearchQuery::new(from, to)
                })
                .await?;

            FlightPathsDto::Flights(FlightSearchDto {
                items: flights.into_iter().map(FlightMatch::into_dto).collect(),
            })
        }
        (None, None) => {
            let routes = service
                .get_all(ListQuery {
                    limit,
                    skip: params.skip,
                    search: params.search,
                })
                .await?;

            FlightPathsDto::Routes(RouteListDto {
                items: routes.into_iter().map(Route::into_dto).collect(),
            })
        }
        _ => return Err(ValidationError::IncompleteFlightSearch.into()),
    };

    Ok((StatusCode::OK, Json(body)))
}

#[utoipa::path(
    get,
    path = "/flightPaths/{id}",
    tag = ROUTE_TAG,
    params(
        ("id" = String, Path, description = "Route key")
    ),
    responses(
        (status = 200, description = "The route with its schedule", body = RouteDto),
        (status = 404, description = "Route not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flight_path_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let route = RouteService::new(&state.db).get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(route.into_dto())))
}

/// Create a route. The schedule keeps the order it is sent in.
#[utoipa::path(
    post,
    path = "/flightPaths",
    tag = ROUTE_TAG,
    request_body = RouteBodyDto,
    responses(
        (status = 201, description = "Route created", body = RouteDto),
        (status = 400, description = "Invalid route document", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_flight_path(
    State(state): State<AppState>,
    AppJson(mut payload): AppJson<RouteBodyDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = payload.id.take();
    let route = RouteService::new(&state.db)
        .create(id, RouteParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(route.into_dto())))
}

/// Partially update a route.
///
/// A `schedule` in the body replaces the stored schedule as a whole; `null` empties it.
#[utoipa::path(
    patch,
    path = "/flightPaths/{id}",
    tag = ROUTE_TAG,
    params(
        ("id" = String, Path, description = "Route key")
    ),
    request_body = PatchRouteDto,
    responses(
        (status = 204, description = "Route updated"),
        (status = 400, description = "Invalid route properties", body = ErrorDto),
        (status = 404, description = "Route not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_flight_path(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<PatchRouteDto>,
) -> Result<impl IntoResponse, AppError> {
    RouteService::new(&state.db)
        .update(&id, UpdateRouteParams::from(payload))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Replace a route and its schedule.
#[utoipa::path(
    put,
    path = "/flightPaths/{id}",
    tag = ROUTE_TAG,
    params(
        ("id" = String, Path, description = "Route key")
    ),
    request_body = RouteBodyDto,
    responses(
        (status = 204, description = "Route replaced"),
        (status = 400, description = "Invalid route document", body = ErrorDto),
        (status = 404, description = "Route not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_flight_path(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<RouteBodyDto>,
) -> Result<impl IntoResponse, AppError> {
    RouteService::new(&state.db)
        .replace(&id, RouteParams::from_dto(payload))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/flightPaths/{id}",
    tag = ROUTE_TAG,
    params(
        ("id" = String, Path, description = "Route key")
    ),
    responses(
        (status = 204, description = "Route deleted"),
        (status = 404, description = "Route not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_flight_path(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    RouteService::new(&state.db).delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
