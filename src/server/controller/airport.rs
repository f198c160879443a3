use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use utoipa_axum::{router::UtoipaMethodRouter, routes};

use crate::{
    model::{
        airport::{AirportBodyDto, AirportDto, AirportListDto, PatchAirportDto},
        api::ErrorDto,
    },
    server::{
        controller::{param::ListParams, ResourceRoutes},
        error::AppError,
        model::airport::{Airport, AirportParams, UpdateAirportParams},
        service::airport::AirportService,
        state::AppState,
        util::extract::{AppJson, AppQuery},
    },
};

/// Tag for grouping airport endpoints in OpenAPI documentation
pub static AIRPORT_TAG: &str = "airports";

/// Routes of the `/airports` collection.
pub struct AirportRoutes;

impl ResourceRoutes for AirportRoutes {
    fn get_all() -> UtoipaMethodRouter<AppState> {
        routes!(get_airports)
    }

    fn get_by_id() -> UtoipaMethodRouter<AppState> {
        routes!(get_airport_by_id)
    }

    fn create() -> UtoipaMethodRouter<AppState> {
        routes!(create_airport)
    }

    fn update() -> UtoipaMethodRouter<AppState> {
        routes!(update_airport)
    }

    fn replace() -> UtoipaMethodRouter<AppState> {
        routes!(replace_airport)
    }

    fn delete() -> UtoipaMethodRouter<AppState> {
        routes!(delete_airport)
    }
}

/// List airports.
///
/// Returns airports ordered by key. `search` keeps only airports whose `airportname`
/// contains the given text.
///
/// # Returns
/// - `200 OK` - Page of airports
/// - `400 Bad Request` - Malformed query parameters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/airports",
    tag = AIRPORT_TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Page of airports", body = AirportListDto),
        (status = 400, description = "Malformed query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_airports(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let airports = AirportService::new(&state.db)
        .get_all(params.into_query())
        .await?;

    Ok((
        StatusCode::OK,
        Json(AirportListDto {
            items: airports.into_iter().map(Airport::into_dto).collect(),
        }),
    ))
}

/// Get an airport by key.
///
/// # Returns
/// - `200 OK` - The airport
/// - `404 Not Found` - No airport with that key
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/airports/{id}",
    tag = AIRPORT_TAG,
    params(
        ("id" = String, Path, description = "Airport key")
    ),
    responses(
        (status = 200, description = "The airport", body = AirportDto),
        (status = 404, description = "Airport not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_airport_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let airport = AirportService::new(&state.db).get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(airport.into_dto())))
}

/// Create an airport.
///
/// Uses the `id` of the body as key when present, otherwise generates one.
///
/// # Returns
/// - `201 Created` - The stored airport
/// - `400 Bad Request` - Missing required property or malformed body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/airports",
    tag = AIRPORT_TAG,
    request_body = AirportBodyDto,
    responses(
        (status = 201, description = "Airport created", body = AirportDto),
        (status = 400, description = "Invalid airport document", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_airport(
    State(state): State<AppState>,
    AppJson(mut payload): AppJson<AirportBodyDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = payload.id.take();
    let airport = AirportService::new(&state.db)
        .create(id, AirportParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(airport.into_dto())))
}

/// Partially update an airport.
///
/// Only properties present in the body change. Optional properties may be cleared with
/// `null`; required ones may not.
///
/// # Returns
/// - `204 No Content` - Airport updated
/// - `400 Bad Request` - Required property set to `null` or malformed body
/// - `404 Not Found` - No airport with that key
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/airports/{id}",
    tag = AIRPORT_TAG,
    params(
        ("id" = String, Path, description = "Airport key")
    ),
    request_body = PatchAirportDto,
    responses(
        (status = 204, description = "Airport updated"),
        (status = 400, description = "Invalid airport properties", body = ErrorDto),
        (status = 404, description = "Airport not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_airport(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<PatchAirportDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateAirportParams::try_from(payload)?;
    AirportService::new(&state.db).update(&id, params).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Replace an airport.
///
/// Overwrites the whole document; optional properties missing from the body are removed.
/// The key always comes from the path.
///
/// # Returns
/// - `204 No Content` - Airport replaced
/// - `400 Bad Request` - Missing required property or malformed body
/// - `404 Not Found` - No airport with that key
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/airports/{id}",
    tag = AIRPORT_TAG,
    params(
        ("id" = String, Path, description = "Airport key")
    ),
    request_body = AirportBodyDto,
    responses(
        (status = 204, description = "Airport replaced"),
        (status = 400, description = "Invalid airport document", body = ErrorDto),
        (status = 404, description = "Airport not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_airport(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<AirportBodyDto>,
) -> Result<impl IntoResponse, AppError> {
    AirportService::new(&state.db)
        .replace(&id, AirportParams::from_dto(payload))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete an airport.
///
/// Routes referencing the airport's codes are left untouched.
///
/// # Returns
/// - `204 No Content` - Airport deleted
/// - `404 Not Found` - No airport with that key
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/airports/{id}",
    tag = AIRPORT_TAG,
    params(
        ("id" = String, Path, description = "Airport key")
    ),
    responses(
        (status = 204, description = "Airport deleted"),
        (status = 404, description = "Airport not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_airport(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AirportService::new(&state.db).delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
