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
        hotel::{HotelBodyDto, HotelDto, HotelListDto, PatchHotelDto},
    },
    server::{
        controller::{param::ListParams, ResourceRoutes},
        error::AppError,
        model::hotel::{Hotel, HotelParams, UpdateHotelParams},
        service::hotel::HotelService,
        state::AppState,
        util::extract::{AppJson, AppQuery},
    },
};

/// Tag for grouping hotel endpoints in OpenAPI documentation
pub static HOTEL_TAG: &str = "hotels";

/// Routes of the `/hotels` collection.
pub struct HotelRoutes;

impl ResourceRoutes for HotelRoutes {
    fn get_all() -> UtoipaMethodRouter<AppState> {
        routes!(get_hotels)
    }

    fn get_by_id() -> UtoipaMethodRouter<AppState> {
        routes!(get_hotel_by_id)
    }

    fn create() -> UtoipaMethodRouter<AppState> {
        routes!(create_hotel)
    }

    fn update() -> UtoipaMethodRouter<AppState> {
        routes!(update_hotel)
    }

    fn replace() -> UtoipaMethodRouter<AppState> {
        routes!(replace_hotel)
    }

    fn delete() -> UtoipaMethodRouter<AppState> {
        routes!(delete_hotel)
    }
}

/// List hotels, optionally filtered by a substring of their name.
#[utoipa::path(
    get,
    path = "/hotels",
    tag = HOTEL_TAG,
    params(ListParams),
    responses(
        (status = 200, description = "Page of hotels", body = HotelListDto),
        (status = 400, description = "Malformed query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hotels(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let hotels = HotelService::new(&state.db)
        .get_all(params.into_query())
        .await?;

    Ok((
        StatusCode::OK,
        Json(HotelListDto {
            items: hotels.into_iter().map(Hotel::into_dto).collect(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/hotels/{id}",
    tag = HOTEL_TAG,
    params(
        ("id" = String, Path, description = "Hotel key")
    ),
    responses(
        (status = 200, description = "The hotel", body = HotelDto),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hotel_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let hotel = HotelService::new(&state.db).get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(hotel.into_dto())))
}

/// Create a hotel.
///
/// Properties besides `id`, `name` and `url` are stored as sent and returned with the
/// hotel. `url` must be an http(s) link.
#[utoipa::path(
    post,
    path = "/hotels",
    tag = HOTEL_TAG,
    request_body = HotelBodyDto,
    responses(
        (status = 201, description = "Hotel created", body = HotelDto),
        (status = 400, description = "Invalid hotel document", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_hotel(
    State(state): State<AppState>,
    AppJson(mut payload): AppJson<HotelBodyDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = payload.id.take();
    let params = HotelParams::try_from(payload)?;
    let hotel = HotelService::new(&state.db).create(id, params).await?;

    Ok((StatusCode::CREATED, Json(hotel.into_dto())))
}

/// Partially update a hotel. Free-form properties are merged into the stored ones.
#[utoipa::path(
    patch,
    path = "/hotels/{id}",
    tag = HOTEL_TAG,
    params(
        ("id" = String, Path, description = "Hotel key")
    ),
    request_body = PatchHotelDto,
    responses(
        (status = 204, description = "Hotel updated"),
        (status = 400, description = "Invalid hotel properties", body = ErrorDto),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_hotel(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<PatchHotelDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateHotelParams::try_from(payload)?;
    HotelService::new(&state.db).update(&id, params).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Replace a hotel, dropping every property missing from the body.
#[utoipa::path(
    put,
    path = "/hotels/{id}",
    tag = HOTEL_TAG,
    params(
        ("id" = String, Path, description = "Hotel key")
    ),
    request_body = HotelBodyDto,
    responses(
        (status = 204, description = "Hotel replaced"),
        (status = 400, description = "Invalid hotel document", body = ErrorDto),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_hotel(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<HotelBodyDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = HotelParams::try_from(payload)?;
    HotelService::new(&state.db).replace(&id, params).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/hotels/{id}",
    tag = HOTEL_TAG,
    params(
        ("id" = String, Path, description = "Hotel key")
    ),
    responses(
        (status = 204, description = "Hotel deleted"),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_hotel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    HotelService::new(&state.db).delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
