use crate::server::{
    data::route::RouteRepository,
    model::{
        query::ListQuery,
        route::{RouteParams, ScheduledFlight, UpdateRouteParams},
    },
};
use entity::prelude::*;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{
    builder::TestBuilder,
    factory::{self, route::RouteFactory},
};

mod create;
mod delete;
mod get_all;
mod replace;
mod search_flights;

fn scheduled(day: i32, flight: &str) -> ScheduledFlight {
    ScheduledFlight {
        day: Some(day),
        flight: Some(flight.to_string()),
        utc: Some("10:13:00".to_string()),
    }
}

fn params() -> RouteParams {
    RouteParams {
        airline: Some("AF".to_string()),
        airline_id: Some("airline_137".to_string()),
        source_airport: Some("TLV".to_string()),
        destination_airport: Some("MRS".to_string()),
        distance: Some(2881.6),
        equipment: Some("320".to_string()),
        route_type: Some("route".to_string()),
        stops: Some(0),
        schedule: vec![scheduled(0, "AF198"), scheduled(0, "AF547"), scheduled(1, "AF943")],
    }
}

async fn schedule_count(db: &sea_orm::DatabaseConnection, route_id: &str) -> Result<u64, DbErr> {
    RouteSchedule::find()
        .filter(entity::route_schedule::Column::RouteId.eq(route_id))
        .count(db)
        .await
}
