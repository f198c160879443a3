use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::deserialize_present;

/// One entry of a route's weekly schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScheduledFlightDto {
    /// Day of week, `0` being Sunday.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RouteDto {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airlineid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destinationairport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,
    #[serde(default)]
    pub schedule: Vec<ScheduledFlightDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sourceairport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stops: Option<i32>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub route_type: Option<String>,
}

/// Complete route document accepted by create and replace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RouteBodyDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airlineid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destinationairport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,
    #[serde(default)]
    pub schedule: Vec<ScheduledFlightDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sourceairport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stops: Option<i32>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub route_type: Option<String>,
}

/// Partial route update. A supplied `schedule` replaces the whole list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct PatchRouteDto {
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub airline: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub airlineid: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub destinationairport: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<f64>)]
    pub distance: Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub equipment: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<Vec<ScheduledFlightDto>>)]
    pub schedule: Option<Option<Vec<ScheduledFlightDto>>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub sourceairport: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<i32>)]
    pub stops: Option<Option<i32>>,
    #[serde(rename = "type", default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub route_type: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RouteListDto {
    pub items: Vec<RouteDto>,
}

/// Flattened flight search hit: one scheduled flight of a matching route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FlightSearchItemDto {
    /// Name of the operating airline.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sourceairport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destinationairport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FlightSearchDto {
    pub items: Vec<FlightSearchItemDto>,
}

/// Response of `GET /flightPaths`: flight search hits when `from`/`to` are given,
/// the plain route listing otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum FlightPathsDto {
    Flights(FlightSearchDto),
    Routes(RouteListDto),
}
