//! Domain models for route (flight path) operations and flight search.

use crate::{
    model::route::{
        FlightSearchItemDto, PatchRouteDto, RouteBodyDto, RouteDto, ScheduledFlightDto,
    },
    server::model::query::DEFAULT_LIMIT,
};

/// One entry of a route's weekly schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledFlight {
    /// Day of week, `0` being Sunday.
    pub day: Option<i32>,
    pub flight: Option<String>,
    pub utc: Option<String>,
}

impl ScheduledFlight {
    pub fn from_entity(entity: entity::route_schedule::Model) -> Self {
        Self {
            day: entity.day,
            flight: entity.flight,
            utc: entity.utc,
        }
    }

    pub fn from_dto(dto: ScheduledFlightDto) -> Self {
        Self {
            day: dto.day,
            flight: dto.flight,
            utc: dto.utc,
        }
    }

    pub fn into_dto(self) -> ScheduledFlightDto {
        ScheduledFlightDto {
            day: self.day,
            flight: self.flight,
            utc: self.utc,
        }
    }
}

/// Route between two airports operated by one airline.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub id: String,
    pub airline: Option<String>,
    pub airline_id: Option<String>,
    pub source_airport: Option<String>,
    pub destination_airport: Option<String>,
    pub distance: Option<f64>,
    pub equipment: Option<String>,
    pub route_type: Option<String>,
    pub stops: Option<i32>,
    /// Schedule entries in their stored order.
    pub schedule: Vec<ScheduledFlight>,
}

impl Route {
    /// Converts a route entity and its schedule rows to a domain model.
    ///
    /// Schedule rows are sorted by their `position` column, so callers may pass them in
    /// any order.
    pub fn from_entity(
        entity: entity::route::Model,
        mut schedule: Vec<entity::route_schedule::Model>,
    ) -> Self {
        schedule.sort_by_key(|entry| entry.position);

        Self {
            id: entity.id,
            airline: entity.airline,
            airline_id: entity.airlineid,
            source_airport: entity.sourceairport,
            destination_airport: entity.destinationairport,
            distance: entity.distance,
            equipment: entity.equipment,
            route_type: entity.route_type,
            stops: entity.stops,
            schedule: schedule
                .into_iter()
                .map(ScheduledFlight::from_entity)
                .collect(),
        }
    }

    pub fn into_dto(self) -> RouteDto {
        RouteDto {
            id: self.id,
            airline: self.airline,
            airlineid: self.airline_id,
            destinationairport: self.destination_airport,
            distance: self.distance,
            equipment: self.equipment,
            schedule: self
                .schedule
                .into_iter()
                .map(ScheduledFlight::into_dto)
                .collect(),
            sourceairport: self.source_airport,
            stops: self.stops,
            route_type: self.route_type,
        }
    }
}

/// Complete route document used for creation and full replacement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteParams {
    pub airline: Option<String>,
    pub airline_id: Option<String>,
    pub source_airport: Option<String>,
    pub destination_airport: Option<String>,
    pub distance: Option<f64>,
    pub equipment: Option<String>,
    pub route_type: Option<String>,
    pub stops: Option<i32>,
    pub schedule: Vec<ScheduledFlight>,
}

impl RouteParams {
    /// Converts the request body into parameters, discarding the body's `id`.
    pub fn from_dto(dto: RouteBodyDto) -> Self {
        Self {
            airline: dto.airline,
            airline_id: dto.airlineid,
            source_airport: dto.sourceairport,
            destination_airport: dto.destinationairport,
            distance: dto.distance,
            equipment: dto.equipment,
            route_type: dto.route_type,
            stops: dto.stops,
            schedule: dto
                .schedule
                .into_iter()
                .map(ScheduledFlight::from_dto)
                .collect(),
        }
    }
}

/// Parameters for a partial route update.
///
/// Every route property is optional, so any field may be cleared with `null`. A supplied
/// schedule replaces the stored one entirely; `null` empties it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateRouteParams {
    pub airline: Option<Option<String>>,
    pub airline_id: Option<Option<String>>,
    pub source_airport: Option<Option<String>>,
    pub destination_airport: Option<Option<String>>,
    pub distance: Option<Option<f64>>,
    pub equipment: Option<Option<String>>,
    pub route_type: Option<Option<String>>,
    pub stops: Option<Option<i32>>,
    pub schedule: Option<Vec<ScheduledFlight>>,
}

impl From<PatchRouteDto> for UpdateRouteParams {
    fn from(dto: PatchRouteDto) -> Self {
        Self {
            airline: dto.airline,
            airline_id: dto.airlineid,
            source_airport: dto.sourceairport,
            destination_airport: dto.destinationairport,
            distance: dto.distance,
            equipment: dto.equipment,
            route_type: dto.route_type,
            stops: dto.stops,
            schedule: dto.schedule.map(|schedule| {
                schedule
                    .unwrap_or_default()
                    .into_iter()
                    .map(ScheduledFlight::from_dto)
                    .collect()
            }),
        }
    }
}

/// Flight search between two airports, identified by their keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightSearchQuery {
    pub from: String,
    pub to: String,
    /// Restricts hits to one day of week when set.
    pub week_day: Option<i32>,
    pub limit: u64,
    pub skip: u64,
}

impl FlightSearchQuery {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            week_day: None,
            limit: DEFAULT_LIMIT,
            skip: 0,
        }
    }
}

/// A scheduled flight of a route matching a flight search, joined with its airline.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightMatch {
    /// Name of the operating airline.
    pub name: String,
    pub flight: Option<String>,
    pub utc: Option<String>,
    pub day: Option<i32>,
    pub source_airport: Option<String>,
    pub destination_airport: Option<String>,
    pub equipment: Option<String>,
}

impl FlightMatch {
    pub fn into_dto(self) -> FlightSearchItemDto {
        FlightSearchItemDto {
            name: self.name,
            flight: self.flight,
            utc: self.utc,
            day: self.day,
            sourceairport: self.source_airport,
            destinationairport: self.destination_airport,
            equipment: self.equipment,
        }
    }
}
