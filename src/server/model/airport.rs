//! Domain models for airport operations.

use crate::{
    model::airport::{AirportBodyDto, AirportDto, PatchAirportDto},
    server::{
        error::validation::ValidationError,
        model::{geolocation::Geolocation, required_patch},
    },
};

/// Airport document.
#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    pub id: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub faa: Option<String>,
    pub icao: Option<String>,
    /// IANA timezone name, e.g. `Europe/Paris`.
    pub tz: String,
    pub geo: Option<Geolocation>,
}

impl Airport {
    /// Converts an entity model to an airport domain model at the repository boundary.
    pub fn from_entity(entity: entity::airport::Model) -> Self {
        Self {
            geo: Geolocation::from_columns(
                entity.geo_lat,
                entity.geo_lon,
                entity.geo_alt,
                entity.geo_accuracy,
            ),
            id: entity.id,
            name: entity.airportname,
            city: entity.city,
            country: entity.country,
            faa: entity.faa,
            icao: entity.icao,
            tz: entity.tz,
        }
    }

    /// Converts the domain model to a DTO at the controller boundary.
    pub fn into_dto(self) -> AirportDto {
        AirportDto {
            id: self.id,
            airportname: self.name,
            city: self.city,
            country: self.country,
            faa: self.faa,
            geo: self.geo.map(Geolocation::into_dto),
            icao: self.icao,
            tz: self.tz,
        }
    }
}

/// Complete airport document used for creation and full replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct AirportParams {
    pub name: String,
    pub city: String,
    pub country: String,
    pub faa: Option<String>,
    pub icao: Option<String>,
    pub tz: String,
    pub geo: Option<Geolocation>,
}

impl AirportParams {
    /// Converts the request body into parameters, discarding the body's `id`.
    pub fn from_dto(dto: AirportBodyDto) -> Self {
        Self {
            name: dto.airportname,
            city: dto.city,
            country: dto.country,
            faa: dto.faa,
            icao: dto.icao,
            tz: dto.tz,
            geo: dto.geo.map(Geolocation::from_dto),
        }
    }
}

/// Parameters for a partial airport update.
///
/// Only provided fields are updated. For optional properties the outer `Option`
/// indicates presence and the inner one the new, possibly cleared, value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateAirportParams {
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub faa: Option<Option<String>>,
    pub icao: Option<Option<String>>,
    pub tz: Option<String>,
    pub geo: Option<Option<Geolocation>>,
}

impl TryFrom<PatchAirportDto> for UpdateAirportParams {
    type Error = ValidationError;

    fn try_from(dto: PatchAirportDto) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required_patch("airportname", dto.airportname)?,
            city: required_patch("city", dto.city)?,
            country: required_patch("country", dto.country)?,
            faa: dto.faa,
            icao: dto.icao,
            tz: required_patch("tz", dto.tz)?,
            geo: dto.geo.map(|geo| geo.map(Geolocation::from_dto)),
        })
    }
}
