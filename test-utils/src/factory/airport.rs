//! Airport factory for creating test airport entities.

use crate::factory::helpers::{next_code, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test airports with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let airport = AirportFactory::new(&db)
///     .name("Los Angeles Intl")
///     .faa("LAX")
///     .geo(33.94, -118.40)
///     .build()
///     .await?;
/// ```
pub struct AirportFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    city: String,
    country: String,
    faa: Option<String>,
    icao: Option<String>,
    tz: String,
    geo: Option<(f64, f64)>,
}

impl<'a> AirportFactory<'a> {
    /// Creates a new AirportFactory with default values.
    ///
    /// Defaults:
    /// - id: `"airport_{id}"`
    /// - name: `"Airport {id}"`
    /// - city: `"City {id}"`, country: `"United States"`
    /// - faa: a unique three letter code, icao: `None`
    /// - tz: `"America/Los_Angeles"`, geo: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("airport_{}", id),
            name: format!("Airport {}", id),
            city: format!("City {}", id),
            country: "United States".to_string(),
            faa: Some(next_code()),
            icao: None,
            tz: "America/Los_Angeles".to_string(),
            geo: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn faa(mut self, faa: impl Into<String>) -> Self {
        self.faa = Some(faa.into());
        self
    }

    /// Removes the FAA code so the airport cannot be matched by flight search.
    pub fn without_faa(mut self) -> Self {
        self.faa = None;
        self
    }

    pub fn icao(mut self, icao: impl Into<String>) -> Self {
        self.icao = Some(icao.into());
        self
    }

    /// Sets latitude and longitude of the airport's geolocation.
    pub fn geo(mut self, lat: f64, lon: f64) -> Self {
        self.geo = Some((lat, lon));
        self
    }

    /// Builds and inserts the airport entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::airport::Model)` - Created airport entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::airport::Model, DbErr> {
        entity::airport::ActiveModel {
            id: ActiveValue::Set(self.id),
            airportname: ActiveValue::Set(self.name),
            city: ActiveValue::Set(self.city),
            country: ActiveValue::Set(self.country),
            faa: ActiveValue::Set(self.faa),
            icao: ActiveValue::Set(self.icao),
            tz: ActiveValue::Set(self.tz),
            geo_lat: ActiveValue::Set(self.geo.map(|(lat, _)| lat)),
            geo_lon: ActiveValue::Set(self.geo.map(|(_, lon)| lon)),
            geo_alt: ActiveValue::Set(None),
            geo_accuracy: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an airport with default values.
///
/// Shorthand for `AirportFactory::new(db).build().await`.
pub async fn create_airport(db: &DatabaseConnection) -> Result<entity::airport::Model, DbErr> {
    AirportFactory::new(db).build().await
}
