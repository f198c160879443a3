//! Airport data repository for database operations.
//!
//! This module provides the `AirportRepository` for managing airport records. The embedded
//! geolocation is flattened into `geo_*` columns on write and rebuilt on read, so callers
//! only ever see `Airport` domain models.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait,
};

use crate::server::data::contains;
use crate::server::model::{
    airport::{Airport, AirportParams, UpdateAirportParams},
    geolocation::Geolocation,
    query::ListQuery,
};

/// Repository providing database operations for airport management.
pub struct AirportRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AirportRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of airports ordered by key.
    ///
    /// When the query carries a search term, only airports whose name contains it are
    /// returned.
    ///
    /// # Arguments
    /// - `query` - Page selection and optional name filter
    ///
    /// # Returns
    /// - `Ok(Vec<Airport>)` - Airports of the requested page, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self, query: &ListQuery) -> Result<Vec<Airport>, DbErr> {
        let entities = entity::prelude::Airport::find()
            .apply_if(query.search(), |select, search| {
                let backend = self.db.get_database_backend();
                select.filter(contains(backend, entity::airport::Column::Airportname, search))
            })
            .order_by_asc(entity::airport::Column::Id)
            .offset(query.skip)
            .limit(query.limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Airport::from_entity).collect())
    }

    /// Gets an airport by key.
    ///
    /// # Returns
    /// - `Ok(Some(Airport))` - Airport found
    /// - `Ok(None)` - No airport with that key
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Airport>, DbErr> {
        let entity = entity::prelude::Airport::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Airport::from_entity))
    }

    /// Gets only the FAA code of an airport.
    ///
    /// # Returns
    /// - `Ok(Some(Some(code)))` - Airport found with an FAA code
    /// - `Ok(Some(None))` - Airport found without an FAA code
    /// - `Ok(None)` - No airport with that key
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_faa_by_id(&self, id: &str) -> Result<Option<Option<String>>, DbErr> {
        entity::prelude::Airport::find_by_id(id)
            .select_only()
            .column(entity::airport::Column::Faa)
            .into_tuple::<Option<String>>()
            .one(self.db)
            .await
    }

    /// Inserts a new airport under the given key.
    ///
    /// # Returns
    /// - `Ok(Airport)` - The stored airport
    /// - `Err(DbErr)` - Database error during insert, including a duplicate key
    pub async fn create(&self, id: String, params: AirportParams) -> Result<Airport, DbErr> {
        let (geo_lat, geo_lon, geo_alt, geo_accuracy) = geo_columns(params.geo);

        let entity = entity::airport::ActiveModel {
            id: ActiveValue::Set(id),
            airportname: ActiveValue::Set(params.name),
            city: ActiveValue::Set(params.city),
            country: ActiveValue::Set(params.country),
            faa: ActiveValue::Set(params.faa),
            icao: ActiveValue::Set(params.icao),
            tz: ActiveValue::Set(params.tz),
            geo_lat: ActiveValue::Set(geo_lat),
            geo_lon: ActiveValue::Set(geo_lon),
            geo_alt: ActiveValue::Set(geo_alt),
            geo_accuracy: ActiveValue::Set(geo_accuracy),
        }
        .insert(self.db)
        .await?;

        Ok(Airport::from_entity(entity))
    }

    /// Applies a partial update, leaving fields that were not supplied untouched.
    ///
    /// # Returns
    /// - `Ok(true)` - Airport exists and the supplied fields were written
    /// - `Ok(false)` - No airport with that key
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: &str, params: UpdateAirportParams) -> Result<bool, DbErr> {
        let Some(airport) = entity::prelude::Airport::find_by_id(id).one(self.db).await? else {
            return Ok(false);
        };

        let mut active_model: entity::airport::ActiveModel = airport.into();
        if let Some(name) = params.name {
            active_model.airportname = ActiveValue::Set(name);
        }
        if let Some(city) = params.city {
            active_model.city = ActiveValue::Set(city);
        }
        if let Some(country) = params.country {
            active_model.country = ActiveValue::Set(country);
        }
        if let Some(faa) = params.faa {
            active_model.faa = ActiveValue::Set(faa);
        }
        if let Some(icao) = params.icao {
            active_model.icao = ActiveValue::Set(icao);
        }
        if let Some(tz) = params.tz {
            active_model.tz = ActiveValue::Set(tz);
        }
        if let Some(geo) = params.geo {
            let (geo_lat, geo_lon, geo_alt, geo_accuracy) = geo_columns(geo);
            active_model.geo_lat = ActiveValue::Set(geo_lat);
            active_model.geo_lon = ActiveValue::Set(geo_lon);
            active_model.geo_alt = ActiveValue::Set(geo_alt);
            active_model.geo_accuracy = ActiveValue::Set(geo_accuracy);
        }

        if active_model.is_changed() {
            active_model.update(self.db).await?;
        }

        Ok(true)
    }

    /// Overwrites every field of an existing airport. Optional fields missing from
    /// `params` are cleared.
    ///
    /// # Returns
    /// - `Ok(true)` - Airport replaced
    /// - `Ok(false)` - No airport with that key
    /// - `Err(DbErr)` - Database error during update
    pub async fn replace(&self, id: &str, params: AirportParams) -> Result<bool, DbErr> {
        let update = UpdateAirportParams {
            name: Some(params.name),
            city: Some(params.city),
            country: Some(params.country),
            faa: Some(params.faa),
            icao: Some(params.icao),
            tz: Some(params.tz),
            geo: Some(params.geo),
        };

        self.update(id, update).await
    }

    /// Deletes an airport.
    ///
    /// # Returns
    /// - `Ok(true)` - Airport deleted
    /// - `Ok(false)` - No airport with that key
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Airport::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

fn geo_columns(
    geo: Option<Geolocation>,
) -> (Option<f64>, Option<f64>, Option<f64>, Option<String>) {
    match geo {
        Some(geo) => (Some(geo.lat), Some(geo.lon), geo.alt, geo.accuracy),
        None => (None, None, None, None),
    }
}
