//! Route factory for creating test routes along with their schedule entries.

use crate::factory::helpers::{next_code, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// One schedule entry to insert for a route: `(day, flight, utc)`.
pub type ScheduleEntry = (i32, String, String);

/// Factory for creating test routes with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let route = RouteFactory::new(&db)
///     .airline(&airline)
///     .between(&sfo, &lax)
///     .schedule_entry(1, "AA123", "10:15:00")
///     .build()
///     .await?;
/// ```
pub struct RouteFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    airline: Option<String>,
    airlineid: Option<String>,
    sourceairport: Option<String>,
    destinationairport: Option<String>,
    equipment: Option<String>,
    schedule: Vec<ScheduleEntry>,
}

impl<'a> RouteFactory<'a> {
    /// Creates a new RouteFactory with default values.
    ///
    /// Defaults:
    /// - id: `"route_{id}"`
    /// - airline/airlineid: `None`
    /// - source and destination: unique three letter codes
    /// - equipment: `"738"`
    /// - schedule: empty
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("route_{}", id),
            airline: None,
            airlineid: None,
            sourceairport: Some(next_code()),
            destinationairport: Some(next_code()),
            equipment: Some("738".to_string()),
            schedule: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Points the route at the given airline record.
    pub fn airline(mut self, airline: &entity::airline::Model) -> Self {
        self.airline = airline.iata.clone().or_else(|| Some(airline.name.clone()));
        self.airlineid = Some(airline.id.clone());
        self
    }

    /// Sets the airline key without requiring an airline record to exist.
    pub fn airlineid(mut self, airlineid: impl Into<String>) -> Self {
        self.airlineid = Some(airlineid.into());
        self
    }

    /// Sets source and destination to the FAA codes of the given airports.
    pub fn between(mut self, from: &entity::airport::Model, to: &entity::airport::Model) -> Self {
        self.sourceairport = from.faa.clone();
        self.destinationairport = to.faa.clone();
        self
    }

    pub fn equipment(mut self, equipment: impl Into<String>) -> Self {
        self.equipment = Some(equipment.into());
        self
    }

    /// Appends a schedule entry; entries keep the order they are added in.
    pub fn schedule_entry(
        mut self,
        day: i32,
        flight: impl Into<String>,
        utc: impl Into<String>,
    ) -> Self {
        self.schedule.push((day, flight.into(), utc.into()));
        self
    }

    /// Builds and inserts the route and its schedule entries.
    ///
    /// # Returns
    /// - `Ok(entity::route::Model)` - Created route entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::route::Model, DbErr> {
        let route = entity::route::ActiveModel {
            id: ActiveValue::Set(self.id),
            airline: ActiveValue::Set(self.airline),
            airlineid: ActiveValue::Set(self.airlineid),
            sourceairport: ActiveValue::Set(self.sourceairport),
            destinationairport: ActiveValue::Set(self.destinationairport),
            distance: ActiveValue::Set(Some(1000.0)),
            equipment: ActiveValue::Set(self.equipment),
            route_type: ActiveValue::Set(Some("route".to_string())),
            stops: ActiveValue::Set(Some(0)),
        }
        .insert(self.db)
        .await?;

        for (position, (day, flight, utc)) in self.schedule.into_iter().enumerate() {
            entity::route_schedule::ActiveModel {
                route_id: ActiveValue::Set(route.id.clone()),
                position: ActiveValue::Set(position as i32),
                day: ActiveValue::Set(Some(day)),
                flight: ActiveValue::Set(Some(flight)),
                utc: ActiveValue::Set(Some(utc)),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(route)
    }
}

/// Creates a route with default values and an empty schedule.
pub async fn create_route(db: &DatabaseConnection) -> Result<entity::route::Model, DbErr> {
    RouteFactory::new(db).build().await
}
