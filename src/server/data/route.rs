//! Route data repository for database operations and flight search.
//!
//! Routes are stored in the `route` table with their schedule in `route_schedule`, one row
//! per entry and ordered by `position`. Writes touching both tables run in a transaction so
//! a route is never visible with a partially written schedule.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect, QueryTrait,
    RelationDef, RelationTrait, TransactionTrait,
};
use std::collections::HashMap;

use crate::server::data::contains;
use crate::server::model::{
    query::ListQuery,
    route::{FlightMatch, Route, RouteParams, ScheduledFlight, UpdateRouteParams},
};

/// Row produced by the flight search join.
#[derive(Debug, FromQueryResult)]
struct FlightRow {
    name: String,
    flight: Option<String>,
    utc: Option<String>,
    day: Option<i32>,
    sourceairport: Option<String>,
    destinationairport: Option<String>,
    equipment: Option<String>,
}

impl FlightRow {
    fn into_match(self) -> FlightMatch {
        FlightMatch {
            name: self.name,
            flight: self.flight,
            utc: self.utc,
            day: self.day,
            source_airport: self.sourceairport,
            destination_airport: self.destinationairport,
            equipment: self.equipment,
        }
    }
}

/// Repository providing database operations for route management.
pub struct RouteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RouteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of routes ordered by key, each with its schedule.
    ///
    /// A search term filters on the `airline` field.
    ///
    /// # Arguments
    /// - `query` - Page selection and optional airline filter
    ///
    /// # Returns
    /// - `Ok(Vec<Route>)` - Routes of the requested page, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self, query: &ListQuery) -> Result<Vec<Route>, DbErr> {
        let routes = entity::prelude::Route::find()
            .apply_if(query.search(), |select, search| {
                let backend = self.db.get_database_backend();
                select.filter(contains(backend, entity::route::Column::Airline, search))
            })
            .order_by_asc(entity::route::Column::Id)
            .offset(query.skip)
            .limit(query.limit)
            .all(self.db)
            .await?;

        if routes.is_empty() {
            return Ok(Vec::new());
        }

        // Fetch all schedules in one query
        let route_ids: Vec<String> = routes.iter().map(|route| route.id.clone()).collect();
        let mut schedules: HashMap<String, Vec<entity::route_schedule::Model>> = HashMap::new();
        for entry in entity::prelude::RouteSchedule::find()
            .filter(entity::route_schedule::Column::RouteId.is_in(route_ids))
            .all(self.db)
            .await?
        {
            schedules.entry(entry.route_id.clone()).or_default().push(entry);
        }

        Ok(routes
            .into_iter()
            .map(|route| {
                let schedule = schedules.remove(&route.id).unwrap_or_default();
                Route::from_entity(route, schedule)
            })
            .collect())
    }

    /// Gets a route by key with its schedule.
    ///
    /// # Returns
    /// - `Ok(Some(Route))` - Route found
    /// - `Ok(None)` - No route with that key
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Route>, DbErr> {
        let Some(route) = entity::prelude::Route::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let schedule = entity::prelude::RouteSchedule::find()
            .filter(entity::route_schedule::Column::RouteId.eq(id))
            .order_by_asc(entity::route_schedule::Column::Position)
            .all(self.db)
            .await?;

        Ok(Some(Route::from_entity(route, schedule)))
    }

    /// Inserts a new route and its schedule under the given key.
    ///
    /// # Returns
    /// - `Ok(Route)` - The stored route
    /// - `Err(DbErr)` - Database error during insert, including a duplicate key
    pub async fn create(&self, id: String, params: RouteParams) -> Result<Route, DbErr> {
        let txn = self.db.begin().await?;

        let route = entity::route::ActiveModel {
            id: ActiveValue::Set(id),
            airline: ActiveValue::Set(params.airline),
            airlineid: ActiveValue::Set(params.airline_id),
            sourceairport: ActiveValue::Set(params.source_airport),
            destinationairport: ActiveValue::Set(params.destination_airport),
            distance: ActiveValue::Set(params.distance),
            equipment: ActiveValue::Set(params.equipment),
            route_type: ActiveValue::Set(params.route_type),
            stops: ActiveValue::Set(params.stops),
        }
        .insert(&txn)
        .await?;

        let schedule = insert_schedule(&txn, &route.id, params.schedule).await?;

        txn.commit().await?;

        Ok(Route::from_entity(route, schedule))
    }

    /// Applies a partial update. A supplied schedule replaces the stored one.
    ///
    /// # Returns
    /// - `Ok(true)` - Route exists and the supplied fields were written
    /// - `Ok(false)` - No route with that key
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: &str, params: UpdateRouteParams) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let Some(route) = entity::prelude::Route::find_by_id(id).one(&txn).await? else {
            return Ok(false);
        };

        let mut active_model: entity::route::ActiveModel = route.into();
        if let Some(airline) = params.airline {
            active_model.airline = ActiveValue::Set(airline);
        }
        if let Some(airline_id) = params.airline_id {
            active_model.airlineid = ActiveValue::Set(airline_id);
        }
        if let Some(source_airport) = params.source_airport {
            active_model.sourceairport = ActiveValue::Set(source_airport);
        }
        if let Some(destination_airport) = params.destination_airport {
            active_model.destinationairport = ActiveValue::Set(destination_airport);
        }
        if let Some(distance) = params.distance {
            active_model.distance = ActiveValue::Set(distance);
        }
        if let Some(equipment) = params.equipment {
            active_model.equipment = ActiveValue::Set(equipment);
        }
        if let Some(route_type) = params.route_type {
            active_model.route_type = ActiveValue::Set(route_type);
        }
        if let Some(stops) = params.stops {
            active_model.stops = ActiveValue::Set(stops);
        }

        if active_model.is_changed() {
            active_model.update(&txn).await?;
        }

        if let Some(schedule) = params.schedule {
            entity::prelude::RouteSchedule::delete_many()
                .filter(entity::route_schedule::Column::RouteId.eq(id))
                .exec(&txn)
                .await?;

            insert_schedule(&txn, id, schedule).await?;
        }

        txn.commit().await?;

        Ok(true)
    }

    /// Overwrites every field and the schedule of an existing route.
    ///
    /// # Returns
    /// - `Ok(true)` - Route replaced
    /// - `Ok(false)` - No route with that key
    /// - `Err(DbErr)` - Database error during update
    pub async fn replace(&self, id: &str, params: RouteParams) -> Result<bool, DbErr> {
        let update = UpdateRouteParams {
            airline: Some(params.airline),
            airline_id: Some(params.airline_id),
            source_airport: Some(params.source_airport),
            destination_airport: Some(params.destination_airport),
            distance: Some(params.distance),
            equipment: Some(params.equipment),
            route_type: Some(params.route_type),
            stops: Some(params.stops),
            schedule: Some(params.schedule),
        };

        self.update(id, update).await
    }

    /// Deletes a route. Its schedule rows are removed by the cascading foreign key.
    ///
    /// # Returns
    /// - `Ok(true)` - Route deleted
    /// - `Ok(false)` - No route with that key
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        // SQLite only enforces the cascade with foreign keys enabled
        entity::prelude::RouteSchedule::delete_many()
            .filter(entity::route_schedule::Column::RouteId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Route::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Searches the scheduled flights between two airports.
    ///
    /// Joins schedule entries with their route and the route's airline, keeping entries
    /// whose route goes from `source_faa` to `destination_faa` and, when `week_day` is
    /// given, that fly on that day. Results are ordered by airline name, then by flight
    /// designator. Routes whose airline is not stored produce no results.
    ///
    /// # Arguments
    /// - `source_faa` - FAA code of the departure airport
    /// - `destination_faa` - FAA code of the arrival airport
    /// - `week_day` - Optional day of week filter
    /// - `limit` - Maximum number of results
    /// - `skip` - Number of results to skip
    ///
    /// # Returns
    /// - `Ok(Vec<FlightMatch>)` - Matching flights, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn search_flights(
        &self,
        source_faa: &str,
        destination_faa: &str,
        week_day: Option<i32>,
        limit: u64,
        skip: u64,
    ) -> Result<Vec<FlightMatch>, DbErr> {
        let airline_relation: RelationDef =
            entity::route::Entity::belongs_to(entity::airline::Entity)
                .from(entity::route::Column::Airlineid)
                .to(entity::airline::Column::Id)
                .into();

        let rows = entity::prelude::RouteSchedule::find()
            .select_only()
            .column_as(entity::airline::Column::Name, "name")
            .column(entity::route_schedule::Column::Flight)
            .column(entity::route_schedule::Column::Utc)
            .column(entity::route_schedule::Column::Day)
            .column(entity::route::Column::Sourceairport)
            .column(entity::route::Column::Destinationairport)
            .column(entity::route::Column::Equipment)
            .join(
                JoinType::InnerJoin,
                entity::route_schedule::Relation::Route.def(),
            )
            .join(JoinType::InnerJoin, airline_relation)
            .filter(entity::route::Column::Sourceairport.eq(source_faa))
            .filter(entity::route::Column::Destinationairport.eq(destination_faa))
            .apply_if(week_day, |select, day| {
                select.filter(entity::route_schedule::Column::Day.eq(day))
            })
            .order_by_asc(entity::airline::Column::Name)
            .order_by_asc(entity::route_schedule::Column::Flight)
            .offset(skip)
            .limit(limit)
            .into_model::<FlightRow>()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(FlightRow::into_match).collect())
    }
}

async fn insert_schedule<C: ConnectionTrait>(
    db: &C,
    route_id: &str,
    schedule: Vec<ScheduledFlight>,
) -> Result<Vec<entity::route_schedule::Model>, DbErr> {
    let mut inserted = Vec::with_capacity(schedule.len());

    for (position, entry) in schedule.into_iter().enumerate() {
        let model = entity::route_schedule::ActiveModel {
            route_id: ActiveValue::Set(route_id.to_string()),
            position: ActiveValue::Set(position as i32),
            day: ActiveValue::Set(entry.day),
            flight: ActiveValue::Set(entry.flight),
            utc: ActiveValue::Set(entry.utc),
            ..Default::default()
        }
        .insert(db)
        .await?;

        inserted.push(model);
    }

    Ok(inserted)
}
