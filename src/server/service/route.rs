use sea_orm::DatabaseConnection;

use crate::server::{
    data::{airport::AirportRepository, route::RouteRepository},
    error::AppError,
    model::{
        query::ListQuery,
        route::{FlightMatch, FlightSearchQuery, Route, RouteParams, UpdateRouteParams},
    },
    service::airport,
    util::key::key_or_generate,
};

pub struct RouteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RouteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, query: ListQuery) -> Result<Vec<Route>, AppError> {
        let repo = RouteRepository::new(self.db);

        Ok(repo.get_all(&query).await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Route, AppError> {
        let repo = RouteRepository::new(self.db);

        repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, id: Option<String>, params: RouteParams) -> Result<Route, AppError> {
        let repo = RouteRepository::new(self.db);

        Ok(repo.create(key_or_generate(id), params).await?)
    }

    pub async fn update(&self, id: &str, params: UpdateRouteParams) -> Result<(), AppError> {
        let repo = RouteRepository::new(self.db);

        if !repo.update(id, params).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    pub async fn replace(&self, id: &str, params: RouteParams) -> Result<(), AppError> {
        let repo = RouteRepository::new(self.db);

        if !repo.replace(id, params).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let repo = RouteRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    /// Searches scheduled flights between two airports given by key.
    ///
    /// Both airports are resolved to their FAA codes first. An airport without an FAA
    /// code cannot be the endpoint of any route, so the search yields no flights.
    ///
    /// # Returns
    /// - `Ok(Vec<FlightMatch>)` - Matching flights ordered by airline name
    /// - `Err(AppError::NotFound)` - One of the airports does not exist
    /// - `Err(AppError::DbErr)` - Database error during lookup or search
    pub async fn search_flights(
        &self,
        query: FlightSearchQuery,
    ) -> Result<Vec<FlightMatch>, AppError> {
        let airport_repo = AirportRepository::new(self.db);

        let source = airport_repo
            .get_faa_by_id(&query.from)
            .await?
            .ok_or_else(|| airport::not_found(&query.from))?;
        let destination = airport_repo
            .get_faa_by_id(&query.to)
            .await?
            .ok_or_else(|| airport::not_found(&query.to))?;

        let (Some(source), Some(destination)) = (source, destination) else {
            tracing::debug!(
                from = %query.from,
                to = %query.to,
                "Flight search airport has no FAA code"
            );
            return Ok(Vec::new());
        };

        let route_repo = RouteRepository::new(self.db);

        Ok(route_repo
            .search_flights(
                &source,
                &destination,
                query.week_day,
                query.limit,
                query.skip,
            )
            .await?)
    }
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Route {} not found", id))
}
