use sea_orm::DatabaseConnection;

use crate::server::{
    data::airport::AirportRepository,
    error::AppError,
    model::{
        airport::{Airport, AirportParams, UpdateAirportParams},
        query::ListQuery,
    },
    util::key::key_or_generate,
};

pub struct AirportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AirportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, query: ListQuery) -> Result<Vec<Airport>, AppError> {
        let repo = AirportRepository::new(self.db);

        Ok(repo.get_all(&query).await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Airport, AppError> {
        let repo = AirportRepository::new(self.db);

        repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// Creates an airport, keeping the client supplied key when there is one.
    pub async fn create(
        &self,
        id: Option<String>,
        params: AirportParams,
    ) -> Result<Airport, AppError> {
        let repo = AirportRepository::new(self.db);

        Ok(repo.create(key_or_generate(id), params).await?)
    }

    pub async fn update(&self, id: &str, params: UpdateAirportParams) -> Result<(), AppError> {
        let repo = AirportRepository::new(self.db);

        if !repo.update(id, params).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    pub async fn replace(&self, id: &str, params: AirportParams) -> Result<(), AppError> {
        let repo = AirportRepository::new(self.db);

        if !repo.replace(id, params).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let repo = AirportRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }
}

pub(crate) fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Airport {} not found", id))
}
