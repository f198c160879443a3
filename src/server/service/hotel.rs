use sea_orm::DatabaseConnection;

use crate::server::{
    data::hotel::HotelRepository,
    error::AppError,
    model::{
        hotel::{Hotel, HotelParams, UpdateHotelParams},
        query::ListQuery,
    },
    util::key::key_or_generate,
};

pub struct HotelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HotelService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, query: ListQuery) -> Result<Vec<Hotel>, AppError> {
        let repo = HotelRepository::new(self.db);

        Ok(repo.get_all(&query).await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Hotel, AppError> {
        let repo = HotelRepository::new(self.db);

        repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, id: Option<String>, params: HotelParams) -> Result<Hotel, AppError> {
        let repo = HotelRepository::new(self.db);

        Ok(repo.create(key_or_generate(id), params).await?)
    }

    pub async fn update(&self, id: &str, params: UpdateHotelParams) -> Result<(), AppError> {
        let repo = HotelRepository::new(self.db);

        if !repo.update(id, params).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    pub async fn replace(&self, id: &str, params: HotelParams) -> Result<(), AppError> {
        let repo = HotelRepository::new(self.db);

        if !repo.replace(id, params).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let repo = HotelRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Hotel {} not found", id))
}
