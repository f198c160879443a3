//! Airline factory for creating test airline entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test airlines with customizable fields.
pub struct AirlineFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    iata: Option<String>,
}

impl<'a> AirlineFactory<'a> {
    /// Creates a new AirlineFactory with default values.
    ///
    /// Defaults:
    /// - id: `"airline_{id}"`
    /// - name: `"Airline {id}"`
    /// - iata: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("airline_{}", id),
            name: format!("Airline {}", id),
            iata: None,
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

    pub fn iata(mut self, iata: impl Into<String>) -> Self {
        self.iata = Some(iata.into());
        self
    }

    /// Builds and inserts the airline entity into the database.
    pub async fn build(self) -> Result<entity::airline::Model, DbErr> {
        entity::airline::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            iata: ActiveValue::Set(self.iata),
            icao: ActiveValue::Set(None),
            callsign: ActiveValue::Set(None),
            country: ActiveValue::Set(Some("United States".to_string())),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an airline with default values.
pub async fn create_airline(db: &DatabaseConnection) -> Result<entity::airline::Model, DbErr> {
    AirlineFactory::new(db).build().await
}
