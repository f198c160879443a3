//! Hotel factory for creating test hotel entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::{json, Value};

/// Factory for creating test hotels with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let hotel = HotelFactory::new(&db)
///     .name("Medway Youth Hostel")
///     .extra(json!({ "city": "Gillingham", "vacancy": true }))
///     .build()
///     .await?;
/// ```
pub struct HotelFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    url: Option<String>,
    extra: Value,
}

impl<'a> HotelFactory<'a> {
    /// Creates a new HotelFactory with default values.
    ///
    /// Defaults:
    /// - id: `"hotel_{id}"`
    /// - name: `"Hotel {id}"`
    /// - url: `None`
    /// - extra: `{"city": "City {id}"}`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("hotel_{}", id),
            name: format!("Hotel {}", id),
            url: None,
            extra: json!({ "city": format!("City {}", id) }),
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

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Replaces the free-form fields stored alongside the hotel.
    pub fn extra(mut self, extra: Value) -> Self {
        self.extra = extra;
        self
    }

    /// Builds and inserts the hotel entity into the database.
    pub async fn build(self) -> Result<entity::hotel::Model, DbErr> {
        entity::hotel::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            url: ActiveValue::Set(self.url),
            extra: ActiveValue::Set(self.extra),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a hotel with default values.
pub async fn create_hotel(db: &DatabaseConnection) -> Result<entity::hotel::Model, DbErr> {
    HotelFactory::new(db).build().await
}
