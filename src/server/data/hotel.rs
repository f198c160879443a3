use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait,
};

use crate::server::data::contains;
use crate::server::model::{
    hotel::{extra_from_json, extra_to_json, Hotel, HotelParams, UpdateHotelParams},
    link::Link,
    query::ListQuery,
};

pub struct HotelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HotelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of hotels ordered by key, optionally filtered by name.
    pub async fn get_all(&self, query: &ListQuery) -> Result<Vec<Hotel>, DbErr> {
        let entities = entity::prelude::Hotel::find()
            .apply_if(query.search(), |select, search| {
                let backend = self.db.get_database_backend();
                select.filter(contains(backend, entity::hotel::Column::Name, search))
            })
            .order_by_asc(entity::hotel::Column::Id)
            .offset(query.skip)
            .limit(query.limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Hotel::from_entity).collect())
    }

    /// Gets a hotel by key, `None` when it does not exist.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Hotel>, DbErr> {
        let entity = entity::prelude::Hotel::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Hotel::from_entity))
    }

    /// Inserts a new hotel under the given key.
    pub async fn create(&self, id: String, params: HotelParams) -> Result<Hotel, DbErr> {
        let entity = entity::hotel::ActiveModel {
            id: ActiveValue::Set(id),
            name: ActiveValue::Set(params.name),
            url: ActiveValue::Set(params.url.map(Link::into_inner)),
            extra: ActiveValue::Set(extra_to_json(params.extra)),
        }
        .insert(self.db)
        .await?;

        Ok(Hotel::from_entity(entity))
    }

    /// Applies a partial update. Supplied free-form fields are merged into the stored ones.
    ///
    /// Returns `Ok(false)` when no hotel has that key.
    pub async fn update(&self, id: &str, params: UpdateHotelParams) -> Result<bool, DbErr> {
        let Some(hotel) = entity::prelude::Hotel::find_by_id(id).one(self.db).await? else {
            return Ok(false);
        };

        let mut extra = extra_from_json(hotel.extra.clone());
        let merge_extra = !params.extra.is_empty();
        extra.extend(params.extra);

        let mut active_model: entity::hotel::ActiveModel = hotel.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(url) = params.url {
            active_model.url = ActiveValue::Set(url.map(Link::into_inner));
        }
        if merge_extra {
            active_model.extra = ActiveValue::Set(extra_to_json(extra));
        }

        if active_model.is_changed() {
            active_model.update(self.db).await?;
        }

        Ok(true)
    }

    /// Overwrites an existing hotel. Free-form fields not in `params` are dropped.
    ///
    /// Returns `Ok(false)` when no hotel has that key.
    pub async fn replace(&self, id: &str, params: HotelParams) -> Result<bool, DbErr> {
        let Some(hotel) = entity::prelude::Hotel::find_by_id(id).one(self.db).await? else {
            return Ok(false);
        };

        let mut active_model: entity::hotel::ActiveModel = hotel.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.url = ActiveValue::Set(params.url.map(Link::into_inner));
        active_model.extra = ActiveValue::Set(extra_to_json(params.extra));
        active_model.update(self.db).await?;

        Ok(true)
    }

    /// Deletes a hotel, returning whether it existed.
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Hotel::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
