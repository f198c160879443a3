use crate::server::{
    data::hotel::HotelRepository,
    model::{
        hotel::{HotelParams, UpdateHotelParams},
        link::Link,
        query::ListQuery,
    },
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod replace;
mod update;

fn extra(value: Value) -> BTreeMap<String, Value> {
    serde_json::from_value(value).unwrap()
}
