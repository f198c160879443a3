//! Domain models for hotel operations.
//!
//! Hotels carry free-form fields next to `name` and `url`. They are kept as a JSON object
//! in storage and flattened back into the document on the wire.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::{
    model::hotel::{HotelBodyDto, HotelDto, PatchHotelDto},
    server::{
        error::validation::ValidationError,
        model::{link::Link, required_patch},
    },
};

/// Keys that are stored in dedicated columns and never in the free-form fields.
const RESERVED_FIELDS: [&str; 3] = ["id", "name", "url"];

/// Hotel document.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub url: Option<String>,
    pub extra: BTreeMap<String, Value>,
}

impl Hotel {
    pub fn from_entity(entity: entity::hotel::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            url: entity.url,
            extra: extra_from_json(entity.extra),
        }
    }

    pub fn into_dto(self) -> HotelDto {
        HotelDto {
            id: self.id,
            name: self.name,
            url: self.url,
            extra: self.extra,
        }
    }
}

/// Complete hotel document used for creation and full replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelParams {
    pub name: String,
    pub url: Option<Link>,
    pub extra: BTreeMap<String, Value>,
}

impl TryFrom<HotelBodyDto> for HotelParams {
    type Error = ValidationError;

    fn try_from(dto: HotelBodyDto) -> Result<Self, Self::Error> {
        Ok(Self {
            name: dto.name,
            url: dto.url.map(parse_url).transpose()?,
            extra: strip_reserved(dto.extra),
        })
    }
}

/// Parameters for a partial hotel update.
///
/// Supplied free-form fields are merged into the stored ones; a free-form field set to
/// `null` is stored as `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateHotelParams {
    pub name: Option<String>,
    pub url: Option<Option<Link>>,
    pub extra: BTreeMap<String, Value>,
}

impl TryFrom<PatchHotelDto> for UpdateHotelParams {
    type Error = ValidationError;

    fn try_from(dto: PatchHotelDto) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required_patch("name", dto.name)?,
            url: dto
                .url
                .map(|url| url.map(parse_url).transpose())
                .transpose()?,
            extra: strip_reserved(dto.extra),
        })
    }
}

fn parse_url(url: String) -> Result<Link, ValidationError> {
    Link::parse(url).map_err(|_| ValidationError::InvalidLink("url"))
}

fn strip_reserved(mut extra: BTreeMap<String, Value>) -> BTreeMap<String, Value> {
    for key in RESERVED_FIELDS {
        extra.remove(key);
    }
    extra
}

/// Reads stored free-form fields. Anything but a JSON object yields no fields.
pub fn extra_from_json(value: Value) -> BTreeMap<String, Value> {
    match value {
        Value::Object(map) => map.into_iter().collect(),
        _ => BTreeMap::new(),
    }
}

pub fn extra_to_json(extra: BTreeMap<String, Value>) -> Value {
    Value::Object(extra.into_iter().collect::<Map<String, Value>>())
}
