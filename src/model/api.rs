use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub message: String,
}

/// Deserializes a field that is present in the payload into `Some`.
///
/// Combined with `#[serde(default)]` on an `Option<Option<T>>` field this distinguishes
/// an absent field (`None`) from an explicit `null` (`Some(None)`), which PATCH bodies
/// need to clear optional values.
pub fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
