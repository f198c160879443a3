//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry validated
//! request data into the service layer; converting a DTO into its parameter type is
//! where schema validation (required fields, link checks) happens.

pub mod airport;
pub mod geolocation;
pub mod hotel;
pub mod link;
pub mod query;
pub mod route;

use crate::server::error::validation::ValidationError;

/// Unwraps a PATCH field of a required property.
///
/// # Returns
/// - `Ok(None)` - The field was absent and keeps its stored value
/// - `Ok(Some(value))` - The field was supplied
/// - `Err(ValidationError::Required)` - The field was explicitly set to `null`
pub(crate) fn required_patch<T>(
    field: &'static str,
    value: Option<Option<T>>,
) -> Result<Option<T>, ValidationError> {
    match value {
        Some(None) => Err(ValidationError::Required(field)),
        other => Ok(other.flatten()),
    }
}
