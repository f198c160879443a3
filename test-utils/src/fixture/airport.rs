//! Airport fixtures for creating in-memory test data.

use entity::airport;

/// Default test airport key.
pub const DEFAULT_ID: &str = "airport_1254";

/// Default test airport name.
pub const DEFAULT_NAME: &str = "Calais Dunkerque";

/// Creates an airport entity model with a full geolocation.
///
/// # Default Values
/// - id: `"airport_1254"`
/// - airportname: `"Calais Dunkerque"`, city: `"Calais"`, country: `"France"`
/// - faa: `"CQF"`, icao: `"LFAC"`, tz: `"Europe/Paris"`
/// - geo: lat `50.962097`, lon `1.954764`, alt `12.0`, no accuracy
pub fn entity() -> airport::Model {
    airport::Model {
        id: DEFAULT_ID.to_string(),
        airportname: DEFAULT_NAME.to_string(),
        city: "Calais".to_string(),
        country: "France".to_string(),
        faa: Some("CQF".to_string()),
        icao: Some("LFAC".to_string()),
        tz: "Europe/Paris".to_string(),
        geo_lat: Some(50.962097),
        geo_lon: Some(1.954764),
        geo_alt: Some(12.0),
        geo_accuracy: None,
    }
}

/// Creates an airport entity model without codes or geolocation.
pub fn entity_without_optionals() -> airport::Model {
    airport::Model {
        faa: None,
        icao: None,
        geo_lat: None,
        geo_lon: None,
        geo_alt: None,
        ..entity()
    }
}
