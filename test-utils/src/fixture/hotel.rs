//! Hotel fixtures for creating in-memory test data.

use entity::hotel;
use serde_json::json;

/// Default test hotel key.
pub const DEFAULT_ID: &str = "hotel_10025";

/// Creates a hotel entity model with a URL and free-form fields.
///
/// # Default Values
/// - id: `"hotel_10025"`
/// - name: `"Medway Youth Hostel"`
/// - url: `"http://www.yha.org.uk"`
/// - extra: `{"city": "Medway", "vacancy": true}`
pub fn entity() -> hotel::Model {
    hotel::Model {
        id: DEFAULT_ID.to_string(),
        name: "Medway Youth Hostel".to_string(),
        url: Some("http://www.yha.org.uk".to_string()),
        extra: json!({ "city": "Medway", "vacancy": true }),
    }
}
