//! Route fixtures for creating in-memory test data.

use entity::{route, route_schedule};

/// Default test route key.
pub const DEFAULT_ID: &str = "route_10000";

/// Creates a route entity model from TLV to MRS.
pub fn entity() -> route::Model {
    route::Model {
        id: DEFAULT_ID.to_string(),
        airline: Some("AF".to_string()),
        airlineid: Some("airline_137".to_string()),
        sourceairport: Some("TLV".to_string()),
        destinationairport: Some("MRS".to_string()),
        distance: Some(2881.617376098415),
        equipment: Some("320".to_string()),
        route_type: Some("route".to_string()),
        stops: Some(0),
    }
}

/// Creates a schedule entry model for the default route.
///
/// # Arguments
/// - `position` - Index of the entry within the schedule
/// - `day` - Day of week
/// - `flight` - Flight designator
pub fn schedule_entity(position: i32, day: i32, flight: &str) -> route_schedule::Model {
    route_schedule::Model {
        id: position + 1,
        route_id: DEFAULT_ID.to_string(),
        position,
        day: Some(day),
        flight: Some(flight.to_string()),
        utc: Some("10:13:00".to_string()),
    }
}
