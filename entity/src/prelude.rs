pub use super::airline::Entity as Airline;
pub use super::airport::Entity as Airport;
pub use super::hotel::Entity as Hotel;
pub use super::route::Entity as Route;
pub use super::route_schedule::Entity as RouteSchedule;
