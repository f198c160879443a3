//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{airline::AirlineFactory, airport::AirportFactory, route::RouteFactory};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a three letter code unique within the test run, e.g. `"ABQ"`.
pub fn next_code() -> String {
    let id = next_id();
    [id / 676, id / 26, id]
        .iter()
        .map(|n| (b'A' + (n % 26) as u8) as char)
        .collect()
}

/// Creates a route together with the airline it belongs to and both endpoint airports.
///
/// The route's `sourceairport`/`destinationairport` are set to the airports' FAA codes
/// and `airlineid` to the airline's key, so flight search can resolve the route.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((airline, from, to, route))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_route_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::airline::Model,
        entity::airport::Model,
        entity::airport::Model,
        entity::route::Model,
    ),
    DbErr,
> {
    let airline = AirlineFactory::new(db).build().await?;
    let from = AirportFactory::new(db).build().await?;
    let to = AirportFactory::new(db).build().await?;
    let route = RouteFactory::new(db)
        .airline(&airline)
        .between(&from, &to)
        .build()
        .await?;

    Ok((airline, from, to, route))
}
