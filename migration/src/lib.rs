pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_airport_table;
mod m20260101_000002_create_airline_table;
mod m20260101_000003_create_route_table;
mod m20260101_000004_create_route_schedule_table;
mod m20260101_000005_create_hotel_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_airport_table::Migration),
            Box::new(m20260101_000002_create_airline_table::Migration),
            Box::new(m20260101_000003_create_route_table::Migration),
            Box::new(m20260101_000004_create_route_schedule_table::Migration),
            Box::new(m20260101_000005_create_hotel_table::Migration),
        ]
    }
}
