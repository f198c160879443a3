use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Airport::Table)
                    .if_not_exists()
                    .col(string(Airport::Id).primary_key())
                    .col(string(Airport::Airportname))
                    .col(string(Airport::City))
                    .col(string(Airport::Country))
                    .col(string_null(Airport::Faa))
                    .col(string_null(Airport::Icao))
                    .col(string(Airport::Tz))
                    .col(double_null(Airport::GeoLat))
                    .col(double_null(Airport::GeoLon))
                    .col(double_null(Airport::GeoAlt))
                    .col(string_null(Airport::GeoAccuracy))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_airport_faa")
                    .table(Airport::Table)
                    .col(Airport::Faa)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Airport::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Airport {
    Table,
    Id,
    Airportname,
    City,
    Country,
    Faa,
    Icao,
    Tz,
    GeoLat,
    GeoLon,
    GeoAlt,
    GeoAccuracy,
}
