use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Airline::Table)
                    .if_not_exists()
                    .col(string(Airline::Id).primary_key())
                    .col(string(Airline::Name))
                    .col(string_null(Airline::Iata))
                    .col(string_null(Airline::Icao))
                    .col(string_null(Airline::Callsign))
                    .col(string_null(Airline::Country))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Airline::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Airline {
    Table,
    Id,
    Name,
    Iata,
    Icao,
    Callsign,
    Country,
}
