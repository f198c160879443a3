use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Route::Table)
                    .if_not_exists()
                    .col(string(Route::Id).primary_key())
                    .col(string_null(Route::Airline))
                    .col(string_null(Route::Airlineid))
                    .col(string_null(Route::Sourceairport))
                    .col(string_null(Route::Destinationairport))
                    .col(double_null(Route::Distance))
                    .col(string_null(Route::Equipment))
                    .col(string_null(Route::Type))
                    .col(integer_null(Route::Stops))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_route_source_destination")
                    .table(Route::Table)
                    .col(Route::Sourceairport)
                    .col(Route::Destinationairport)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Route::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Route {
    Table,
    Id,
    Airline,
    Airlineid,
    Sourceairport,
    Destinationairport,
    Distance,
    Equipment,
    Type,
    Stops,
}
