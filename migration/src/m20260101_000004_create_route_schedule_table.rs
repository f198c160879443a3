use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000003_create_route_table::Route;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RouteSchedule::Table)
                    .if_not_exists()
                    .col(pk_auto(RouteSchedule::Id))
                    .col(string(RouteSchedule::RouteId))
                    .col(integer(RouteSchedule::Position))
                    .col(integer_null(RouteSchedule::Day))
                    .col(string_null(RouteSchedule::Flight))
                    .col(string_null(RouteSchedule::Utc))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_route_schedule_route_id")
                            .from(RouteSchedule::Table, RouteSchedule::RouteId)
                            .to(Route::Table, Route::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_route_schedule_route_id")
                    .table(RouteSchedule::Table)
                    .col(RouteSchedule::RouteId)
                    .col(RouteSchedule::Position)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RouteSchedule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RouteSchedule {
    Table,
    Id,
    RouteId,
    Position,
    Day,
    Flight,
    Utc,
}
