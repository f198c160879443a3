use sea_orm::entity::prelude::*;

/// A flight path between two airports.
///
/// `airlineid` is not a foreign key; routes may reference airlines
/// that are not loaded.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "route")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub airline: Option<String>,
    pub airlineid: Option<String>,
    pub sourceairport: Option<String>,
    pub destinationairport: Option<String>,
    pub distance: Option<f64>,
    pub equipment: Option<String>,
    #[sea_orm(column_name = "type")]
    pub route_type: Option<String>,
    pub stops: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::route_schedule::Entity")]
    RouteSchedule,
}

impl Related<super::route_schedule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RouteSchedule.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
