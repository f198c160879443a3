use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "airport")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub airportname: String,
    pub city: String,
    pub country: String,
    pub faa: Option<String>,
    pub icao: Option<String>,
    pub tz: String,
    pub geo_lat: Option<f64>,
    pub geo_lon: Option<f64>,
    pub geo_alt: Option<f64>,
    pub geo_accuracy: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
