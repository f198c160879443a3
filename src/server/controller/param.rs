use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::model::query::{ListQuery, DEFAULT_LIMIT};

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

/// `limit=0` asks for the default page size, not an empty page.
fn page_limit(limit: u64) -> u64 {
    match limit {
        0 => DEFAULT_LIMIT,
        limit => limit,
    }
}

/// Query parameters of every list operation.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Maximum number of documents to return (default: 50, also used for `0`)
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// Number of documents to skip (default: 0)
    #[serde(default)]
    pub skip: u64,
    /// Substring the document name must contain
    pub search: Option<String>,
}

impl ListParams {
    pub fn into_query(self) -> ListQuery {
        ListQuery {
            limit: page_limit(self.limit),
            skip: self.skip,
            search: self.search,
        }
    }
}

/// Query parameters of `GET /flightPaths`.
///
/// With both `from` and `to` the request is a flight search; with neither it lists
/// routes like any other collection.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FlightPathsParams {
    /// Key of the departure airport
    pub from: Option<String>,
    /// Key of the arrival airport
    pub to: Option<String>,
    /// Day of week to restrict the flight search to, `0` being Sunday
    #[serde(rename = "weekDay")]
    pub week_day: Option<i32>,
    /// Maximum number of results to return (default: 50, also used for `0`)
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// Number of results to skip (default: 0)
    #[serde(default)]
    pub skip: u64,
    /// Substring the airline must contain when listing routes
    pub search: Option<String>,
}

impl FlightPathsParams {
    /// Requested page size, with `0` meaning the default.
    pub fn limit(&self) -> u64 {
        page_limit(self.limit)
    }
}
