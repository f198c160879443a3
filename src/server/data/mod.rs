//! Database repository layer for airports, routes and hotels.
//!
//! Repositories use SeaORM entity models internally and return domain models, keeping the
//! storage layout (flattened geolocation, schedule child table, JSON free-form fields) out
//! of the business logic layer. Update, replace and delete report a missing record as
//! `Ok(false)` and leave the not-found decision to the service layer.

pub mod airport;
pub mod hotel;
pub mod route;

use sea_orm::{sea_query::Expr, ColumnTrait, Condition, DbBackend, IdenStatic};

/// Case-sensitive "`column` contains `needle`" condition.
///
/// SQLite's `LIKE` ignores ASCII case, so the match uses the backend's substring
/// position function instead.
pub(crate) fn contains<C: ColumnTrait>(backend: DbBackend, column: C, needle: &str) -> Condition {
    let position = match backend {
        DbBackend::Postgres => "strpos",
        _ => "instr",
    };

    Condition::all().add(Expr::cust_with_values(
        format!("{position}(\"{}\", ?) > 0", column.as_str()),
        [needle],
    ))
}

#[cfg(test)]
mod test;
