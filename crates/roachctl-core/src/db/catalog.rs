//! Decoding of the `SHOW DATABASES` listing.
//!
//! CockroachDB returns one row per database with the columns
//! `database_name`, `owner`, `primary_region`, `secondary_region`,
//! `regions` and `survival_goal`. Older releases return fewer columns, so
//! everything besides the name is read leniently.

use sqlx::{postgres::PgRow, Decode, Postgres, Row, Type};

use crate::{
    error::{DriverResultExt, Result},
    models::DatabaseDescriptor,
};

/// Builds a descriptor for an existing database from one listing row.
///
/// # Errors
///
/// Returns `RoachError::CatalogRead` when the name column is missing or a
/// present column has an unexpected type.
pub fn descriptor_from_row(row: &PgRow) -> Result<DatabaseDescriptor> {
    let name: String = row.try_get("database_name").catalog_context()?;

    Ok(DatabaseDescriptor {
        name,
        exists: true,
        owner: optional_column(row, "owner")?,
        primary_region: optional_column(row, "primary_region")?,
        regions: optional_column::<Vec<String>>(row, "regions")?.unwrap_or_default(),
        survival_goal: optional_column(row, "survival_goal")?,
    })
}

/// Reads a nullable column that may not exist at all.
fn optional_column<'r, T>(row: &'r PgRow, column: &str) -> Result<Option<T>>
where
    T: Decode<'r, Postgres> + Type<Postgres>,
{
    match row.try_get::<Option<T>, _>(column) {
        Err(sqlx::Error::ColumnNotFound(_)) => Ok(None),
        other => other.catalog_context(),
    }
}
