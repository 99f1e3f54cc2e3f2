//! Decoding of result set rows.
//!
//! Statements run over the simple query protocol, so every value arrives in
//! its text form. Columns are classified by server type name: numbers,
//! booleans, JSON, decimals, intervals and date/time values are parsed into
//! their [`RawValue`] kind, arrays are split by the driver and parsed element
//! by element, and every other type (enums, `INET`, `UUID`, `BYTEA`, ...)
//! keeps the text the server printed. A value that does not parse as its
//! kind also keeps its text.

use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::{postgres::PgRow, Column, Row, TypeInfo, ValueRef};

use super::{
    interval,
    temporal::{self, TemporalKind},
};
use crate::{
    error::{DriverResultExt, Result, RoachError},
    models::{Numeric, RawRow, RawValue},
};

/// How the text of one column (or array element) is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Bool,
    Int,
    Float,
    Numeric,
    Interval,
    Json,
    Temporal(TemporalKind),
    Text,
}

impl ColumnKind {
    fn of(type_name: &str) -> Self {
        match type_name {
            "BOOL" => ColumnKind::Bool,
            "INT2" | "INT4" | "INT8" | "OID" => ColumnKind::Int,
            "FLOAT4" | "FLOAT8" => ColumnKind::Float,
            "NUMERIC" => ColumnKind::Numeric,
            "INTERVAL" => ColumnKind::Interval,
            "JSON" | "JSONB" => ColumnKind::Json,
            other => TemporalKind::from_type_name(other).map_or(ColumnKind::Text, ColumnKind::Temporal),
        }
    }

    fn parse(self, text: &str) -> RawValue {
        let parsed = match self {
            ColumnKind::Bool => parse_bool(text).map(RawValue::Bool),
            ColumnKind::Int => text.parse().ok().map(RawValue::Int),
            ColumnKind::Float => text.parse().ok().map(RawValue::Float),
            ColumnKind::Numeric => parse_numeric(text).map(RawValue::Decimal),
            ColumnKind::Interval => interval::parse(text).map(RawValue::Interval),
            ColumnKind::Json => serde_json::from_str(text).ok().map(RawValue::Json),
            ColumnKind::Temporal(kind) => temporal::render(text, kind).map(RawValue::Text),
            ColumnKind::Text => None,
        };
        parsed.unwrap_or_else(|| RawValue::Text(text.to_string()))
    }
}

/// Decodes every column of `row`, preserving column order.
///
/// # Errors
///
/// Returns `RoachError::RowFetch` naming the column when its value cannot be
/// read from the row.
pub fn decode_row(row: &PgRow) -> Result<RawRow> {
    row.columns()
        .iter()
        .map(|column| {
            let value = decode_column(row, column.ordinal(), column.type_info().name())
                .map_err(|e| match e {
                    RoachError::RowFetch { message } => RoachError::RowFetch {
                        message: format!("column \"{}\": {message}", column.name()),
                    },
                    other => other,
                })?;
            Ok((column.name().to_string(), value))
        })
        .collect()
}

fn decode_column(row: &PgRow, index: usize, type_name: &str) -> Result<RawValue> {
    let raw = row.try_get_raw(index).fetch_context()?;
    if raw.is_null() {
        return Ok(RawValue::Null);
    }
    let text = raw.as_str().map_err(|e| RoachError::RowFetch {
        message: e.to_string(),
    })?;

    let Some(element_type) = type_name.strip_suffix("[]") else {
        return Ok(ColumnKind::of(type_name).parse(text));
    };

    // Multi-dimensional arrays do not split into a flat list
    let value = match row.try_get_unchecked::<Vec<Option<String>>, _>(index) {
        Ok(items) => {
            let kind = ColumnKind::of(element_type);
            RawValue::Array(
                items
                    .into_iter()
                    .map(|item| item.map_or(RawValue::Null, |text| kind.parse(&text)))
                    .collect(),
            )
        }
        Err(_) => RawValue::Text(text.to_string()),
    };
    Ok(value)
}

fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "t" | "true" => Some(true),
        "f" | "false" => Some(false),
        _ => None,
    }
}

/// Keeps the exact decimal when it fits, else the nearest `f64`.
///
/// `NaN`, `Infinity`, `-Infinity`, exponent forms (`1E+40`) and values with
/// more than 28 significant digits end up approximate.
fn parse_numeric(text: &str) -> Option<Numeric> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map(Numeric::Exact)
        .ok()
        .or_else(|| text.parse().ok().map(Numeric::Approximate))
}
