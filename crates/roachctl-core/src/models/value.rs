//! Query parameters and the closed value types used for result rows.

use rust_decimal::Decimal;
use serde::{
    ser::{SerializeMap, Serializer},
    Deserialize, Serialize,
};

use crate::error::{RoachError, Result};

/// Scalar value substituted for a query placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Param {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Param {
    /// Converts a JSON scalar into a parameter.
    ///
    /// Arrays, objects and integers outside the `i64` range are rejected.
    pub fn from_json(field: &str, value: serde_json::Value) -> Result<Self> {
        use serde_json::Value as Json;

        match value {
            Json::Null => Ok(Param::Null),
            Json::Bool(b) => Ok(Param::Bool(b)),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Param::Int(i))
                } else if n.is_u64() {
                    Err(RoachError::invalid_input(field)
                        .with_reason(format!("integer {n} does not fit in a signed 64-bit value")))
                } else {
                    n.as_f64().map(Param::Float).ok_or_else(|| {
                        RoachError::invalid_input(field)
                            .with_reason(format!("unsupported number {n}"))
                    })
                }
            }
            Json::String(s) => Ok(Param::Text(s)),
            Json::Array(_) | Json::Object(_) => Err(RoachError::invalid_input(field)
                .with_reason("only scalar values (null, boolean, number, string) can be substituted")),
        }
    }
}

/// A PostgreSQL `INTERVAL` as sent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Interval {
    pub months: i32,
    pub days: i32,
    pub microseconds: i64,
}

/// A `DECIMAL` value as returned by the server.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    /// Fits [`Decimal`] without loss
    Exact(Decimal),
    /// `NaN`, `Infinity`, `-Infinity`, or wider than [`Decimal`] can hold
    Approximate(f64),
}

/// Column value as decoded from the server, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Decimal(Numeric),
    Interval(Interval),
    Json(serde_json::Value),
    Array(Vec<RawValue>),
}

/// One fetched row: column names paired with decoded values, in select order.
pub type RawRow = Vec<(String, RawValue)>;

/// Normalized, serializable column value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Json(serde_json::Value),
    Array(Vec<Value>),
}

/// A normalized row. Serializes as a JSON object keeping column order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, column: impl Into<String>, value: Value) {
        self.columns.push((column.into(), value));
    }

    /// Value of the first column with the given name.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, value) in &self.columns {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
