//! Date and time columns rendered as ISO 8601 text.
//!
//! The server prints these types in its `ISO` date style (`2024-01-01
//! 10:00:00+00`); they are read back with jiff's parsers and printed in
//! RFC 3339 form. `infinity`, `-infinity` and anything jiff cannot represent
//! (BC dates, `24:00:00`) are left as the server printed them.

use jiff::{civil, Timestamp};

/// The temporal column types we render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalKind {
    Date,
    Time,
    Timestamp,
    TimestampTz,
}

impl TemporalKind {
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "DATE" => Some(TemporalKind::Date),
            "TIME" => Some(TemporalKind::Time),
            "TIMESTAMP" => Some(TemporalKind::Timestamp),
            "TIMESTAMPTZ" => Some(TemporalKind::TimestampTz),
            _ => None,
        }
    }
}

/// Re-renders a value printed by the server, or `None` to keep its text.
pub fn render(text: &str, kind: TemporalKind) -> Option<String> {
    let rendered = match kind {
        TemporalKind::Date => text.parse::<civil::Date>().ok()?.to_string(),
        TemporalKind::Time => text.parse::<civil::Time>().ok()?.to_string(),
        TemporalKind::Timestamp => text.parse::<civil::DateTime>().ok()?.to_string(),
        TemporalKind::TimestampTz => text.parse::<Timestamp>().ok()?.to_string(),
    };
    Some(rendered)
}
