//! Normalization of decoded column values into serializable values.
//!
//! Decimals become floats and intervals become their canonical string form;
//! every other kind passes through unchanged.

use rust_decimal::prelude::ToPrimitive;

use crate::models::{Interval, Numeric, RawRow, RawValue, Row, Value};

const MICROS_PER_DAY: i128 = 86_400_000_000;
const MICROS_PER_SECOND: i128 = 1_000_000;

/// Resolves a decoded value into its serializable form.
pub fn normalize(raw: RawValue) -> Value {
    match raw {
        RawValue::Null => Value::Null,
        RawValue::Bool(b) => Value::Bool(b),
        RawValue::Int(i) => Value::Int(i),
        RawValue::Float(f) => Value::Float(f),
        RawValue::Text(s) => Value::Text(s),
        RawValue::Decimal(Numeric::Exact(d)) => Value::Float(d.to_f64().unwrap_or(f64::NAN)),
        RawValue::Decimal(Numeric::Approximate(f)) => Value::Float(f),
        RawValue::Interval(interval) => Value::Text(interval_to_string(&interval)),
        RawValue::Json(json) => Value::Json(json),
        RawValue::Array(items) => Value::Array(items.into_iter().map(normalize).collect()),
    }
}

pub fn normalize_row(raw: RawRow) -> Row {
    raw.into_iter()
        .map(|(column, value)| (column, normalize(value)))
        .collect()
}

/// Canonical interval text: `[-]D day[s], H:MM:SS[.ffffff]`.
///
/// Months are folded into days (a year of months counts 365 days, any
/// remaining month 30 days). The day count carries the sign; the time of day
/// is always non-negative, so minus one hour reads `-1 day, 23:00:00`.
///
/// # Examples
///
/// ```rust
/// use roachctl_core::{models::Interval, normalize::interval_to_string};
///
/// let interval = Interval { months: 0, days: 1, microseconds: 7_200_000_000 };
/// assert_eq!(interval_to_string(&interval), "1 day, 2:00:00");
/// ```
pub fn interval_to_string(interval: &Interval) -> String {
    let months = i128::from(interval.months);
    let days = (months / 12) * 365 + (months % 12) * 30 + i128::from(interval.days);
    let total = days * MICROS_PER_DAY + i128::from(interval.microseconds);

    let days = total.div_euclid(MICROS_PER_DAY);
    let remainder = total.rem_euclid(MICROS_PER_DAY);
    let seconds = remainder / MICROS_PER_SECOND;
    let micros = remainder % MICROS_PER_SECOND;

    let mut out = String::new();
    if days != 0 {
        let plural = if days.abs() == 1 { "" } else { "s" };
        out.push_str(&format!("{days} day{plural}, "));
    }
    out.push_str(&format!(
        "{}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    ));
    if micros != 0 {
        out.push_str(&format!(".{micros:06}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rust_decimal::Decimal;

    use super::*;

    fn interval(months: i32, days: i32, microseconds: i64) -> Interval {
        Interval {
            months,
            days,
            microseconds,
        }
    }

    #[test]
    fn test_decimal_becomes_float() {
        let raw = RawValue::Decimal(Numeric::Exact(Decimal::from_str("12.50").unwrap()));
        assert_eq!(normalize(raw), Value::Float(12.5));
    }

    #[test]
    fn test_wide_and_special_decimals_become_floats() {
        assert_eq!(
            normalize(RawValue::Decimal(Numeric::Approximate(1e40))),
            Value::Float(1e40)
        );
        assert!(matches!(
            normalize(RawValue::Decimal(Numeric::Approximate(f64::NAN))),
            Value::Float(f) if f.is_nan()
        ));
    }

    #[test]
    fn test_interval_becomes_canonical_string() {
        let raw = RawValue::Interval(interval(0, 1, 2 * 3_600_000_000));
        assert_eq!(normalize(raw), Value::Text("1 day, 2:00:00".to_string()));
    }

    #[test]
    fn test_interval_formats() {
        assert_eq!(interval_to_string(&interval(0, 0, 0)), "0:00:00");
        assert_eq!(interval_to_string(&interval(0, 0, 1_500_000)), "0:00:01.500000");
        assert_eq!(interval_to_string(&interval(0, 3, 61_000_000)), "3 days, 0:01:01");
        assert_eq!(interval_to_string(&interval(0, 0, -3_600_000_000)), "-1 day, 23:00:00");
        assert_eq!(interval_to_string(&interval(0, -2, 0)), "-2 days, 0:00:00");
        assert_eq!(interval_to_string(&interval(1, 0, 0)), "30 days, 0:00:00");
        assert_eq!(interval_to_string(&interval(14, 0, 0)), "425 days, 0:00:00");
    }

    #[test]
    fn test_other_values_pass_through() {
        assert_eq!(normalize(RawValue::Int(7)), Value::Int(7));
        assert_eq!(normalize(RawValue::Null), Value::Null);
        assert_eq!(
            normalize(RawValue::Text("abc".to_string())),
            Value::Text("abc".to_string())
        );
        assert_eq!(normalize(RawValue::Bool(false)), Value::Bool(false));
    }

    #[test]
    fn test_arrays_are_normalized_elementwise() {
        let raw = RawValue::Array(vec![
            RawValue::Decimal(Numeric::Exact(Decimal::from_str("0.25").unwrap())),
            RawValue::Null,
        ]);
        assert_eq!(
            normalize(raw),
            Value::Array(vec![Value::Float(0.25), Value::Null])
        );
    }

    #[test]
    fn test_normalize_row_keeps_order() {
        let row = normalize_row(vec![
            ("price".to_string(), RawValue::Decimal(Numeric::Exact(Decimal::from_str("9.50").unwrap()))),
            ("ttl".to_string(), RawValue::Interval(interval(0, 0, 90_000_000))),
        ]);

        assert_eq!(row.column_names().collect::<Vec<_>>(), ["price", "ttl"]);
        assert_eq!(row.get("price"), Some(&Value::Float(9.5)));
        assert_eq!(row.get("ttl"), Some(&Value::Text("0:01:30".to_string())));
    }
}
