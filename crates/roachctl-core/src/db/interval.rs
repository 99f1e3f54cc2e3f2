//! `INTERVAL` values in the server's `postgres` interval style.
//!
//! The text form is a sequence of `<n> year[s]`, `<n> mon[s]` and
//! `<n> day[s]` fields followed by an optional `[+-]H:MM:SS[.ffffff]` clock,
//! each field carrying its own sign: `1 year 2 mons`, `-1 days +23:00:00`,
//! `-00:00:01.5`.

use crate::models::Interval;

const MICROS_PER_SECOND: i64 = 1_000_000;

/// Parses an interval printed by the server, or `None` if `text` is not in
/// the `postgres` style.
pub fn parse(text: &str) -> Option<Interval> {
    let mut interval = Interval::default();
    let mut tokens = text.split_whitespace();
    let mut seen = false;

    while let Some(token) = tokens.next() {
        seen = true;
        if token.contains(':') {
            interval.microseconds = interval.microseconds.checked_add(parse_clock(token)?)?;
            continue;
        }

        let amount: i32 = token.parse().ok()?;
        match tokens.next()? {
            "year" | "years" => {
                interval.months = interval.months.checked_add(amount.checked_mul(12)?)?;
            }
            "mon" | "mons" => interval.months = interval.months.checked_add(amount)?,
            "day" | "days" => interval.days = interval.days.checked_add(amount)?,
            _ => return None,
        }
    }

    seen.then_some(interval)
}

fn parse_clock(token: &str) -> Option<i64> {
    let (negative, body) = match token.strip_prefix('-') {
        Some(body) => (true, body),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };

    let mut parts = body.splitn(3, ':');
    let hours: i64 = parts.next()?.parse().ok()?;
    let minutes: i64 = parts.next()?.parse().ok()?;
    let seconds = parts.next().unwrap_or("0");
    let (whole, fraction) = seconds.split_once('.').unwrap_or((seconds, ""));
    let whole: i64 = whole.parse().ok()?;

    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits = &fraction[..fraction.len().min(6)];
    let micros: i64 = if digits.is_empty() {
        0
    } else {
        format!("{digits:0<6}").parse().ok()?
    };

    let total = hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(whole)?
        .checked_mul(MICROS_PER_SECOND)?
        .checked_add(micros)?;
    Some(if negative { -total } else { total })
}
