//! Display formatting for optional API fields.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, FixedOffset, NaiveDate};

/// Placeholder shown for absent values.
pub const EMPTY: &str = "—";

/// Text for an optional string, with a placeholder for missing or blank values.
#[must_use]
pub fn opt_text(value: Option<&str>) -> String {
    value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(EMPTY).to_owned()
}

/// Text for an optional count.
#[must_use]
pub fn opt_count(value: Option<u32>) -> String {
    value.map_or_else(|| EMPTY.to_owned(), |n| n.to_string())
}

fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value).ok()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    parse_timestamp(value)
        .map(|ts| ts.date_naive())
        .or_else(|| NaiveDate::parse_from_str(value, "%Y-%m-%d").ok())
}

fn zone_label(offset: FixedOffset) -> String {
    if offset.local_minus_utc() == 0 { "UTC".to_owned() } else { offset.to_string() }
}

/// Calendar date of an RFC 3339 timestamp, in the timestamp's own offset.
///
/// Values that are not timestamps are shown as sent.
#[must_use]
pub fn date(value: Option<&str>) -> String {
    let Some(v) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return EMPTY.to_owned();
    };
    parse_date(v).map_or_else(|| v.to_owned(), |d| d.format("%Y-%m-%d").to_string())
}

/// Date and minute of an RFC 3339 timestamp with its zone
/// (`2024-06-01 08:30 UTC`, `2024-06-01 08:00 +05:30`).
#[must_use]
pub fn date_time(value: Option<&str>) -> String {
    let Some(v) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return EMPTY.to_owned();
    };
    match parse_timestamp(v) {
        Some(ts) => format!("{} {}", ts.format("%Y-%m-%d %H:%M"), zone_label(*ts.offset())),
        None => date(Some(v)),
    }
}

/// Value for a `<input type="date">`; empty unless the value is a date.
#[must_use]
pub fn date_input(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .and_then(parse_date)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Driver rating out of five.
#[must_use]
pub fn rating(value: Option<f64>) -> String {
    value.map_or_else(|| EMPTY.to_owned(), |r| format!("{r:.1} / 5"))
}

/// Star string for a 1..=5 review score; out-of-range scores are clamped.
#[must_use]
pub fn stars(score: u8) -> String {
    let filled = usize::from(score.clamp(1, 5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
