use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Round an hour figure to two decimals.
pub fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

/// First and last representable instants of a civil day, both inclusive.
pub fn day_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = date.and_time(NaiveTime::MIN);
    let end = date
        .and_hms_nano_opt(23, 59, 59, 999_999_999)
        .unwrap_or(start);
    (start, end)
}

/// Parse a timestamp as written by the caller.
///
/// Accepts RFC 3339 (the offset is dropped, keeping the wall-clock reading)
/// and plain ISO 8601 date-times without an offset.
pub fn parse_civil_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_local());
    }
    raw.parse::<NaiveDateTime>().ok()
}

/// ISO 8601 rendering of a civil timestamp, the same text serde writes.
pub fn format_civil_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}
