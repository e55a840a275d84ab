//! Time utilities: parsing status-change timestamps, minute-of-day, formatting minutes.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Timelike};

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

pub const MINUTES_IN_DAY: i64 = 1440;

/// Parse a status-change timestamp.
///
/// RFC 3339 values keep the offset they were supplied with. Naive values
/// are taken as local wall time and carry a zero offset, so their
/// time-of-day is preserved unchanged.
pub fn parse_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc().fixed_offset())
}

/// Minutes elapsed since midnight in the timestamp's own offset.
pub fn minute_of_day(ts: &DateTime<FixedOffset>) -> i64 {
    (ts.hour() * 60 + ts.minute()) as i64
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}
