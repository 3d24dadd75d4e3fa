//! Coercion of display strings into numbers and dates.
//!
//! Scraped cells are formatted for humans: `"$1,234.56"`, `"12.3%"`, or a
//! dash when the value is missing. Every function here falls back to the
//! zero value instead of failing, so one bad cell never aborts a whole
//! table. A blank cell and a genuine zero are indistinguishable afterwards.

use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an integer after dropping `$` and `,`. Returns 0 on failure.
pub fn parse_int(raw: &str) -> i64 {
    strip(raw, &['$', ',']).parse().unwrap_or(0)
}

/// Parses a float after dropping `$`, `,` and `%`. Returns 0.0 on failure.
pub fn parse_float(raw: &str) -> f64 {
    strip(raw, &['$', ',', '%'])
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parses a `YYYY-MM-DD` date. Returns the epoch date (1970-01-01) on failure.
pub fn parse_date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).unwrap_or_default()
}

fn strip(raw: &str, markers: &[char]) -> String {
    raw.trim().chars().filter(|c| !markers.contains(c)).collect()
}
