//! Date and time normalization helpers

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Normalize a `YYYY-MM-DD` birth-date string to UTC midnight
///
/// Birth dates are stored timezone-free; pinning them to midnight UTC keeps
/// comparisons stable regardless of the server's local zone.
///
/// # Returns
/// * `Some(DateTime<Utc>)` - Parsed date at 00:00:00 UTC
/// * `None` - The string is not a valid calendar date
pub fn birth_date_to_utc_midnight(date: &str) -> Option<DateTime<Utc>> {
    let naive = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
    let midnight = naive.and_hms_opt(0, 0, 0)?;
    Utc.from_utc_datetime(&midnight).into()
}
