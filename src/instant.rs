//! Parsing of UTC instants from the string forms the engine accepts:
//! RFC 3339 / ISO-8601 calendar dates and the mission-ops day-of-year form.

use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error;

/// Error for an unparseable UTC date string.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unparseable UTC date '{0}' (expected ISO-8601 or YYYY-DDDTHH:MM:SS[.ffffff])")]
pub struct UtcParseError(pub String);

/// Parse a UTC instant from either `YYYY-MM-DDTHH:MM:SS[.ffffff][Z|+HH:MM]`
/// or the day-of-year form `YYYY-DDDTHH:MM:SS[.ffffff]`. Naive inputs are
/// taken as UTC.
pub fn parse_utc(s: &str) -> Result<DateTime<Utc>, UtcParseError> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%jT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(DateTime::from_naive_utc_and_offset(naive, Utc));
        }
    }
    Err(UtcParseError(s.to_string()))
}

/// Render an instant in the ISO-8601 form used throughout the CLI output.
pub fn format_utc(instant: &DateTime<Utc>) -> String {
    instant.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}
