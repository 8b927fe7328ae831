//! Time related utils.

use crate::Error;
use crate::Result;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<chrono::Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    chrono::Utc::now()
}

/// Format time into date: `20220301`
pub fn format_date(t: DateTime) -> String {
    t.format("%Y%m%d").to_string()
}

/// Format time into ISO8601: `20220313T072004Z`
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Parse time from RFC3339.
///
/// All input time SHOULD be in UTC; other offsets are converted.
pub fn parse_rfc3339(s: &str) -> Result<DateTime> {
    Ok(chrono::DateTime::parse_from_rfc3339(s)
        .map_err(|e| Error::unexpected(format!("parse '{s}' into rfc3339 failed")).with_source(e))?
        .with_timezone(&chrono::Utc))
}
