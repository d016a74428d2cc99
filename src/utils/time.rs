//! Timestamp parsing and formatting
//!
//! Stored instants use RFC 3339 with millisecond precision and a `Z` suffix
//! (`2024-01-01T00:00:00.000Z`). Client-supplied dates arrive in whatever
//! shape the client had on hand, so parsing accepts the common ones; naive
//! inputs are taken as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Current instant as a canonical ISO-8601 string
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a client-supplied date string
///
/// Tries RFC 3339 first, then naive datetime (`T` or space separated), then
/// a bare date taken as UTC midnight. Returns `None` when nothing matches.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(ndt.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

/// Normalize a client-supplied date to the canonical ISO-8601 form
///
/// Unparseable input is returned verbatim: date validity is not part of the
/// creation contract, and the raw string at least preserves what the client
/// sent.
pub fn to_iso8601(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.to_rfc3339_opts(SecondsFormat::Millis, true),
        None => raw.to_string(),
    }
}
