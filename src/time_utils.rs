// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time parsing and formatting.
//!
//! Activity timestamps arrive as ISO 8601 strings whose precision varies by
//! source (full RFC 3339, naive date-times, bare dates). Parsing is tolerant
//! here and strict nowhere else: callers treat `None` as "unparseable" and
//! apply their own fallback ordering or exclusion.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Naive date-time layouts accepted after RFC 3339 parsing fails.
/// Values without an offset are taken as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse an activity timestamp, tolerating the format drift between sources.
///
/// Returns `None` for anything unparseable; never panics or errors.
pub fn parse_start_time(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    // Some sources emit a trailing Z on minute-precision values, which
    // RFC 3339 rejects (seconds are mandatory there).
    let naive = raw.strip_suffix('Z').unwrap_or(raw);

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(naive, format) {
            return Some(Utc.from_utc_datetime(&dt));
        }
    }

    // Bare dates count as midnight UTC.
    if let Ok(date) = NaiveDate::parse_from_str(naive, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }

    None
}

/// Format a timestamp as the `YYYY-MM-DD` stamp used in export filenames.
pub fn date_stamp(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let dt = parse_start_time("2025-03-01T10:30:00+08:00").unwrap();
        assert_eq!(dt.hour(), 2); // converted to UTC
    }

    #[test]
    fn test_parse_rfc3339_zulu() {
        assert!(parse_start_time("2025-03-01T10:30:00Z").is_some());
    }

    #[test]
    fn test_parse_minute_precision_zulu() {
        // RFC 3339 requires seconds; sources do not always send them.
        assert!(parse_start_time("2025-01-01T00:00Z").is_some());
    }

    #[test]
    fn test_parse_naive_datetime() {
        assert!(parse_start_time("2025-03-01T10:30:00").is_some());
        assert!(parse_start_time("2025-03-01T10:30:00.123").is_some());
    }

    #[test]
    fn test_parse_bare_date_is_midnight() {
        let dt = parse_start_time("2025-03-01").unwrap();
        assert_eq!(dt.hour(), 0);
        assert_eq!(dt.minute(), 0);
    }

    #[test]
    fn test_garbage_is_none() {
        assert!(parse_start_time("").is_none());
        assert!(parse_start_time("not-a-date").is_none());
        assert!(parse_start_time("2025/03/01").is_none());
    }

    #[test]
    fn test_date_stamp() {
        let dt = parse_start_time("2025-03-01T10:30:00Z").unwrap();
        assert_eq!(date_stamp(dt), "2025-03-01");
    }
}
