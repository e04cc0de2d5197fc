//! ## Summary
//! Compact date-time handling for repaired calendars.
//!
//! Upstream feeds write DTSTART/DTEND in a surprising variety of shapes
//! (`2025-07-28T12:00:00`, `20250728`, `20250728T120000`). [`normalize`]
//! squeezes them into the compact RFC 5545 form and [`parse`] reads that
//! form back as an absolute UTC instant.
//!
//! Floating and date-only values are treated as UTC. There is no time zone
//! database behind this module.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::{RfcError, RfcResult};

/// Canonical UTC date-time format (`YYYYMMDDTHHMMSSZ`).
pub const UTC_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Date-time format without the UTC marker.
pub const FLOATING_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Date-only format.
pub const DATE_FORMAT: &str = "%Y%m%d";

const COMPACT_DATE_TIME_LEN: usize = 15;
const COMPACT_DATE_LEN: usize = 8;

/// ## Summary
/// Normalizes a loosely formatted date-time into compact UTC form.
///
/// Spaces, hyphens and colons are removed. A 15 character result without a
/// trailing `Z` gets one appended; an 8 character date gets `T000000Z`.
/// Anything else is returned as stripped, even when it is not a valid
/// date-time.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let mut compact: String = raw
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | ':'))
        .collect();

    match compact.len() {
        COMPACT_DATE_TIME_LEN if !compact.ends_with('Z') => compact.push('Z'),
        COMPACT_DATE_LEN => compact.push_str("T000000Z"),
        _ => {}
    }

    compact
}

/// ## Summary
/// Parses a compact date-time into a UTC instant.
///
/// Tries, in order, `YYYYMMDDTHHMMSSZ`, `YYYYMMDDTHHMMSS` and `YYYYMMDD`.
/// Values without a UTC marker are read as UTC; a bare date is midnight.
///
/// ## Errors
///
/// Returns [`RfcError::InvalidDateTime`] if none of the formats match.
pub fn parse(value: &str) -> RfcResult<DateTime<Utc>> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, UTC_FORMAT) {
        return Ok(dt.and_utc());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(value, FLOATING_FORMAT) {
        return Ok(dt.and_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(RfcError::InvalidDateTime(value.to_string()))
}

/// Formats an instant in canonical UTC form.
#[must_use]
pub fn format_utc(instant: DateTime<Utc>) -> String {
    instant.format(UTC_FORMAT).to_string()
}

/// Returns whether a raw value carries the UTC marker.
#[must_use]
pub fn is_utc(value: &str) -> bool {
    value.ends_with('Z')
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn normalize_floating_gets_utc_marker() {
        assert_eq!(normalize("20250728T120000"), "20250728T120000Z");
    }

    #[test]
    fn normalize_date_gets_midnight() {
        assert_eq!(normalize("20250728"), "20250728T000000Z");
    }

    #[test]
    fn normalize_is_idempotent() {
        assert_eq!(normalize("20250728T120000Z"), "20250728T120000Z");
        assert_eq!(
            normalize(&normalize("2025-07-28T12:00:00")),
            "20250728T120000Z"
        );
    }

    #[test]
    fn normalize_strips_separators() {
        assert_eq!(normalize("2025-07-28T12:00:00"), "20250728T120000Z");
        assert_eq!(normalize("2025-07-28"), "20250728T000000Z");
        assert_eq!(normalize("2025-07-28T12:00:00Z"), "20250728T120000Z");
    }

    #[test]
    fn normalize_passes_other_lengths_through() {
        assert_eq!(normalize("2025:07:28 12:00:00"), "20250728120000");
        assert_eq!(normalize("garbage"), "garbage");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn parse_utc() {
        let expected = Utc.with_ymd_and_hms(2025, 7, 28, 12, 0, 0).unwrap();
        assert_eq!(parse("20250728T120000Z").unwrap(), expected);
    }

    #[test]
    fn parse_floating_as_utc() {
        let expected = Utc.with_ymd_and_hms(2025, 7, 28, 12, 30, 15).unwrap();
        assert_eq!(parse("20250728T123015").unwrap(), expected);
    }

    #[test]
    fn parse_date_as_midnight() {
        let expected = Utc.with_ymd_and_hms(2025, 7, 28, 0, 0, 0).unwrap();
        assert_eq!(parse("20250728").unwrap(), expected);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            parse("20250728120000"),
            Err(RfcError::InvalidDateTime(v)) if v == "20250728120000"
        ));
        assert!(parse("").is_err());
        assert!(parse("20251345T120000Z").is_err());
    }

    #[test]
    fn parse_accepts_everything_normalize_produces() {
        for raw in ["2025-07-28", "20250728T120000", "2025-07-28T12:00:00Z"] {
            assert!(parse(&normalize(raw)).is_ok(), "{raw}");
        }
    }

    #[test]
    fn format_utc_is_canonical() {
        let instant = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_utc(instant), "20250102T030405Z");
        assert_eq!(parse(&format_utc(instant)).unwrap(), instant);
    }

    #[test]
    fn is_utc_checks_marker() {
        assert!(is_utc("20250728T120000Z"));
        assert!(!is_utc("20250728T120000"));
    }
}
