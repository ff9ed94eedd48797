//! Timestamp parsing for publication dates and trigger thresholds.
//!
//! Every parsed timestamp is zone-aware so any two of them compare
//! directly. Sources that carry no usable offset - named zones and the
//! zone-less threshold format - are interpreted in [`DEFAULT_OFFSET`].

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use once_cell::sync::Lazy;

use crate::error::{Error, Result};

/// Offset applied to timestamps that carry no usable zone (UTC-05:00).
pub static DEFAULT_OFFSET: Lazy<FixedOffset> =
    Lazy::new(|| FixedOffset::west_opt(5 * 3600).expect("offset within range"));

/// Publication date with a numeric offset, e.g. `Tue, 02 Jan 2024 15:04:05 +0000`.
const PUB_DATE_NUMERIC: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Publication date with a named zone, e.g. `Tue, 02 Jan 2024 15:04:05 GMT`.
/// The name is consumed but yields no offset.
const PUB_DATE_NAMED: &str = "%a, %d %b %Y %H:%M:%S %Z";

/// Trigger threshold format, e.g. `02 Jan 2024 15:04:05`. Always zone-less.
const THRESHOLD: &str = "%d %b %Y %H:%M:%S";

/// Parse a feed publication date.
///
/// The numeric-offset form is tried first and its offset is kept as-is.
/// The named-zone form is accepted as a fallback; zone names are not
/// resolved, so the timestamp is interpreted in [`DEFAULT_OFFSET`].
pub fn parse_pub_date(text: &str) -> Result<DateTime<FixedOffset>> {
    if let Ok(parsed) = DateTime::parse_from_str(text, PUB_DATE_NUMERIC) {
        return Ok(parsed);
    }
    NaiveDateTime::parse_from_str(text, PUB_DATE_NAMED)
        .map(in_default_offset)
        .map_err(|source| Error::timestamp(text, source))
}

/// Parse a trigger threshold timestamp, interpreted in [`DEFAULT_OFFSET`].
pub fn parse_threshold(text: &str) -> Result<DateTime<FixedOffset>> {
    NaiveDateTime::parse_from_str(text, THRESHOLD)
        .map(in_default_offset)
        .map_err(|source| Error::timestamp(text, source))
}

/// Attach the default offset to a local wall-clock time.
fn in_default_offset(naive: NaiveDateTime) -> DateTime<FixedOffset> {
    naive
        .and_local_timezone(*DEFAULT_OFFSET)
        .single()
        .expect("fixed offsets map local times unambiguously")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pub_date_numeric_offset_kept() {
        let parsed = parse_pub_date("Tue, 02 Jan 2024 15:04:05 +0000").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-01-02T15:04:05+00:00");
    }

    #[test]
    fn test_pub_date_negative_offset() {
        let parsed = parse_pub_date("Tue, 02 Jan 2024 15:04:05 -0500").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-01-02T15:04:05-05:00");
    }

    #[test]
    fn test_pub_date_named_zone_gets_default_offset() {
        let parsed = parse_pub_date("Tue, 02 Jan 2024 15:04:05 GMT").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-01-02T15:04:05-05:00");
    }

    #[test]
    fn test_pub_dates_compare_across_offsets() {
        let utc = parse_pub_date("Tue, 02 Jan 2024 15:04:05 +0000").unwrap();
        let named = parse_pub_date("Tue, 02 Jan 2024 10:04:05 EST").unwrap();
        assert_eq!(utc, named);
    }

    #[test]
    fn test_pub_date_rejects_garbage() {
        let err = parse_pub_date("yesterday at noon").unwrap_err();
        match err {
            Error::TimestampParse { text, .. } => assert_eq!(text, "yesterday at noon"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_pub_date_rejects_inconsistent_weekday() {
        // 2024-01-02 is a Tuesday.
        assert!(parse_pub_date("Mon, 02 Jan 2024 15:04:05 +0000").is_err());
    }

    #[test]
    fn test_threshold_default_offset() {
        let parsed = parse_threshold("01 Jan 2024 00:00:00").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-01-01T00:00:00-05:00");
    }

    #[test]
    fn test_threshold_month_name_case_insensitive() {
        let lower = parse_threshold("01 jan 2024 00:00:00").unwrap();
        let upper = parse_threshold("01 JAN 2024 00:00:00").unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_threshold_rejects_pub_date_format() {
        assert!(parse_threshold("Tue, 02 Jan 2024 15:04:05 +0000").is_err());
    }
}
