//! Wire formats for timestamps.

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};

/// ISO-8601 with millisecond precision, written by both codecs.
pub(crate) const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Space-separated legacy form, accepted on load and used for display.
pub(crate) const LEGACY_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Formats a timestamp the way documents store it.
pub(crate) fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(ISO_FORMAT).to_string()
}

/// Lenient parse: ISO-8601 first, then the legacy format with UTC assumed.
/// Anything else maps to `None`. Sub-millisecond precision truncates to the
/// wire resolution so a loaded timestamp always survives re-serialization
/// unchanged.
pub(crate) fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(truncate_to_millis(parsed.with_timezone(&Utc)));
    }
    NaiveDateTime::parse_from_str(text, LEGACY_FORMAT)
        .map(|naive| truncate_to_millis(naive.and_utc()))
        .ok()
}

/// Drops sub-millisecond precision so recorded timestamps survive the
/// millisecond wire formats unchanged.
pub(crate) fn truncate_to_millis(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    let nanos = timestamp.nanosecond() / 1_000_000 * 1_000_000;
    timestamp.with_nanosecond(nanos).unwrap_or(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_iso_format_round_trips() {
        let stamp = Utc.with_ymd_and_hms(2016, 2, 23, 12, 0, 0).unwrap()
            + chrono::Duration::milliseconds(457);
        let text = format_timestamp(&stamp);
        assert_eq!(text, "2016-02-23T12:00:00.457Z");
        assert_eq!(parse_timestamp(&text), Some(stamp));
    }

    #[test]
    fn test_legacy_format_accepted() {
        let parsed = parse_timestamp("2016-02-23 12:00:00.457");
        let expected = Utc.with_ymd_and_hms(2016, 2, 23, 12, 0, 0).unwrap()
            + chrono::Duration::milliseconds(457);
        assert_eq!(parsed, Some(expected));
    }

    #[test]
    fn test_offset_timestamps_normalize_to_utc() {
        let parsed = parse_timestamp("2016-02-23T13:00:00.000+01:00");
        let expected = Utc.with_ymd_and_hms(2016, 2, 23, 12, 0, 0).unwrap();
        assert_eq!(parsed, Some(expected));
    }

    #[test]
    fn test_sub_millisecond_input_truncates_on_parse() {
        let parsed = parse_timestamp("2016-02-23T12:00:00.457123Z").unwrap();
        assert_eq!(parsed.timestamp_subsec_nanos(), 457_000_000);
        assert_eq!(format_timestamp(&parsed), "2016-02-23T12:00:00.457Z");
    }

    #[test]
    fn test_garbage_is_unparseable() {
        assert_eq!(parse_timestamp("not a date"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn test_truncate_to_millis() {
        let stamp = Utc.with_ymd_and_hms(2016, 2, 23, 12, 0, 0).unwrap()
            + chrono::Duration::nanoseconds(457_123_456);
        let truncated = truncate_to_millis(stamp);
        assert_eq!(truncated.timestamp_subsec_nanos(), 457_000_000);
        assert_eq!(truncate_to_millis(truncated), truncated);
    }
}
