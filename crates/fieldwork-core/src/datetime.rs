//! Parsing and normalization of datetime-local values.

use chrono::NaiveDateTime;

/// Parses a `datetime-local` value (`YYYY-MM-DDTHH:MM`, seconds optional).
///
/// Returns `None` for anything that is not a well-formed local datetime.
pub fn parse_datetime_local(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .ok()
}

/// Converts a `datetime-local` value to a normalized RFC 3339 UTC
/// timestamp, suitable for submission payloads.
pub fn to_timestamp(value: &str) -> Option<String> {
    parse_datetime_local(value).map(|dt| dt.and_utc().to_rfc3339())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_without_seconds() {
        let dt = parse_datetime_local("2025-01-01T10:30").unwrap();
        assert_eq!(dt.format("%H:%M:%S").to_string(), "10:30:00");
    }

    #[test]
    fn test_parse_with_seconds() {
        assert!(parse_datetime_local("2025-01-01T10:30:45").is_some());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_datetime_local("not-a-date").is_none());
        assert!(parse_datetime_local("2025-01-01").is_none());
        assert!(parse_datetime_local("").is_none());
    }

    #[test]
    fn test_to_timestamp() {
        let ts = to_timestamp("2030-01-01T00:00").unwrap();
        assert_eq!(ts, "2030-01-01T00:00:00+00:00");
        assert!(to_timestamp("nope").is_none());
    }
}
