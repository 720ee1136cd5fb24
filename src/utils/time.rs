use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{0}' is not a valid ISO-8601 date-time")]
pub struct DateTimeParseError(pub String);

/// Parses a client supplied date-time.
///
/// Accepts RFC 3339 (`2023-04-02T16:41:06.014Z`), a date-time without offset
/// (`2021-04-01T17:24:06.667`, read as UTC) and a bare date (`2021-04-01`,
/// midnight UTC). The result is truncated to millisecond precision.
pub fn parse_iso_datetime(raw: &str) -> Result<DateTime<Utc>, DateTimeParseError> {
    let raw = raw.trim();

    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.and_utc())
        })
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M").map(|dt| dt.and_utc()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d").map(|d| d.and_time(NaiveTime::MIN).and_utc()))
        .map_err(|_| DateTimeParseError(raw.to_string()))?;

    Ok(parsed.trunc_subsecs(3))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[test]
    fn test_parse_naive_datetime_as_utc() {
        let parsed = parse_iso_datetime("2021-04-01T17:24:06.667").unwrap();
        let expected = Utc
            .with_ymd_and_hms(2021, 4, 1, 17, 24, 6)
            .unwrap()
            .with_nanosecond(667_000_000)
            .unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let parsed = parse_iso_datetime("2023-04-02T18:41:06.014+02:00").unwrap();
        assert_eq!(parsed.hour(), 16);
        assert_eq!(parsed.nanosecond(), 14_000_000);
        assert_eq!(parsed, parse_iso_datetime("2023-04-02T16:41:06.014Z").unwrap());
    }

    #[test]
    fn test_parse_bare_date() {
        let parsed = parse_iso_datetime("2020-07-01").unwrap();
        assert_eq!((parsed.year(), parsed.month(), parsed.day()), (2020, 7, 1));
        assert_eq!(parsed.hour(), 0);
    }

    #[test]
    fn test_truncates_to_milliseconds() {
        let parsed = parse_iso_datetime("2021-04-01T17:24:06.667999Z").unwrap();
        assert_eq!(parsed.nanosecond(), 667_000_000);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_iso_datetime("").is_err());
        assert!(parse_iso_datetime("yesterday").is_err());
        assert!(parse_iso_datetime("2021-13-01T00:00:00").is_err());
    }
}
