//! Tip-off time helpers shared by both schedule sources.

use crate::dto::today::{STATUS_LIVE, STATUS_SCHEDULED};
use chrono::{DateTime, Local, NaiveDate, Utc};
use chrono_tz::America::New_York;

/// Shown when an upstream start time is missing or unparseable.
pub const UNKNOWN_TIME: &str = "TBD";

pub fn parse_start_time(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// 12-hour US Eastern clock, e.g. `7:30 PM`.
pub fn format_eastern(start: DateTime<Utc>) -> String {
    start.with_timezone(&New_York).format("%-I:%M %p").to_string()
}

pub fn display_time(start: Option<DateTime<Utc>>) -> String {
    start
        .map(format_eastern)
        .unwrap_or_else(|| UNKNOWN_TIME.to_string())
}

/// Coarse status for odds-provider games: anything not provably in the
/// future counts as live.
pub fn odds_status(start: Option<DateTime<Utc>>, now: DateTime<Utc>) -> &'static str {
    match start {
        Some(start) if start > now => STATUS_SCHEDULED,
        _ => STATUS_LIVE,
    }
}

/// Server-local calendar date used for the schedule lookup.
pub fn local_schedule_date(now: DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&Local).date_naive()
}

/// `YYYY-MM-DD` in UTC, as reported in the response body.
pub fn iso_date(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_eastern_standard_time() {
        let start = Utc.with_ymd_and_hms(2024, 1, 16, 0, 30, 0).unwrap();
        assert_eq!(format_eastern(start), "7:30 PM");
    }

    #[test]
    fn test_format_eastern_daylight_time() {
        let start = Utc.with_ymd_and_hms(2024, 7, 1, 23, 0, 0).unwrap();
        assert_eq!(format_eastern(start), "7:00 PM");
    }

    #[test]
    fn test_format_eastern_after_midnight() {
        let start = Utc.with_ymd_and_hms(2024, 1, 15, 5, 5, 0).unwrap();
        assert_eq!(format_eastern(start), "12:05 AM");
    }

    #[test]
    fn test_parse_start_time_variants() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 16, 0, 30, 0).unwrap();
        assert_eq!(parse_start_time("2024-01-16T00:30:00Z"), Some(expected));
        assert_eq!(parse_start_time("2024-01-16T00:30:00+00:00"), Some(expected));
        assert_eq!(parse_start_time("2024-01-15T19:30:00-05:00"), Some(expected));
        assert_eq!(parse_start_time("tonight"), None);
    }

    #[test]
    fn test_display_time_unknown() {
        assert_eq!(display_time(None), UNKNOWN_TIME);
    }

    #[test]
    fn test_odds_status() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 20, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 1, 16, 0, 30, 0).unwrap();
        let earlier = Utc.with_ymd_and_hms(2024, 1, 15, 18, 0, 0).unwrap();

        assert_eq!(odds_status(Some(later), now), STATUS_SCHEDULED);
        assert_eq!(odds_status(Some(earlier), now), STATUS_LIVE);
        assert_eq!(odds_status(Some(now), now), STATUS_LIVE);
        assert_eq!(odds_status(None, now), STATUS_LIVE);
    }

    #[test]
    fn test_iso_date() {
        let now = Utc.with_ymd_and_hms(2024, 3, 5, 23, 59, 59).unwrap();
        assert_eq!(iso_date(now), "2024-03-05");
    }
}
