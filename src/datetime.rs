//! Parsing of user-entered dates, times, and durations.
//!
//! Input is local wall-clock time; everything downstream works in absolute
//! instants.

use anyhow::{anyhow, Result};
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Parse "YYYY-MM-DD" (midnight local) or "YYYY-MM-DDTHH:MM" into an
/// absolute instant.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
        return local_to_utc(naive);
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return local_to_utc(date.and_hms_opt(0, 0, 0).unwrap());
    }
    Err(anyhow!(
        "Invalid date/time '{}'. Expected YYYY-MM-DD or YYYY-MM-DDTHH:MM",
        s
    ))
}

/// Parse "YYYY-MM-DD" into a calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| anyhow!("Invalid date '{}'. Expected YYYY-MM-DD", s))
}

/// Parse a humantime duration string ("30m", "1h30m") into a chrono
/// duration.
pub fn parse_duration(s: &str) -> Result<Duration> {
    let duration =
        humantime::parse_duration(s).map_err(|e| anyhow!("Invalid duration '{}': {}", s, e))?;
    Duration::from_std(duration).map_err(|_| anyhow!("Duration '{}' is too large", s))
}

fn local_to_utc(naive: NaiveDateTime) -> Result<DateTime<Utc>> {
    Local
        .from_local_datetime(&naive)
        // DST gaps have no earliest instant; ambiguous times take the first
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| anyhow!("Time '{}' does not exist in the local timezone", naive))
}
