//! Business-window resolution -- converts a calendar date plus configured
//! start/end hours into absolute UTC instants.
//!
//! Wraps `chrono-tz` so the UTC offset for a given date comes from the IANA
//! timezone database, including DST transitions. Wall-clock times that fall in
//! a spring-forward gap resolve to the first valid instant after the gap;
//! ambiguous fall-back times resolve to the earlier offset.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{Result, ScheduleError};

/// One day's bookable range, expressed as absolute instants.
///
/// Invariant: `start < end`. Request-scoped; built fresh per date and never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessWindow {
    /// The calendar date this window belongs to (in the business timezone).
    pub date: NaiveDate,
    /// The window's opening instant.
    pub start: DateTime<Utc>,
    /// The window's closing instant (exclusive).
    pub end: DateTime<Utc>,
}

impl BusinessWindow {
    /// Window length in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Resolve the business window for `date` in `timezone`.
///
/// `start_hour`/`end_hour` are local wall-clock hours in [0, 24) with
/// `start_hour < end_hour`. The returned instants carry that date's correct
/// UTC offset (e.g., US Eastern is UTC-4 under DST and UTC-5 otherwise).
///
/// # Errors
/// Returns `ScheduleError::InvalidConfig` if the hour range is empty or out of
/// bounds.
pub fn resolve_window(
    date: NaiveDate,
    timezone: Tz,
    start_hour: u32,
    end_hour: u32,
) -> Result<BusinessWindow> {
    if start_hour >= 24 || end_hour >= 24 {
        return Err(ScheduleError::InvalidConfig(format!(
            "hours must be in [0, 24): start={}, end={}",
            start_hour, end_hour
        )));
    }
    if start_hour >= end_hour {
        return Err(ScheduleError::InvalidConfig(format!(
            "start hour {} must be before end hour {}",
            start_hour, end_hour
        )));
    }

    let start = local_instant(date, timezone, start_hour)?;
    let end = local_instant(date, timezone, end_hour)?;

    Ok(BusinessWindow { date, start, end })
}

/// Convert `date` at `hour`:00 local wall clock in `timezone` to a UTC instant.
fn local_instant(date: NaiveDate, timezone: Tz, hour: u32) -> Result<DateTime<Utc>> {
    let naive = date
        .and_hms_opt(hour, 0, 0)
        .ok_or_else(|| ScheduleError::InvalidDate(format!("{} {:02}:00", date, hour)))?;

    match timezone.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        // Fall-back overlap: the wall time occurs twice; use the earlier offset.
        LocalResult::Ambiguous(earlier, _later) => Ok(earlier.with_timezone(&Utc)),
        // Spring-forward gap: the wall time does not exist; probe forward in
        // hour steps until the zone resolves it (gaps are at most a few hours).
        LocalResult::None => {
            for step in 1..=3 {
                let shifted = naive + Duration::hours(step);
                if let LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) =
                    timezone.from_local_datetime(&shifted)
                {
                    return Ok(dt.with_timezone(&Utc));
                }
            }
            Err(ScheduleError::InvalidDate(format!(
                "{} {:02}:00 does not exist in {}",
                date, hour, timezone
            )))
        }
    }
}

/// Whether `date` falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    use chrono::Datelike;
    matches!(
        date.weekday(),
        chrono::Weekday::Sat | chrono::Weekday::Sun
    )
}
