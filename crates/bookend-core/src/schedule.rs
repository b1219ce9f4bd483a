//! The scheduling service -- runs the resolve → normalize → classify pipeline
//! per date and shapes the results for the front end.
//!
//! Each query is request-scoped: windows, normalized events, and slots are
//! built fresh per date and discarded after the response. Weekends
//! short-circuit before the provider is ever queried when weekend exclusion is
//! on.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::config::ScheduleConfig;
use crate::error::{Result, ScheduleError};
use crate::normalize::normalize_events;
use crate::provider::{CalendarProvider, CreatedEvent, EventDraft};
use crate::slots::{all_free_slots, bookable_slots, SlotTime};
use crate::window::{is_weekend, resolve_window, BusinessWindow};

/// Reminder lead times (minutes) set on inserted events: one day and 30
/// minutes before the meeting.
const REMINDER_MINUTES: [i64; 2] = [1440, 30];

/// One day's entry in a range-availability response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayAvailability {
    /// Bookable slots: free and adjacent to an existing event.
    pub adjacent: Vec<SlotTime>,
    /// Every free slot regardless of adjacency.
    pub all: Vec<SlotTime>,
    pub is_weekend: bool,
}

/// A booking request as posted by the front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub name: String,
    pub email: String,
    /// The booker's display timezone. Validated but never used in the
    /// computation; slot instants are absolute.
    pub timezone: String,
}

/// The result of a booking attempt.
///
/// Weekend and out-of-hours attempts are rejections, not errors; only
/// provider failures and malformed input become [`ScheduleError`]s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BookingOutcome {
    Confirmed { event: CreatedEvent },
    Rejected { reason: String },
}

/// Orchestrates availability queries and bookings over a calendar provider.
#[derive(Debug)]
pub struct Scheduler<P: CalendarProvider> {
    config: ScheduleConfig,
    provider: P,
}

impl<P: CalendarProvider> Scheduler<P> {
    /// Build a scheduler, validating the configuration up front.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidConfig` for an empty or out-of-bounds
    /// hour range or a slot duration that does not divide an hour.
    pub fn new(config: ScheduleConfig, provider: P) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, provider })
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Bookable slots for one date.
    ///
    /// Weekends return an empty list without querying the provider when
    /// weekend exclusion is enabled.
    pub fn day_slots(&self, date: NaiveDate) -> Result<Vec<SlotTime>> {
        if self.config.exclude_weekends && is_weekend(date) {
            return Ok(Vec::new());
        }
        let window = self.resolve(date)?;
        let raw = self.provider.busy_events(&window)?;
        let events = normalize_events(&raw, &window);
        Ok(bookable_slots(&window, &events, self.config.slot_minutes))
    }

    /// Whether each day of `month` has at least one bookable slot.
    ///
    /// Weekends are `false` without querying the provider.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidDate` if `month` is not in 1-12.
    pub fn month_overview(&self, year: i32, month: u32) -> Result<BTreeMap<NaiveDate, bool>> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| ScheduleError::InvalidDate(format!("{}-{:02}", year, month)))?;

        let mut overview = BTreeMap::new();
        let mut date = first;
        while date.month() == month {
            let has_slot = if self.config.exclude_weekends && is_weekend(date) {
                false
            } else {
                !self.day_slots(date)?.is_empty()
            };
            overview.insert(date, has_slot);
            date += Duration::days(1);
        }
        Ok(overview)
    }

    /// Per-day availability for every date in `[start, end]`, with both the
    /// adjacency-filtered slots and the full free-slot report.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidDate` if `start > end`.
    pub fn range_availability(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<BTreeMap<NaiveDate, DayAvailability>> {
        if start > end {
            return Err(ScheduleError::InvalidDate(format!(
                "range start {} is after end {}",
                start, end
            )));
        }

        let mut days = BTreeMap::new();
        let mut date = start;
        while date <= end {
            days.insert(date, self.day_availability(date)?);
            date += Duration::days(1);
        }
        Ok(days)
    }

    fn day_availability(&self, date: NaiveDate) -> Result<DayAvailability> {
        if self.config.exclude_weekends && is_weekend(date) {
            return Ok(DayAvailability {
                adjacent: Vec::new(),
                all: Vec::new(),
                is_weekend: true,
            });
        }
        let window = self.resolve(date)?;
        let raw = self.provider.busy_events(&window)?;
        let events = normalize_events(&raw, &window);
        Ok(DayAvailability {
            adjacent: bookable_slots(&window, &events, self.config.slot_minutes),
            all: all_free_slots(&window, &events, self.config.slot_minutes),
            is_weekend: false,
        })
    }

    /// Validate and execute a booking.
    ///
    /// Domain rejections (weekend, outside the business window, inverted
    /// range) come back as [`BookingOutcome::Rejected`]; only a bad timezone
    /// string or a provider failure is an error.
    pub fn book(&self, request: &BookingRequest) -> Result<BookingOutcome> {
        // The display timezone must at least be a real IANA zone.
        request
            .timezone
            .parse::<Tz>()
            .map_err(|_| ScheduleError::InvalidTimezone(request.timezone.clone()))?;

        if request.start_time >= request.end_time {
            return Ok(BookingOutcome::Rejected {
                reason: "end time must be after start time".to_string(),
            });
        }

        // The booking's date, as seen on the business calendar.
        let date = request
            .start_time
            .with_timezone(&self.config.timezone)
            .date_naive();

        if self.config.exclude_weekends && is_weekend(date) {
            return Ok(BookingOutcome::Rejected {
                reason: format!("{} falls on a weekend", date),
            });
        }

        let window = self.resolve(date)?;
        if request.start_time < window.start || request.end_time > window.end {
            return Ok(BookingOutcome::Rejected {
                reason: "requested time is outside business hours".to_string(),
            });
        }

        let draft = EventDraft {
            summary: format!("Meeting with {}", request.name),
            start: request.start_time,
            end: request.end_time,
            attendee_email: request.email.clone(),
            reminder_minutes: REMINDER_MINUTES.to_vec(),
        };
        let event = self.provider.insert_event(&draft)?;
        Ok(BookingOutcome::Confirmed { event })
    }

    fn resolve(&self, date: NaiveDate) -> Result<BusinessWindow> {
        resolve_window(
            date,
            self.config.timezone,
            self.config.start_hour,
            self.config.end_hour,
        )
    }
}
