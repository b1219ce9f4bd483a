//! The calendar-provider boundary.
//!
//! Event listing and insertion are external collaborators (OAuth, wire
//! protocol, retries all live behind this trait). The core only asks for the
//! busy entries intersecting one business window and, during booking, for a
//! single event insertion. Provider failures surface as
//! [`ScheduleError::Upstream`](crate::ScheduleError::Upstream).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::event::BusyEvent;
use crate::window::BusinessWindow;

/// A new event the core asks the provider to insert on booking.
///
/// The provider is expected to send the attendee an invitation; the core does
/// no notification delivery of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    pub summary: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Attendee to invite (the person booking the meeting).
    pub attendee_email: String,
    /// Reminder lead times in minutes, overriding calendar defaults.
    pub reminder_minutes: Vec<i64>,
}

/// The provider's record of a successfully inserted event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedEvent {
    pub id: String,
    /// Shareable link to the created event, returned to the booker.
    pub html_link: String,
}

/// External calendar collaborator: lists busy entries and inserts bookings.
pub trait CalendarProvider {
    /// Busy entries (timed or all-day) intersecting the window. The provider
    /// may pre-filter cancelled/transparent entries; normalization drops any
    /// that remain.
    fn busy_events(&self, window: &BusinessWindow) -> Result<Vec<BusyEvent>>;

    /// Insert a validated booking into the calendar.
    fn insert_event(&self, draft: &EventDraft) -> Result<CreatedEvent>;
}

impl<P: CalendarProvider + ?Sized> CalendarProvider for &P {
    fn busy_events(&self, window: &BusinessWindow) -> Result<Vec<BusyEvent>> {
        (**self).busy_events(window)
    }

    fn insert_event(&self, draft: &EventDraft) -> Result<CreatedEvent> {
        (**self).insert_event(draft)
    }
}

/// An in-memory provider over a fixed event list.
///
/// Stands in for the real calendar client in tests and offline CLI runs.
/// Insertion succeeds with a deterministic id derived from the draft's start
/// instant; nothing is actually stored.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    events: Vec<BusyEvent>,
}

impl StaticProvider {
    pub fn new(events: Vec<BusyEvent>) -> Self {
        Self { events }
    }
}

impl CalendarProvider for StaticProvider {
    fn busy_events(&self, window: &BusinessWindow) -> Result<Vec<BusyEvent>> {
        use crate::event::EventTime;

        // Mimic a real provider's time-bounded listing: only entries that
        // could intersect the window are returned.
        Ok(self
            .events
            .iter()
            .filter(|e| match e.time {
                EventTime::Timed { start, end } => start < window.end && end > window.start,
                EventTime::AllDay {
                    start_date,
                    end_date,
                } => start_date <= window.date && window.date < end_date,
            })
            .cloned()
            .collect())
    }

    fn insert_event(&self, draft: &EventDraft) -> Result<CreatedEvent> {
        let id = format!("evt-{}", draft.start.timestamp());
        Ok(CreatedEvent {
            html_link: format!("https://calendar.example/event/{}", id),
            id,
        })
    }
}
