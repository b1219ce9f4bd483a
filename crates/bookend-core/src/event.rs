//! Calendar event types at the provider boundary and their normalized form.
//!
//! Raw entries come from the external calendar provider and are either timed
//! (concrete instants) or all-day (date-only bounds, exclusive end date, per
//! provider convention). Normalization turns both into uniform instant ranges
//! so the slot engine never reasons about dates or zones.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Event status as reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Confirmed,
    Tentative,
    Cancelled,
}

/// Whether the event blocks time on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transparency {
    /// The event occupies its time range.
    #[default]
    Opaque,
    /// The event does not block time (e.g., "free" events).
    Transparent,
}

/// The time extent of a raw event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventTime {
    /// A timed event with concrete start/end instants.
    Timed {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// An all-day event. `end_date` is exclusive: a one-day event has
    /// `end_date == start_date + 1`.
    AllDay {
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
}

/// A raw busy entry from the external calendar provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusyEvent {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default)]
    pub transparency: Transparency,
    #[serde(flatten)]
    pub time: EventTime,
}

impl BusyEvent {
    /// Cancelled and transparent events never block time.
    pub fn blocks_time(&self) -> bool {
        self.status != EventStatus::Cancelled && self.transparency != Transparency::Transparent
    }
}

/// A uniform instant-range event produced by normalization.
///
/// Only entries intersecting the current business window survive
/// normalization. A synthetic all-day block spans the full window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedEvent {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// True when this entry stands in for an all-day event. Such blocks make
    /// slots overlapping but never adjacent; the whole day is blocked, so
    /// there is no meaningful boundary to border.
    pub all_day_block: bool,
}
