//! The slot engine -- tiles a business window into fixed-duration candidate
//! slots, classifies each against the normalized event list, and filters to
//! the bookable subset.
//!
//! A slot is bookable when it is free AND adjacent to at least one event
//! boundary. This is the core product rule: free time is only offered when it
//! borders an existing commitment. One classification pass produces both the
//! overlap and adjacency flags; the two public filters (`bookable_slots`,
//! `all_free_slots`) are views over the same classified list, so the variants
//! cannot drift apart.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::event::NormalizedEvent;
use crate::window::BusinessWindow;

/// A candidate slot with its classification flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// The slot's range intersects at least one event.
    pub overlapping: bool,
    /// The slot borders at least one timed event's rounded boundary.
    pub adjacent: bool,
}

/// A bookable time range in a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotTime {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl From<&Slot> for SlotTime {
    fn from(s: &Slot) -> Self {
        Self {
            start: s.start,
            end: s.end,
        }
    }
}

/// Tile the window into consecutive candidate slots of `slot_minutes` each.
///
/// Tiling starts at `window.start` and stops before any slot whose end would
/// exceed `window.end`: a window whose length is not an exact multiple of the
/// slot duration loses its trailing remainder rather than emitting a truncated
/// slot.
fn tile_window(window: &BusinessWindow, slot_minutes: i64) -> Vec<Slot> {
    let duration = Duration::minutes(slot_minutes);
    let mut slots = Vec::new();
    let mut cursor = window.start;

    while cursor + duration <= window.end {
        slots.push(Slot {
            start: cursor,
            end: cursor + duration,
            overlapping: false,
            adjacent: false,
        });
        cursor += duration;
    }

    slots
}

/// Drop seconds and sub-seconds, keeping the whole minute.
fn truncate_to_minute(t: DateTime<Utc>) -> DateTime<Utc> {
    t - Duration::seconds(t.timestamp().rem_euclid(60))
        - Duration::nanoseconds(i64::from(t.timestamp_subsec_nanos()))
}

/// Floor an instant to the slot grid, seconds zeroed first.
///
/// For 30-minute slots: minutes >= 30 floor to :30, otherwise to :00.
fn round_down_to_grid(t: DateTime<Utc>, slot_minutes: i64) -> DateTime<Utc> {
    let step = slot_minutes * 60;
    let t = truncate_to_minute(t);
    t - Duration::seconds(t.timestamp().rem_euclid(step))
}

/// Ceil an instant to the slot grid, seconds zeroed first.
///
/// A minute already on the grid is left unchanged, so 10:30:15 rounds to
/// 10:30, not 11:00.
fn round_up_to_grid(t: DateTime<Utc>, slot_minutes: i64) -> DateTime<Utc> {
    let step = slot_minutes * 60;
    let t = truncate_to_minute(t);
    let rem = t.timestamp().rem_euclid(step);
    if rem == 0 {
        t
    } else {
        t + Duration::seconds(step - rem)
    }
}

/// Classify every candidate slot in the window against the event list.
///
/// Overlap uses half-open interval intersection (`slot.start < event.end &&
/// slot.end > event.start`); touching exactly at an endpoint is not overlap.
/// Once any event marks a slot overlapping it stays ineligible regardless of
/// adjacency to another event.
///
/// Adjacency is only evaluated against timed events, never synthetic all-day
/// blocks. Event boundaries are rounded to the slot grid first (start down,
/// end up) because real meetings rarely start or end exactly on a boundary: a
/// 10:05-10:50 meeting still makes the 9:30-10:00 and 11:00-11:30 slots
/// adjacent. After the boundary match the slot is re-checked for overlap
/// against the same event before the flag is set.
pub fn classify_slots(
    window: &BusinessWindow,
    events: &[NormalizedEvent],
    slot_minutes: i64,
) -> Vec<Slot> {
    let mut slots = tile_window(window, slot_minutes);

    for slot in &mut slots {
        for event in events {
            if slot.start < event.end && slot.end > event.start {
                slot.overlapping = true;
            }

            if event.all_day_block {
                continue;
            }

            let rounded_start = round_down_to_grid(event.start, slot_minutes);
            let rounded_end = round_up_to_grid(event.end, slot_minutes);
            let borders_event = slot.end == rounded_start || slot.start == rounded_end;

            if borders_event && !(slot.start < event.end && slot.end > event.start) {
                slot.adjacent = true;
            }
        }
    }

    slots
}

/// Compute the bookable slots: free AND adjacent to at least one event.
///
/// With zero events there is nothing to be adjacent to, so the result is
/// empty. Callers reject `start >= end` windows upstream; a window too short
/// for a single slot yields an empty list.
pub fn bookable_slots(
    window: &BusinessWindow,
    events: &[NormalizedEvent],
    slot_minutes: i64,
) -> Vec<SlotTime> {
    if events.is_empty() {
        return Vec::new();
    }

    classify_slots(window, events, slot_minutes)
        .iter()
        .filter(|s| !s.overlapping && s.adjacent)
        .map(SlotTime::from)
        .collect()
}

/// Compute every free slot regardless of adjacency.
///
/// Used for the auxiliary "all free time" report, not the public booking flow.
pub fn all_free_slots(
    window: &BusinessWindow,
    events: &[NormalizedEvent],
    slot_minutes: i64,
) -> Vec<SlotTime> {
    classify_slots(window, events, slot_minutes)
        .iter()
        .filter(|s| !s.overlapping)
        .map(SlotTime::from)
        .collect()
}
