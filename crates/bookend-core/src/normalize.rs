//! Event normalization -- filters a day's raw busy entries down to the ones
//! that intersect the business window and gives them uniform instant bounds.

use crate::event::{BusyEvent, EventTime, NormalizedEvent};
use crate::window::BusinessWindow;

/// Normalize raw provider events against one business window.
///
/// - Cancelled and transparent events are dropped; they never block time.
/// - An all-day event whose `[start_date, end_date)` range covers the window's
///   date becomes one synthetic block spanning the full window. All-day events
///   not covering the date produce nothing.
/// - A timed event survives only if it overlaps the window at all
///   (`start < window.end && end > window.start`); partial overlaps keep their
///   original instants, unclipped.
///
/// Output order is unspecified; the slot engine does not depend on it.
pub fn normalize_events(events: &[BusyEvent], window: &BusinessWindow) -> Vec<NormalizedEvent> {
    events
        .iter()
        .filter(|e| e.blocks_time())
        .filter_map(|e| match e.time {
            EventTime::AllDay {
                start_date,
                end_date,
            } => {
                // Exclusive end date: the event covers [start_date, end_date).
                if start_date <= window.date && window.date < end_date {
                    Some(NormalizedEvent {
                        start: window.start,
                        end: window.end,
                        all_day_block: true,
                    })
                } else {
                    None
                }
            }
            EventTime::Timed { start, end } => {
                if start < window.end && end > window.start {
                    Some(NormalizedEvent {
                        start,
                        end,
                        all_day_block: false,
                    })
                } else {
                    None
                }
            }
        })
        .collect()
}
