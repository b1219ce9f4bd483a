//! # bookend-core
//!
//! DST-aware adjacent-slot availability engine for meeting booking.
//!
//! Bookend exposes a calendar owner's free time, but only the fixed-duration
//! slots immediately bordering already-scheduled meetings inside a daily
//! business window. The pipeline runs once per requested date:
//!
//! 1. resolve the business window to absolute UTC instants (DST-correct),
//! 2. normalize the day's raw busy entries (all-day events become synthetic
//!    full-window blocks, cancelled/transparent entries drop out),
//! 3. tile the window into candidate slots, classify each as overlapping or
//!    adjacent, and keep the free-and-adjacent subset.
//!
//! ## Modules
//!
//! - [`window`] — calendar date + business hours → UTC instant window
//! - [`event`] — provider event types and their normalized form
//! - [`normalize`] — raw busy entries → uniform instant ranges
//! - [`slots`] — tiling, grid rounding, overlap/adjacency classification
//! - [`schedule`] — day/month/range queries and booking over a provider
//! - [`provider`] — the external calendar collaborator boundary
//! - [`config`] — business-window configuration
//! - [`error`] — error types

pub mod config;
pub mod error;
pub mod event;
pub mod normalize;
pub mod provider;
pub mod schedule;
pub mod slots;
pub mod window;

pub use config::ScheduleConfig;
pub use error::ScheduleError;
pub use event::{BusyEvent, EventStatus, EventTime, NormalizedEvent, Transparency};
pub use normalize::normalize_events;
pub use provider::{CalendarProvider, CreatedEvent, EventDraft, StaticProvider};
pub use schedule::{BookingOutcome, BookingRequest, DayAvailability, Scheduler};
pub use slots::{all_free_slots, bookable_slots, classify_slots, Slot, SlotTime};
pub use window::{is_weekend, resolve_window, BusinessWindow};
