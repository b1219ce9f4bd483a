//! Tests for event normalization against a business window.

use bookend_core::{
    normalize_events, BusinessWindow, BusyEvent, EventStatus, EventTime, Transparency,
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn utc(d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, d, h, min, 0).unwrap()
}

/// A 09:00-17:00 UTC window on 2026-03-16 (a Monday).
fn window() -> BusinessWindow {
    BusinessWindow {
        date: date(2026, 3, 16),
        start: utc(16, 9, 0),
        end: utc(16, 17, 0),
    }
}

fn timed(start: DateTime<Utc>, end: DateTime<Utc>) -> BusyEvent {
    BusyEvent {
        summary: "meeting".to_string(),
        status: EventStatus::Confirmed,
        transparency: Transparency::Opaque,
        time: EventTime::Timed { start, end },
    }
}

fn all_day(start_date: NaiveDate, end_date: NaiveDate) -> BusyEvent {
    BusyEvent {
        summary: "conference".to_string(),
        status: EventStatus::Confirmed,
        transparency: Transparency::Opaque,
        time: EventTime::AllDay {
            start_date,
            end_date,
        },
    }
}

// ── Status / transparency filtering ─────────────────────────────────────────

#[test]
fn cancelled_events_are_dropped() {
    let mut e = timed(utc(16, 10, 0), utc(16, 11, 0));
    e.status = EventStatus::Cancelled;
    assert!(normalize_events(&[e], &window()).is_empty());
}

#[test]
fn transparent_events_are_dropped() {
    let mut e = timed(utc(16, 10, 0), utc(16, 11, 0));
    e.transparency = Transparency::Transparent;
    assert!(normalize_events(&[e], &window()).is_empty());
}

#[test]
fn tentative_events_still_block_time() {
    let mut e = timed(utc(16, 10, 0), utc(16, 11, 0));
    e.status = EventStatus::Tentative;
    assert_eq!(normalize_events(&[e], &window()).len(), 1);
}

// ── Timed events ────────────────────────────────────────────────────────────

#[test]
fn timed_event_inside_window_keeps_its_instants() {
    let events = normalize_events(&[timed(utc(16, 10, 0), utc(16, 11, 0))], &window());
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].start, utc(16, 10, 0));
    assert_eq!(events[0].end, utc(16, 11, 0));
    assert!(!events[0].all_day_block);
}

#[test]
fn partial_overlap_is_kept_unclipped() {
    // Starts before the window opens; the original start survives.
    let events = normalize_events(&[timed(utc(16, 8, 0), utc(16, 9, 30))], &window());
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].start, utc(16, 8, 0));
    assert_eq!(events[0].end, utc(16, 9, 30));
}

#[test]
fn event_entirely_outside_window_is_dropped() {
    let before = timed(utc(16, 6, 0), utc(16, 7, 0));
    let after = timed(utc(16, 18, 0), utc(16, 19, 0));
    assert!(normalize_events(&[before, after], &window()).is_empty());
}

#[test]
fn event_touching_window_edge_is_dropped() {
    // Ends exactly when the window opens: no overlap under half-open ranges.
    let at_open = timed(utc(16, 8, 0), utc(16, 9, 0));
    let at_close = timed(utc(16, 17, 0), utc(16, 18, 0));
    assert!(normalize_events(&[at_open, at_close], &window()).is_empty());
}

// ── All-day events ──────────────────────────────────────────────────────────

#[test]
fn all_day_event_covering_date_becomes_full_window_block() {
    let events = normalize_events(
        &[all_day(date(2026, 3, 16), date(2026, 3, 17))],
        &window(),
    );
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].start, window().start);
    assert_eq!(events[0].end, window().end);
    assert!(events[0].all_day_block);
}

#[test]
fn all_day_end_date_is_exclusive() {
    // A 3/16..3/17 all-day event covers 3/16 only; it does not block 3/17.
    let w = BusinessWindow {
        date: date(2026, 3, 17),
        start: utc(17, 9, 0),
        end: utc(17, 17, 0),
    };
    let events = normalize_events(&[all_day(date(2026, 3, 16), date(2026, 3, 17))], &w);
    assert!(events.is_empty());
}

#[test]
fn multi_day_all_day_event_covers_middle_dates() {
    let events = normalize_events(
        &[all_day(date(2026, 3, 14), date(2026, 3, 18))],
        &window(),
    );
    assert_eq!(events.len(), 1);
    assert!(events[0].all_day_block);
}

#[test]
fn all_day_event_elsewhere_produces_nothing() {
    let events = normalize_events(
        &[all_day(date(2026, 3, 20), date(2026, 3, 21))],
        &window(),
    );
    assert!(events.is_empty());
}
