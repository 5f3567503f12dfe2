//! Tests for the snapshot slot: only the newest refresh may publish, and
//! teardown invalidates everything in flight.

use chrono::NaiveDate;
use stay_engine::{BookedDates, DateRange, SnapshotSlot};

/// A one-day booking, distinct per day, so tests can tell snapshots apart.
fn one_day_booking(y: i32, m: u32, day: u32) -> BookedDates {
    let date = NaiveDate::from_ymd_opt(y, m, day).unwrap();
    BookedDates::from_ranges(&[DateRange::new(date, date).unwrap()])
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn slot_starts_with_no_snapshot() {
    let slot = SnapshotSlot::new();
    assert!(slot.booked().is_none());
}

#[test]
fn committed_snapshot_is_published() {
    let mut slot = SnapshotSlot::new();
    let ticket = slot.begin_refresh();

    assert!(slot.commit(ticket, one_day_booking(2024, 6, 10)));
    let booked = slot.booked().unwrap();
    assert!(booked.contains(day(2024, 6, 10)));
}

#[test]
fn superseded_ticket_is_rejected() {
    let mut slot = SnapshotSlot::new();
    let stale = slot.begin_refresh();
    let current = slot.begin_refresh();

    assert!(!slot.commit(stale, one_day_booking(2024, 6, 10)));
    assert!(slot.booked().is_none(), "rejected commit must not publish");

    assert!(slot.commit(current, one_day_booking(2024, 7, 1)));
    assert!(slot.booked().unwrap().contains(day(2024, 7, 1)));
}

#[test]
fn late_response_cannot_overwrite_newer_data() {
    // Two fetches race; the newer one finishes first. When the older
    // response finally lands it must be dropped.
    let mut slot = SnapshotSlot::new();
    let older = slot.begin_refresh();
    let newer = slot.begin_refresh();

    assert!(slot.commit(newer, one_day_booking(2024, 7, 1)));
    assert!(!slot.commit(older, one_day_booking(2024, 6, 10)));

    let booked = slot.booked().unwrap();
    assert!(booked.contains(day(2024, 7, 1)));
    assert!(!booked.contains(day(2024, 6, 10)));
}

#[test]
fn published_snapshot_survives_a_rejected_commit() {
    let mut slot = SnapshotSlot::new();
    let first = slot.begin_refresh();
    assert!(slot.commit(first, one_day_booking(2024, 6, 10)));

    // A new refresh starts, then the old ticket shows up again.
    let _second = slot.begin_refresh();
    assert!(!slot.commit(first, one_day_booking(2024, 8, 1)));
    assert!(slot.booked().unwrap().contains(day(2024, 6, 10)));
}

#[test]
fn clear_drops_the_snapshot_and_invalidates_tickets() {
    let mut slot = SnapshotSlot::new();
    let ticket = slot.begin_refresh();
    assert!(slot.commit(ticket, one_day_booking(2024, 6, 10)));

    let in_flight = slot.begin_refresh();
    slot.clear();

    assert!(slot.booked().is_none());
    assert!(
        !slot.commit(in_flight, one_day_booking(2024, 7, 1)),
        "a response landing after teardown must be dropped"
    );
    assert!(slot.booked().is_none());
}

#[test]
fn refresh_after_clear_publishes_again() {
    let mut slot = SnapshotSlot::new();
    slot.clear();

    let ticket = slot.begin_refresh();
    assert!(slot.commit(ticket, one_day_booking(2024, 9, 5)));
    assert!(slot.booked().unwrap().contains(day(2024, 9, 5)));
}

#[test]
fn failed_fetch_falls_back_to_an_open_calendar() {
    // The fetch never completes, so nothing is committed. Validation still
    // runs against the empty calendar: every day reads as free and the
    // caller surfaces the fetch error separately.
    let slot = SnapshotSlot::new();

    let empty = BookedDates::empty();
    let booked = slot.booked().unwrap_or(&empty);
    let verdict = stay_engine::validate_check_in(day(2024, 6, 11), day(2024, 6, 1), booked);
    assert!(verdict.is_bookable());
}
