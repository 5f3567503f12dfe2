//! Tests for the candidate selection: check-in edits re-anchoring check-out,
//! the pre-submit review, and the serde boundary used to carry a selection
//! across navigation.

use chrono::NaiveDate;
use serde_json::json;
use stay_engine::{
    BookedDates, DateRange, RejectReason, StayPolicy, StaySelection, Verdict,
};

/// Shorthand for a calendar day.
fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// One reservation: June 10th through June 12th, 2024.
fn june_booking() -> BookedDates {
    BookedDates::from_ranges(&[DateRange::new(d(2024, 6, 10), d(2024, 6, 12)).unwrap()])
}

fn selection(check_in: NaiveDate, check_out: NaiveDate) -> StaySelection {
    StaySelection { check_in, check_out }
}

// ---------------------------------------------------------------------------
// Construction and edits
// ---------------------------------------------------------------------------

#[test]
fn fresh_selection_is_one_night_from_today() {
    let sel = StaySelection::new(d(2024, 6, 1));
    assert_eq!(sel.check_in, d(2024, 6, 1));
    assert_eq!(sel.check_out, d(2024, 6, 2));
    assert_eq!(sel.nights(), 1);
}

#[test]
fn moving_check_in_past_checkout_reanchors_it() {
    // Check-in jumps from the 10th to the 15th, past the old check-out on
    // the 12th: check-out follows to the 16th.
    let mut sel = selection(d(2024, 6, 10), d(2024, 6, 12));
    sel.set_check_in(d(2024, 6, 15), StayPolicy::default());
    assert_eq!(sel.check_out, d(2024, 6, 16));
}

#[test]
fn moving_check_in_keeps_a_still_valid_checkout() {
    let mut sel = selection(d(2024, 6, 10), d(2024, 6, 12));
    sel.set_check_in(d(2024, 6, 11), StayPolicy::default());
    assert_eq!(sel.check_out, d(2024, 6, 12));
}

#[test]
fn moving_check_in_far_back_clamps_the_stay_length() {
    let mut sel = selection(d(2024, 6, 10), d(2024, 6, 12));
    sel.set_check_in(d(2024, 6, 1), StayPolicy::default());
    assert_eq!(sel.check_out, d(2024, 6, 4), "eleven nights clamped to three");
}

#[test]
fn setting_check_out_stores_it_unadjusted() {
    // Check-out edits are free-form; the review reports any violation.
    let mut sel = selection(d(2024, 6, 10), d(2024, 6, 12));
    sel.set_check_out(d(2024, 6, 9));
    assert_eq!(sel.check_out, d(2024, 6, 9));
}

#[test]
fn nights_counts_whole_days() {
    assert_eq!(selection(d(2024, 6, 10), d(2024, 6, 13)).nights(), 3);
}

// ---------------------------------------------------------------------------
// Review
// ---------------------------------------------------------------------------

#[test]
fn clean_selection_reviews_as_bookable() {
    let sel = selection(d(2024, 6, 13), d(2024, 6, 15));
    let review = sel.review(d(2024, 6, 1), &june_booking(), StayPolicy::default());

    assert_eq!(review.check_in, Verdict::Bookable);
    assert_eq!(review.check_out, Verdict::Bookable);
    assert!(!review.range_conflict);
    assert!(review.is_bookable());
}

#[test]
fn zero_night_selection_is_rejected() {
    // Equal dates slip past the endpoint checks (check-out is not strictly
    // earlier than check-in) but never make a bookable stay.
    let sel = selection(d(2024, 6, 13), d(2024, 6, 13));
    let review = sel.review(d(2024, 6, 1), &june_booking(), StayPolicy::default());

    assert_eq!(review.check_in, Verdict::Bookable);
    assert_eq!(
        review.check_out,
        Verdict::Rejected(RejectReason::BeforeCheckIn)
    );
    assert!(!review.is_bookable());
}

#[test]
fn review_catches_a_conflict_between_free_endpoints() {
    // Both endpoints are free days; the reserved block sits in between.
    let sel = selection(d(2024, 6, 9), d(2024, 6, 13));
    let review = sel.review(d(2024, 6, 1), &june_booking(), StayPolicy::with_max_stay_days(7));

    assert_eq!(review.check_in, Verdict::Bookable);
    assert_eq!(review.check_out, Verdict::Bookable);
    assert!(review.range_conflict);
    assert!(!review.is_bookable());
}

#[test]
fn review_flags_a_booked_check_in() {
    let sel = selection(d(2024, 6, 11), d(2024, 6, 14));
    let review = sel.review(d(2024, 6, 1), &june_booking(), StayPolicy::default());

    assert_eq!(review.check_in, Verdict::Rejected(RejectReason::DateBooked));
    assert!(review.range_conflict);
    assert!(!review.is_bookable());
}

#[test]
fn review_recomputes_after_every_edit() {
    let mut sel = selection(d(2024, 6, 11), d(2024, 6, 12));
    let policy = StayPolicy::default();
    let booked = june_booking();

    assert!(!sel.review(d(2024, 6, 1), &booked, policy).is_bookable());

    // Moving check-in clear of the booking re-anchors check-out past it too.
    sel.set_check_in(d(2024, 6, 13), policy);
    assert_eq!(sel.check_out, d(2024, 6, 14));
    assert!(sel.review(d(2024, 6, 1), &booked, policy).is_bookable());
}

// ---------------------------------------------------------------------------
// Persistence boundary
// ---------------------------------------------------------------------------

#[test]
fn selection_wire_shape_is_two_iso_dates() {
    let sel = selection(d(2024, 6, 10), d(2024, 6, 12));
    let value = serde_json::to_value(sel).unwrap();
    assert_eq!(
        value,
        json!({ "check_in": "2024-06-10", "check_out": "2024-06-12" })
    );
}

#[test]
fn selection_roundtrips_through_json() {
    let sel = selection(d(2024, 6, 10), d(2024, 6, 12));
    let json = serde_json::to_string(&sel).unwrap();
    let back: StaySelection = serde_json::from_str(&json).unwrap();
    assert_eq!(back, sel);
}

#[test]
fn review_wire_shape_names_every_gate() {
    let sel = selection(d(2024, 6, 13), d(2024, 6, 15));
    let review = sel.review(d(2024, 6, 1), &june_booking(), StayPolicy::default());
    let value = serde_json::to_value(review).unwrap();

    assert_eq!(
        value,
        json!({
            "check_in": { "verdict": "bookable" },
            "check_out": { "verdict": "bookable" },
            "range_conflict": false,
        })
    );
}
