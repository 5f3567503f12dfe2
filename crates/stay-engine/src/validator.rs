//! Bookability checks for candidate check-in/check-out dates.
//!
//! Every operation here is a pure function of its arguments: dates in,
//! verdict out, no clocks, no I/O, no retained state. "Today" is always a
//! parameter so the widget decides what the current day is and results stay
//! reproducible.
//!
//! The endpoint validators ([`validate_check_in`], [`validate_check_out`])
//! inspect only the day being edited. [`has_range_conflict`] walks the whole
//! candidate range and is the authoritative gate before a booking attempt —
//! a stay can span a fully booked block while both of its endpoints are
//! free, and editing one endpoint never re-walks the other days.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::booked::BookedDates;
use crate::policy::StayPolicy;

/// Why a candidate date was rejected.
///
/// A closed, stable taxonomy: the widget keys its inline error copy off
/// these values, so variants are never renamed or reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// The day precedes today.
    PastDate,
    /// The day collides with an existing reservation.
    DateBooked,
    /// Check-out precedes check-in.
    BeforeCheckIn,
    /// The stay exceeds the policy's maximum length.
    StayTooLong,
}

/// Outcome of validating one endpoint of a candidate stay.
///
/// Rejections are normal values, not errors — the user fixes them by picking
/// a different day. Verdicts are recomputed from scratch on every edit and
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", content = "reason", rename_all = "snake_case")]
pub enum Verdict {
    /// The date passes every check.
    Bookable,
    /// The date fails; the reason is the first failing check.
    Rejected(RejectReason),
}

impl Verdict {
    /// Whether the date passed validation.
    pub fn is_bookable(&self) -> bool {
        matches!(self, Verdict::Bookable)
    }

    /// The rejection reason, if any.
    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            Verdict::Bookable => None,
            Verdict::Rejected(reason) => Some(*reason),
        }
    }
}

/// Whether `date` falls on any reserved day.
///
/// Membership is by calendar-day equality, never by timestamp, and the
/// reserved set is inclusive of interval endpoints (see [`BookedDates`]).
/// The calendar widget calls this per visible day to disable dates
/// proactively.
pub fn is_date_booked(date: NaiveDate, booked: &BookedDates) -> bool {
    booked.contains(date)
}

/// Validate a candidate check-in day.
///
/// Checks run in a fixed order and the first failure is reported:
///
/// 1. [`RejectReason::PastDate`] — `date` precedes `today`
/// 2. [`RejectReason::DateBooked`] — `date` collides with a reservation
pub fn validate_check_in(date: NaiveDate, today: NaiveDate, booked: &BookedDates) -> Verdict {
    if date < today {
        return Verdict::Rejected(RejectReason::PastDate);
    }
    if is_date_booked(date, booked) {
        return Verdict::Rejected(RejectReason::DateBooked);
    }
    Verdict::Bookable
}

/// Validate a candidate check-out day against the chosen check-in.
///
/// Checks run in a fixed order and the first failure is reported:
///
/// 1. [`RejectReason::PastDate`] — `date` precedes `today`
/// 2. [`RejectReason::BeforeCheckIn`] — `date` precedes `check_in`
/// 3. [`RejectReason::DateBooked`] — `date` collides with a reservation
/// 4. [`RejectReason::StayTooLong`] — `date - check_in` exceeds
///    [`StayPolicy::max_stay_days`]
///
/// Stay length is whole-day arithmetic: with a maximum of 3, a check-out of
/// `check_in + 3` is admitted and `check_in + 4` is rejected.
pub fn validate_check_out(
    date: NaiveDate,
    check_in: NaiveDate,
    today: NaiveDate,
    booked: &BookedDates,
    policy: StayPolicy,
) -> Verdict {
    if date < today {
        return Verdict::Rejected(RejectReason::PastDate);
    }
    if date < check_in {
        return Verdict::Rejected(RejectReason::BeforeCheckIn);
    }
    if is_date_booked(date, booked) {
        return Verdict::Rejected(RejectReason::DateBooked);
    }
    if (date - check_in).num_days() > policy.max_stay_days() {
        return Verdict::Rejected(RejectReason::StayTooLong);
    }
    Verdict::Bookable
}

/// Whether any day of the candidate stay collides with a reservation.
///
/// Walks every day in `[check_in, check_out]` inclusive. An inverted pair
/// (`check_out < check_in`) walks nothing and reports no conflict — the
/// endpoint validators already reject that selection. The walk ends at the
/// last representable day of the calendar.
pub fn has_range_conflict(
    check_in: NaiveDate,
    check_out: NaiveDate,
    booked: &BookedDates,
) -> bool {
    let mut day = check_in;
    while day <= check_out {
        if is_date_booked(day, booked) {
            return true;
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    false
}

/// Re-anchor check-out after a check-in edit.
///
/// The widget adjusts check-out automatically whenever check-in moves, so
/// the pair never goes silently invalid:
///
/// - check-in moved to or past the old check-out → `new_check_in + 1 day`
///   (the minimum one-night stay);
/// - the surviving gap exceeds the policy maximum → clamped to
///   `new_check_in + max_stay_days`;
/// - otherwise the old check-out is kept unchanged.
pub fn clamp_check_out(
    new_check_in: NaiveDate,
    old_check_out: NaiveDate,
    policy: StayPolicy,
) -> NaiveDate {
    if old_check_out <= new_check_in {
        return new_check_in + Duration::days(1);
    }
    if (old_check_out - new_check_in).num_days() > policy.max_stay_days() {
        return new_check_in + Duration::days(policy.max_stay_days());
    }
    old_check_out
}
