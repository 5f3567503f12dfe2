//! Caller-owned candidate selection and the pre-submit review gate.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::booked::BookedDates;
use crate::policy::StayPolicy;
use crate::validator::{self, RejectReason, Verdict};

/// The user's in-progress check-in/check-out choice.
///
/// Owned by the active booking session and passed explicitly to every call —
/// nothing here touches ambient storage. Carrying a selection across
/// navigation is the caller's serde round-trip, done deliberately at the
/// boundary where it persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaySelection {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl StaySelection {
    /// Fresh selection: tonight, one night.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            check_in: today,
            check_out: today + Duration::days(1),
        }
    }

    /// Move check-in, re-anchoring check-out so the pair never goes silently
    /// invalid (see [`validator::clamp_check_out`]).
    pub fn set_check_in(&mut self, date: NaiveDate, policy: StayPolicy) {
        self.check_in = date;
        self.check_out = validator::clamp_check_out(date, self.check_out, policy);
    }

    /// Move check-out. No adjustment here — the next review reports any
    /// violation.
    pub fn set_check_out(&mut self, date: NaiveDate) {
        self.check_out = date;
    }

    /// Nights in the candidate stay.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Re-validate the whole selection from scratch.
    ///
    /// Runs both endpoint validators plus the full range walk; nothing is
    /// cached between edits, so a review is always current.
    pub fn review(
        &self,
        today: NaiveDate,
        booked: &BookedDates,
        policy: StayPolicy,
    ) -> SelectionReview {
        let check_in = validator::validate_check_in(self.check_in, today, booked);

        // A zero-night stay passes endpoint validation (check-out is not
        // strictly earlier than check-in) but is never bookable.
        let check_out = if self.check_out == self.check_in {
            Verdict::Rejected(RejectReason::BeforeCheckIn)
        } else {
            validator::validate_check_out(self.check_out, self.check_in, today, booked, policy)
        };

        let range_conflict =
            validator::has_range_conflict(self.check_in, self.check_out, booked);

        SelectionReview {
            check_in,
            check_out,
            range_conflict,
        }
    }
}

/// Everything the submit gate needs, recomputed in one pass.
///
/// The endpoint verdicts only inspect the day that was edited; the range
/// walk is what catches a stay spanning a booked block whose endpoints are
/// both free. Submission requires all three to pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionReview {
    pub check_in: Verdict,
    pub check_out: Verdict,
    pub range_conflict: bool,
}

impl SelectionReview {
    /// Whether the booking attempt may proceed.
    pub fn is_bookable(&self) -> bool {
        self.check_in.is_bookable() && self.check_out.is_bookable() && !self.range_conflict
    }
}
