//! Day-granular booked-date membership for a single venue.
//!
//! The booking service hands back intervals; the calendar widget asks about
//! individual days. [`BookedDates`] bridges the two by expanding every
//! interval into its member days once, up front, so each query afterwards is
//! a plain set lookup.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::range::DateRange;

/// The set of days already reserved for a venue.
///
/// This is the point-in-time snapshot the validators run against: it is
/// built once per fetch and never refreshed behind the caller's back.
///
/// Expansion is inclusive of both endpoints — a booking of June 10th through
/// June 12th marks the 10th, 11th *and* 12th as booked. The marketplace
/// populates its calendars this way (the checkout day is not resold), so the
/// expansion matches what guests see.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookedDates {
    days: BTreeSet<NaiveDate>,
}

impl BookedDates {
    /// Empty calendar.
    ///
    /// Also the fail-open value when the bookings fetch fails: validation
    /// proceeds with "no known conflicts" and the caller surfaces the fetch
    /// error separately.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Expand intervals into day membership, inclusive of both endpoints.
    pub fn from_ranges(ranges: &[DateRange]) -> Self {
        let mut days = BTreeSet::new();
        for range in ranges {
            days.extend(range.days_inclusive());
        }
        Self { days }
    }

    /// Whether `day` is reserved.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.days.contains(&day)
    }

    /// Whether no days are reserved.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of reserved days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Reserved days in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().copied()
    }
}
