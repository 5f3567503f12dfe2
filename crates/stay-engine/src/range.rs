//! Calendar-day ranges with validated construction and day iteration.

use chrono::{Duration, NaiveDate};

use crate::error::{Result, StayError};

/// A pair of calendar days with `start <= end`, enforced at construction.
///
/// A candidate stay reads the range half-open — the guest occupies
/// `[start, end)` and `end` is checkout morning. The booked-day expansion
/// reads it inclusive instead; see [`crate::booked::BookedDates`] for why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(StayError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// First day of the range.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range (checkout day for a booking).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `day` falls in the half-open `[start, end)`.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day < self.end
    }

    /// Nights spanned: `end - start` in whole days.
    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Iterate the days in `[start, end)`.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        let count = (self.end - self.start).num_days();
        (0..count).map(move |i| start + Duration::days(i))
    }

    /// Iterate the days in `[start, end]` — the booked-day expansion order,
    /// which marks the checkout day too.
    pub fn days_inclusive(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        let count = (self.end - self.start).num_days();
        (0..=count).map(move |i| start + Duration::days(i))
    }
}
