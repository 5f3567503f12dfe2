//! Error types for booking-source normalization.
//!
//! Only contract violations live here: unparseable payloads, unrecognized
//! record shapes, values that cannot be read as calendar days. A user picking
//! an unbookable date is never an error — that outcome is a
//! [`crate::Verdict`], returned as a normal value.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while normalizing upstream booking records.
#[derive(Error, Debug)]
pub enum StayError {
    /// The bookings payload was not valid JSON.
    #[error("Bookings JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A booking record was not a JSON object.
    #[error("Booking record {index}: expected an object, found {found}")]
    NotAnObject { index: usize, found: &'static str },

    /// A booking record carried no recognized check-in field.
    #[error("Booking record {index}: no recognized check-in field")]
    MissingCheckIn { index: usize },

    /// A booking record carried no recognized check-out field.
    #[error("Booking record {index}: no recognized check-out field")]
    MissingCheckOut { index: usize },

    /// A date field held a value that cannot be read as a calendar day.
    #[error("Invalid date {value} in field '{field}'")]
    InvalidDate { field: String, value: String },

    /// A booking ended before it started.
    #[error("Inverted range: check-in {start} is after check-out {end}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },
}

/// Convenience alias used throughout stay-engine.
pub type Result<T> = std::result::Result<T, StayError>;
