//! # stay-engine
//!
//! Booked-date conflict checks and check-in/check-out validation for venue
//! booking calendars.
//!
//! Every operation is a pure function over `chrono::NaiveDate`: the caller
//! supplies "today", the booked-day snapshot, and the stay-length policy,
//! and gets back a verdict it can render directly. Nothing reads the clock,
//! nothing caches between calls, and no timezone conversion ever happens —
//! a calendar day is compared exactly as written.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use stay_engine::{is_date_booked, validate_check_in, BookedDates, DateRange, RejectReason, Verdict};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let booked = BookedDates::from_ranges(&[DateRange::new(
//!     NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
//! )
//! .unwrap()]);
//!
//! // The checkout day of an existing booking counts as occupied.
//! assert!(is_date_booked(NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(), &booked));
//!
//! // A free future day is bookable.
//! let free = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
//! assert!(validate_check_in(free, today, &booked).is_bookable());
//!
//! // A booked day is rejected with a reason the UI can show.
//! let taken = NaiveDate::from_ymd_opt(2024, 6, 11).unwrap();
//! assert_eq!(
//!     validate_check_in(taken, today, &booked),
//!     Verdict::Rejected(RejectReason::DateBooked)
//! );
//! ```
//!
//! ## Modules
//!
//! - [`validator`] — Per-date verdicts and the whole-range conflict walk
//! - [`selection`] — The user's candidate stay and its pre-submit review
//! - [`booked`] — The set of unavailable days for a venue
//! - [`adapter`] — Listing-API booking records → booked-day set
//! - [`snapshot`] — Latest-request-wins holder for fetched availability
//! - [`range`] — Validated date ranges
//! - [`policy`] — Stay-length limits
//! - [`error`] — Error types

pub mod adapter;
pub mod booked;
pub mod error;
pub mod policy;
pub mod range;
pub mod selection;
pub mod snapshot;
pub mod validator;

pub use adapter::booked_dates_from_json;
pub use booked::BookedDates;
pub use error::{Result, StayError};
pub use policy::{StayPolicy, DEFAULT_MAX_STAY_DAYS};
pub use range::DateRange;
pub use selection::{SelectionReview, StaySelection};
pub use snapshot::{FetchTicket, SnapshotSlot};
pub use validator::{
    clamp_check_out, has_range_conflict, is_date_booked, validate_check_in, validate_check_out,
    RejectReason, Verdict,
};
