//! WASM bindings for stay-engine.
//!
//! Exposes the date validators, the range conflict walk, and the check-out
//! clamp to the booking widget via `wasm-bindgen`. Dates cross the boundary
//! as ISO strings and bookings payloads as JSON strings; structured results
//! come back as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p stay-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/stay-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/stay_engine_wasm.wasm
//! ```

use chrono::NaiveDate;
use serde::Serialize;
use stay_engine::{adapter, BookedDates, RejectReason, StayPolicy, StaySelection, Verdict};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// The shape the widget reads: `{ valid, reason }`, with `reason` null when
/// the date passed.
#[derive(Serialize)]
struct VerdictDto {
    valid: bool,
    reason: Option<RejectReason>,
}

impl From<Verdict> for VerdictDto {
    fn from(verdict: Verdict) -> Self {
        Self {
            valid: verdict.is_bookable(),
            reason: verdict.reason(),
        }
    }
}

#[derive(Serialize)]
struct ReviewDto {
    check_in: VerdictDto,
    check_out: VerdictDto,
    range_conflict: bool,
    bookable: bool,
}

// ---------------------------------------------------------------------------
// Helpers: parse boundary inputs
// ---------------------------------------------------------------------------

/// Parse an ISO date string (`YYYY-MM-DD`, or a datetime whose day is taken
/// as written) into a `NaiveDate`.
fn parse_date(s: &str) -> Result<NaiveDate, JsValue> {
    adapter::parse_day(s).ok_or_else(|| JsValue::from_str(&format!("Invalid date '{}'", s)))
}

/// Parse a bookings payload (JSON array of booking records) into the
/// day-granular booked set.
fn parse_bookings(json: &str) -> Result<BookedDates, JsValue> {
    stay_engine::booked_dates_from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Stay-length policy from an optional override; the marketplace default is
/// three nights.
fn policy_from(max_stay_days: Option<u32>) -> StayPolicy {
    max_stay_days
        .map(|days| StayPolicy::with_max_stay_days(i64::from(days)))
        .unwrap_or_default()
}

fn to_json<T: Serialize>(dto: &T) -> Result<String, JsValue> {
    serde_json::to_string(dto)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Whether a day falls on any reserved date.
///
/// # Arguments
/// - `date` -- ISO date string (e.g., "2024-06-11")
/// - `bookings_json` -- JSON array of booking records (any recognized
///   check-in/check-out field spelling)
#[wasm_bindgen(js_name = "isDateBooked")]
pub fn is_date_booked(date: &str, bookings_json: &str) -> Result<bool, JsValue> {
    let date = parse_date(date)?;
    let booked = parse_bookings(bookings_json)?;
    Ok(stay_engine::is_date_booked(date, &booked))
}

/// Validate a candidate check-in date.
///
/// Returns a JSON string of `{valid, reason}`; `reason` is null when valid,
/// otherwise one of `"past_date"` or `"date_booked"`.
///
/// # Arguments
/// - `date` -- candidate check-in, ISO date string
/// - `today` -- the widget's current day, ISO date string
/// - `bookings_json` -- JSON array of booking records
#[wasm_bindgen(js_name = "validateCheckIn")]
pub fn validate_check_in(date: &str, today: &str, bookings_json: &str) -> Result<String, JsValue> {
    let date = parse_date(date)?;
    let today = parse_date(today)?;
    let booked = parse_bookings(bookings_json)?;

    let dto = VerdictDto::from(stay_engine::validate_check_in(date, today, &booked));
    to_json(&dto)
}

/// Validate a candidate check-out date against a chosen check-in.
///
/// Returns a JSON string of `{valid, reason}`; `reason` is null when valid,
/// otherwise one of `"past_date"`, `"before_check_in"`, `"date_booked"` or
/// `"stay_too_long"`.
///
/// # Arguments
/// - `date` -- candidate check-out, ISO date string
/// - `check_in` -- the chosen check-in, ISO date string
/// - `today` -- the widget's current day, ISO date string
/// - `bookings_json` -- JSON array of booking records
/// - `max_stay_days` -- optional stay-length limit (default 3)
#[wasm_bindgen(js_name = "validateCheckOut")]
pub fn validate_check_out(
    date: &str,
    check_in: &str,
    today: &str,
    bookings_json: &str,
    max_stay_days: Option<u32>,
) -> Result<String, JsValue> {
    let date = parse_date(date)?;
    let check_in = parse_date(check_in)?;
    let today = parse_date(today)?;
    let booked = parse_bookings(bookings_json)?;

    let verdict =
        stay_engine::validate_check_out(date, check_in, today, &booked, policy_from(max_stay_days));
    to_json(&VerdictDto::from(verdict))
}

/// Whether any day of the candidate stay collides with a reservation.
///
/// # Arguments
/// - `check_in` / `check_out` -- the candidate stay, ISO date strings
/// - `bookings_json` -- JSON array of booking records
#[wasm_bindgen(js_name = "hasRangeConflict")]
pub fn has_range_conflict(
    check_in: &str,
    check_out: &str,
    bookings_json: &str,
) -> Result<bool, JsValue> {
    let check_in = parse_date(check_in)?;
    let check_out = parse_date(check_out)?;
    let booked = parse_bookings(bookings_json)?;

    Ok(stay_engine::has_range_conflict(check_in, check_out, &booked))
}

/// Re-anchor a check-out date after the check-in moved.
///
/// Returns the corrected check-out as an ISO date string: the day after the
/// new check-in when the old check-out no longer follows it, clamped to the
/// stay-length limit when the gap grew too wide, unchanged otherwise.
///
/// # Arguments
/// - `new_check_in` -- where check-in moved, ISO date string
/// - `old_check_out` -- the check-out on record, ISO date string
/// - `max_stay_days` -- optional stay-length limit (default 3)
#[wasm_bindgen(js_name = "clampCheckOut")]
pub fn clamp_check_out(
    new_check_in: &str,
    old_check_out: &str,
    max_stay_days: Option<u32>,
) -> Result<String, JsValue> {
    let new_check_in = parse_date(new_check_in)?;
    let old_check_out = parse_date(old_check_out)?;

    let clamped =
        stay_engine::clamp_check_out(new_check_in, old_check_out, policy_from(max_stay_days));
    Ok(clamped.to_string())
}

/// Run the full pre-submit review of a candidate stay.
///
/// Returns a JSON string of `{check_in, check_out, range_conflict, bookable}`
/// where the first two are `{valid, reason}` objects. `bookable` is the
/// single gate the submit button keys off.
///
/// # Arguments
/// - `check_in` / `check_out` -- the candidate stay, ISO date strings
/// - `today` -- the widget's current day, ISO date string
/// - `bookings_json` -- JSON array of booking records
/// - `max_stay_days` -- optional stay-length limit (default 3)
#[wasm_bindgen(js_name = "reviewSelection")]
pub fn review_selection(
    check_in: &str,
    check_out: &str,
    today: &str,
    bookings_json: &str,
    max_stay_days: Option<u32>,
) -> Result<String, JsValue> {
    let selection = StaySelection {
        check_in: parse_date(check_in)?,
        check_out: parse_date(check_out)?,
    };
    let today = parse_date(today)?;
    let booked = parse_bookings(bookings_json)?;

    let review = selection.review(today, &booked, policy_from(max_stay_days));
    let dto = ReviewDto {
        check_in: VerdictDto::from(review.check_in),
        check_out: VerdictDto::from(review.check_out),
        range_conflict: review.range_conflict,
        bookable: review.is_bookable(),
    };
    to_json(&dto)
}
