//! Normalizes raw booking-service records into booked-date ranges.
//!
//! The marketplace backend has shipped several field spellings for the same
//! two dates over its lifetime, and clients still see all of them. This
//! module is the only place that knows about that variance: everything past
//! it works with [`DateRange`] and [`BookedDates`] and never sees a raw
//! record.
//!
//! # Accepted record shapes
//!
//! A record is a JSON object carrying one check-in field and one check-out
//! field under any recognized alias:
//!
//! - `check_in_date` / `check_out_date` (canonical)
//! - `checkInDate` / `checkOutDate`
//! - `check_in` / `check_out`
//! - `checkIn` / `checkOut`
//! - `checkin` / `checkout`
//!
//! Values are ISO-date-capable strings: a bare `YYYY-MM-DD`, an RFC 3339
//! datetime, or a naive `YYYY-MM-DDTHH:MM:SS`. Datetimes are truncated to
//! their calendar day exactly as written — local calendar semantics, no
//! timezone conversion. Unrecognized shapes are hard errors rather than
//! silently skipped records: schema drift should fail loudly at this
//! boundary, not surface as phantom availability.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};

use crate::booked::BookedDates;
use crate::error::{Result, StayError};
use crate::range::DateRange;

/// Check-in field spellings, in precedence order.
const CHECK_IN_ALIASES: [&str; 5] = [
    "check_in_date",
    "checkInDate",
    "check_in",
    "checkIn",
    "checkin",
];

/// Check-out field spellings, in precedence order.
const CHECK_OUT_ALIASES: [&str; 5] = [
    "check_out_date",
    "checkOutDate",
    "check_out",
    "checkOut",
    "checkout",
];

/// Read a calendar day from an ISO-date-capable string.
///
/// Accepts a bare date (`2024-06-10`), an RFC 3339 datetime
/// (`2024-06-10T15:00:00Z`, offsets allowed), or a naive datetime
/// (`2024-06-10T15:00:00`). The time of day is dropped and the calendar day
/// is taken as written in the string — no conversion to another zone.
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    if let Ok(day) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(day);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(ndt.date());
    }
    None
}

/// Normalize a batch of raw booking records into date ranges.
///
/// Record order is preserved. The first error aborts the batch — a payload
/// with one malformed record is treated as a malformed payload.
pub fn ranges_from_records(records: &[Value]) -> Result<Vec<DateRange>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| range_from_record(index, record))
        .collect()
}

/// Parse a bookings payload (a JSON array of records) straight into the
/// day-granular booked set.
///
/// This is the one call the widget makes per fetch; the result is the
/// point-in-time snapshot every validator query runs against.
///
/// # Errors
///
/// Returns [`StayError::JsonParse`] when the payload is not a JSON array,
/// and the record-level errors of [`ranges_from_records`] otherwise.
pub fn booked_dates_from_json(json: &str) -> Result<BookedDates> {
    let records: Vec<Value> = serde_json::from_str(json)?;
    let ranges = ranges_from_records(&records)?;
    Ok(BookedDates::from_ranges(&ranges))
}

/// Normalize one record: find the two date fields, read their days, build
/// the range.
fn range_from_record(index: usize, record: &Value) -> Result<DateRange> {
    let map = record.as_object().ok_or(StayError::NotAnObject {
        index,
        found: json_type_name(record),
    })?;

    let (in_field, in_value) =
        find_alias(map, &CHECK_IN_ALIASES).ok_or(StayError::MissingCheckIn { index })?;
    let (out_field, out_value) =
        find_alias(map, &CHECK_OUT_ALIASES).ok_or(StayError::MissingCheckOut { index })?;

    let start = day_from_value(in_field, in_value)?;
    let end = day_from_value(out_field, out_value)?;
    DateRange::new(start, end)
}

/// First alias present in the record, in precedence order.
fn find_alias<'a>(
    map: &'a Map<String, Value>,
    aliases: &[&'static str],
) -> Option<(&'static str, &'a Value)> {
    aliases
        .iter()
        .find_map(|name| map.get(*name).map(|value| (*name, value)))
}

/// Read a field's value as a calendar day, with error context.
fn day_from_value(field: &'static str, value: &Value) -> Result<NaiveDate> {
    let s = value.as_str().ok_or_else(|| StayError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    })?;
    parse_day(s).ok_or_else(|| StayError::InvalidDate {
        field: field.to_string(),
        value: s.to_string(),
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
