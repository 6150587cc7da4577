//! Calendar-day primitives
//!
//! All date arithmetic in the workspace goes through this module. Dates are
//! `chrono::NaiveDate` values: no time of day, no timezone, so the same input
//! always yields the same day counts regardless of where the code runs.
//!
//! ## Usage
//!
//! ```
//! use schengen_core::date::{days_between, parse_date, shift};
//! use schengen_core::DateField;
//!
//! let entry = parse_date("2024-01-01", DateField::Entry).unwrap();
//! let exit = parse_date("2024-01-10", DateField::Exit).unwrap();
//! assert_eq!(days_between(entry, exit), 9);
//! assert_eq!(shift(entry, 9), Some(exit));
//! ```

use crate::error::{DateField, Error, Result};
use chrono::{Days, NaiveDate};

/// Text format accepted for every date input
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse ISO `YYYY-MM-DD` text into a calendar date
///
/// Leading and trailing whitespace is ignored.
///
/// # Errors
///
/// Returns `Error::InvalidDate` tagged with `field` if the text is blank or
/// does not name a real calendar day.
pub fn parse_date(text: &str, field: DateField) -> Result<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_date(field, text));
    }
    NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT).map_err(|_| Error::invalid_date(field, text))
}

/// Parse optional date text, treating blank input as absent
///
/// Returns `None` for `None`, blank, or unparsable text. Used only where a
/// missing date is repaired rather than rejected.
pub fn parse_date_lenient(text: Option<&str>) -> Option<NaiveDate> {
    let text = text?;
    if text.trim().is_empty() {
        return None;
    }
    parse_date(text, DateField::Rejoin).ok()
}

/// Whole calendar days from `from` to `to`
///
/// Negative when `to` is before `from`. This is the only day-difference
/// primitive in the workspace.
#[inline]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Shift a date by a signed number of calendar days
///
/// Returns `None` if the result falls outside chrono's representable range.
pub fn shift(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

/// Shift a date by a signed number of days, clamping at the representable range
pub fn saturating_shift(date: NaiveDate, days: i64) -> NaiveDate {
    shift(date, days).unwrap_or(if days >= 0 {
        NaiveDate::MAX
    } else {
        NaiveDate::MIN
    })
}
