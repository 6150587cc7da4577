//! Row-level checks for a travel history under edit
//!
//! Unlike [`normalize`](crate::normalize::normalize), these checks never fail:
//! they report every problem found so a form or CLI can point at the row.
//! Blank fields are skipped since a row may still be half filled in.

use chrono::NaiveDate;
use schengen_core::date::{parse_date, parse_date_lenient};
use schengen_core::{DateField, RawInterval};
use serde::Serialize;
use std::fmt;

/// A problem with one row, or with the rejoin date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum RowIssue {
    /// A non-blank date that does not parse
    UnparsableDate {
        /// Row position
        index: usize,
        /// Field holding the text
        field: DateField,
    },
    /// Entry falls before the previous row's exit
    EntryBeforePreviousExit {
        /// Row position
        index: usize,
    },
    /// Exit falls before the row's own entry
    ExitBeforeEntry {
        /// Row position
        index: usize,
    },
    /// Rejoin date falls before the last row's exit
    RejoinBeforeLastExit,
}

impl RowIssue {
    /// Row the issue belongs to, `None` for the rejoin date
    pub fn index(&self) -> Option<usize> {
        match self {
            RowIssue::UnparsableDate { index, .. }
            | RowIssue::EntryBeforePreviousExit { index }
            | RowIssue::ExitBeforeEntry { index } => Some(*index),
            RowIssue::RejoinBeforeLastExit => None,
        }
    }
}

impl fmt::Display for RowIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowIssue::UnparsableDate { field, .. } => {
                write!(f, "The {} date is not a valid YYYY-MM-DD date.", field)
            }
            RowIssue::EntryBeforePreviousExit { .. } => {
                write!(f, "Entry date cannot be before the last exit date.")
            }
            RowIssue::ExitBeforeEntry { .. } => {
                write!(f, "Exit date cannot be before the entry date.")
            }
            RowIssue::RejoinBeforeLastExit => {
                write!(f, "Rejoin date cannot be before the last exit date.")
            }
        }
    }
}

fn parse_field(
    text: &str,
    field: DateField,
    index: usize,
    issues: &mut Vec<RowIssue>,
) -> Option<NaiveDate> {
    if text.trim().is_empty() {
        return None;
    }
    match parse_date(text, field) {
        Ok(date) => Some(date),
        Err(_) => {
            issues.push(RowIssue::UnparsableDate { index, field });
            None
        }
    }
}

/// Check rows in input order, plus the rejoin date against the last exit
///
/// An unparsable rejoin date is not reported: the projection replaces it
/// with today.
pub fn validate_rows(rows: &[RawInterval], rejoin: Option<&str>) -> Vec<RowIssue> {
    let mut issues = Vec::new();
    let mut previous_exit: Option<NaiveDate> = None;

    for (index, row) in rows.iter().enumerate() {
        let entry = parse_field(&row.entry, DateField::Entry, index, &mut issues);
        let exit = parse_field(&row.exit, DateField::Exit, index, &mut issues);

        if let (Some(entry), Some(last)) = (entry, previous_exit) {
            if entry < last {
                issues.push(RowIssue::EntryBeforePreviousExit { index });
            }
        }
        if let (Some(entry), Some(exit)) = (entry, exit) {
            if exit < entry {
                issues.push(RowIssue::ExitBeforeEntry { index });
            }
        }
        previous_exit = exit;
    }

    if let (Some(rejoin), Some(last)) = (parse_date_lenient(rejoin), previous_exit) {
        if rejoin < last {
            issues.push(RowIssue::RejoinBeforeLastExit);
        }
    }

    issues
}
