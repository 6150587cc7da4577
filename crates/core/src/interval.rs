//! Stay intervals
//!
//! A stay has two shapes:
//! - **RawInterval**: the entry/exit text exactly as a collaborator collected it
//! - **StayInterval**: a validated, inclusive `[entry, exit]` span of calendar days
//!
//! ## Validation
//!
//! A StayInterval can only be built with `entry <= exit`. A stay from day D to
//! day D is one day long, never zero.

use crate::date::{days_between, parse_date};
use crate::error::{DateField, Error, Result};
use crate::rules::RollingWindow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One continuous presence inside the area, both bounds inclusive
///
/// ## Invariants
///
/// - `entry <= exit`
/// - Immutable once built; merging produces new values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "StayRepr")]
pub struct StayInterval {
    entry: NaiveDate,
    exit: NaiveDate,
}

#[derive(Deserialize)]
struct StayRepr {
    entry: NaiveDate,
    exit: NaiveDate,
}

impl TryFrom<StayRepr> for StayInterval {
    type Error = Error;

    fn try_from(repr: StayRepr) -> Result<Self> {
        StayInterval::new(repr.entry, repr.exit).ok_or(Error::InvertedInterval {
            index: 0,
            entry: repr.entry,
            exit: repr.exit,
        })
    }
}

impl StayInterval {
    /// Create a stay, returning `None` if `exit` precedes `entry`
    pub fn new(entry: NaiveDate, exit: NaiveDate) -> Option<Self> {
        (entry <= exit).then_some(StayInterval { entry, exit })
    }

    /// A stay of exactly one day
    pub fn single_day(date: NaiveDate) -> Self {
        StayInterval {
            entry: date,
            exit: date,
        }
    }

    /// Day of entry
    #[inline]
    pub fn entry(&self) -> NaiveDate {
        self.entry
    }

    /// Day of exit
    #[inline]
    pub fn exit(&self) -> NaiveDate {
        self.exit
    }

    /// Length of the stay in days, counting both entry and exit day
    pub fn days(&self) -> i64 {
        days_between(self.entry, self.exit) + 1
    }

    /// Days of this stay that fall inside `window`
    ///
    /// Stays spanning the whole window are clipped to it.
    pub fn overlap_days(&self, window: &RollingWindow) -> i64 {
        let start = self.entry.max(window.start());
        let end = self.exit.min(window.end());
        if start <= end {
            days_between(start, end) + 1
        } else {
            0
        }
    }

    /// Copy of this stay with a later exit, if `exit` extends it
    pub fn extended_to(&self, exit: NaiveDate) -> Self {
        StayInterval {
            entry: self.entry,
            exit: self.exit.max(exit),
        }
    }
}

impl fmt::Display for StayInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.entry, self.exit)
    }
}

/// Unvalidated entry/exit text for one stay
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawInterval {
    /// Entry date text, expected `YYYY-MM-DD`
    #[serde(default)]
    pub entry: String,
    /// Exit date text, expected `YYYY-MM-DD`
    #[serde(default)]
    pub exit: String,
}

impl RawInterval {
    /// Create a raw row from any text
    pub fn new(entry: impl Into<String>, exit: impl Into<String>) -> Self {
        RawInterval {
            entry: entry.into(),
            exit: exit.into(),
        }
    }

    /// Check if both fields are blank (a row still being filled in)
    pub fn is_blank(&self) -> bool {
        self.entry.trim().is_empty() && self.exit.trim().is_empty()
    }

    /// Parse both dates without checking their order
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDate` for the first field that does not parse.
    pub fn parse_dates(&self) -> Result<(NaiveDate, NaiveDate)> {
        let entry = parse_date(&self.entry, DateField::Entry)?;
        let exit = parse_date(&self.exit, DateField::Exit)?;
        Ok((entry, exit))
    }

    /// Parse into a validated stay
    ///
    /// `index` is the row's position in the caller's input and is reported
    /// back in `Error::InvertedInterval`.
    pub fn parse(&self, index: usize) -> Result<StayInterval> {
        let (entry, exit) = self.parse_dates()?;
        StayInterval::new(entry, exit).ok_or(Error::InvertedInterval { index, entry, exit })
    }
}

impl From<StayInterval> for RawInterval {
    fn from(stay: StayInterval) -> Self {
        RawInterval::new(stay.entry.to_string(), stay.exit.to_string())
    }
}
