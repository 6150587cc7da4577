//! Fixed constants of the 90/180 rule and the rolling window they define
//!
//! ## Contract
//!
//! The rule constants are FROZEN: a traveler may spend at most
//! [`MAX_STAY_DAYS`] days inside any window of [`WINDOW_DAYS`] consecutive
//! calendar days. There is no per-country variant and no rule versioning.

use crate::date::saturating_shift;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Maximum days of presence allowed inside one rolling window
pub const MAX_STAY_DAYS: i64 = 90;

/// Length of the rolling window in calendar days, both ends inclusive
pub const WINDOW_DAYS: i64 = 180;

/// Number of days the projection looks ahead by default
pub const DEFAULT_HORIZON_DAYS: u32 = 90;

/// The closed span `[anchor - 179 days, anchor]`
///
/// Derived on demand for every anchor; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RollingWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl RollingWindow {
    /// The window whose last day is `anchor`
    ///
    /// Near `NaiveDate::MIN` the start clamps, so the window may be shorter
    /// than [`WINDOW_DAYS`] there.
    pub fn ending_at(anchor: NaiveDate) -> Self {
        Self {
            start: saturating_shift(anchor, -(WINDOW_DAYS - 1)),
            end: anchor,
        }
    }

    /// First day inside the window
    #[inline]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day inside the window (the anchor)
    #[inline]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Check if a day falls inside the window
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
