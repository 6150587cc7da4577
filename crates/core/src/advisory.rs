//! Projection results
//!
//! An [`Advisory`] is built fresh on every evaluation and never persisted by
//! the engine. Dates stay structured; turning them into sentences or tables is
//! left to the caller.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Days remaining if the traveler re-enters on `date`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Candidate re-entry date
    pub date: NaiveDate,
    /// `90 - days spent` in the window ending at `date`
    pub days_remaining: i64,
}

impl ProjectionPoint {
    /// Create a projection point
    pub fn new(date: NaiveDate, days_remaining: i64) -> Self {
        ProjectionPoint {
            date,
            days_remaining,
        }
    }
}

/// Condensed advisory figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Summary {
    /// The traveler may still enter
    Remaining {
        /// Uninterrupted days available from the rejoin date
        days: i64,
        /// Last lawful exit date
        until: NaiveDate,
    },
    /// The traveler is over the limit on the rejoin date
    Overstay {
        /// Days over the limit
        days: i64,
        /// Date by which the traveler should have exited
        exit_by: NaiveDate,
    },
}

impl Summary {
    /// The day count carried by either variant
    pub fn days(&self) -> i64 {
        match self {
            Summary::Remaining { days, .. } | Summary::Overstay { days, .. } => *days,
        }
    }

    /// Check if this summary reports an overstay
    pub fn is_overstay(&self) -> bool {
        matches!(self, Summary::Overstay { .. })
    }
}

/// Result of projecting a travel history forward from a rejoin date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    /// Date the projection starts from, after any substitution of today
    pub rejoin_date: NaiveDate,
    /// Condensed figure
    pub summary: Summary,
    /// First date each distinct days-remaining value is observed, in order
    pub trend: Vec<ProjectionPoint>,
}

impl Advisory {
    /// First trend point, if the traveler can enter at all in the horizon
    pub fn first_point(&self) -> Option<&ProjectionPoint> {
        self.trend.first()
    }
}
