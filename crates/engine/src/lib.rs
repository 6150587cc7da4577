//! Rule-evaluation engine for the Schengen 90/180 calculator
//!
//! Three pure stages, leaves first:
//! - [`normalize`]: raw rows → sorted, disjoint [`NormalizedIntervals`]
//! - [`window`]: days spent in the 180-day window ending at an anchor date
//! - [`projection`]: days remaining for each candidate re-entry date,
//!   condensed into an [`Advisory`](schengen_core::Advisory)
//!
//! [`validate`] adds non-failing row checks for histories under edit, and
//! [`Engine`] binds an [`EngineConfig`] to the stages.
//!
//! # Example
//!
//! ```
//! use schengen_core::RawInterval;
//! use schengen_engine::project;
//!
//! let rows = [RawInterval::new("2024-01-01", "2024-01-10")];
//! let advisory = project(&rows, Some("2024-01-11"), 90).unwrap();
//! assert_eq!(advisory.trend[0].days_remaining, 80);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod engine;
pub mod normalize;
pub mod projection;
pub mod validate;
pub mod window;

pub use config::{EngineConfig, InvertedIntervalPolicy, CONFIG_FILE_NAME, MIN_HORIZON_DAYS};
pub use engine::{today, Engine};
pub use normalize::{merge, normalize, normalize_with, NormalizedIntervals};
pub use projection::{build_advisory, resolve_rejoin_date};
pub use validate::{validate_rows, RowIssue};
pub use window::{days_remaining, days_spent_in_window};

use chrono::NaiveDate;
use schengen_core::{Advisory, RawInterval, Result};

/// Normalize raw rows and project them forward from the rejoin date
///
/// A missing, blank or unparsable rejoin date is replaced by today. Invalid
/// history rows are never repaired: their error propagates.
pub fn project(rows: &[RawInterval], rejoin: Option<&str>, horizon_days: u32) -> Result<Advisory> {
    project_on(rows, rejoin, horizon_days, today())
}

/// Like [`project`], with an explicit date to fall back on
pub fn project_on(
    rows: &[RawInterval],
    rejoin: Option<&str>,
    horizon_days: u32,
    today: NaiveDate,
) -> Result<Advisory> {
    let intervals = normalize(rows)?;
    let rejoin = resolve_rejoin_date(rejoin, today);
    build_advisory(&intervals, rejoin, horizon_days)
}
