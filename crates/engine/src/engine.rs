//! Configured entry points
//!
//! [`Engine`] binds an [`EngineConfig`] to the three stages. It holds no
//! state beyond the config, so one value can serve any number of callers.

use crate::config::EngineConfig;
use crate::normalize::{normalize_with, NormalizedIntervals};
use crate::projection::{build_advisory, resolve_rejoin_date};
use crate::window::days_spent_in_window;
use chrono::NaiveDate;
use schengen_core::{Advisory, RawInterval, Result};

/// Today's calendar date on the local clock
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Stay calculator bound to a configuration
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create an engine, validating the config
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidHorizon` for out-of-range horizons.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Engine { config })
    }

    /// The active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Normalize raw rows under the configured inverted-stay policy
    pub fn normalize(&self, rows: &[RawInterval]) -> Result<NormalizedIntervals> {
        normalize_with(rows, self.config.inverted_intervals)
    }

    /// Days spent in the 180-day window ending at `anchor`
    pub fn days_spent_in_window(&self, intervals: &NormalizedIntervals, anchor: NaiveDate) -> i64 {
        days_spent_in_window(intervals, anchor)
    }

    /// Project raw rows forward from the rejoin date, defaulting to today
    pub fn project(&self, rows: &[RawInterval], rejoin: Option<&str>) -> Result<Advisory> {
        self.project_on(rows, rejoin, today())
    }

    /// Project raw rows forward, with `today` as the rejoin fallback
    ///
    /// Errors from the history propagate; only the rejoin date is repaired.
    pub fn project_on(
        &self,
        rows: &[RawInterval],
        rejoin: Option<&str>,
        today: NaiveDate,
    ) -> Result<Advisory> {
        let intervals = self.normalize(rows)?;
        let rejoin = resolve_rejoin_date(rejoin, today);
        build_advisory(&intervals, rejoin, self.config.horizon_days)
    }
}
