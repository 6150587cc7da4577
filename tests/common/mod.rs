//! Shared test utilities for the integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]

use chrono::NaiveDate;
use schengen::{project_on, Advisory, RawInterval};

/// Parse an ISO date, panicking on typos in test data.
pub fn date(text: &str) -> NaiveDate {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
}

/// Build raw rows from `(entry, exit)` text pairs.
pub fn rows(pairs: &[(&str, &str)]) -> Vec<RawInterval> {
    pairs
        .iter()
        .map(|(entry, exit)| RawInterval::new(*entry, *exit))
        .collect()
}

/// Fixed "today" so fallback behaviour is reproducible.
pub const TODAY: &str = "2026-10-19";

/// Project with the default 90-day horizon and [`TODAY`] as fallback.
pub fn advise(pairs: &[(&str, &str)], rejoin: Option<&str>) -> Advisory {
    project_on(&rows(pairs), rejoin, 90, date(TODAY)).unwrap()
}
