//! Interval normalization
//!
//! Turns raw entry/exit rows into a [`NormalizedIntervals`] set: sorted by
//! entry, pairwise disjoint, with touching stays merged. Every later stage
//! relies on that shape, so it can only be built here.
//!
//! Normalization is all-or-nothing. One unparsable date rejects the whole
//! batch because it would corrupt the sort order.

use crate::config::InvertedIntervalPolicy;
use schengen_core::{Error, RawInterval, Result, StayInterval};
use tracing::{debug, warn};

/// Sorted, non-overlapping stays
///
/// ## Invariants
///
/// - Ascending by entry
/// - For adjacent `(a, b)`: `a.exit < b.entry`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedIntervals(Vec<StayInterval>);

impl NormalizedIntervals {
    /// The empty history
    pub fn empty() -> Self {
        NormalizedIntervals(Vec::new())
    }

    /// Stays in ascending order
    #[inline]
    pub fn as_slice(&self) -> &[StayInterval] {
        &self.0
    }

    /// Number of disjoint stays
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no stays at all
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total days covered; no day is counted twice
    pub fn total_days(&self) -> i64 {
        self.0.iter().map(StayInterval::days).sum()
    }
}

/// Sort and merge already-validated stays
///
/// A stay whose entry is on or before the current merged exit (touching
/// counts) extends it; otherwise it starts a new merged stay. The sort is
/// stable, so ties keep their input order.
pub fn merge<I>(stays: I) -> NormalizedIntervals
where
    I: IntoIterator<Item = StayInterval>,
{
    let mut sorted: Vec<StayInterval> = stays.into_iter().collect();
    sorted.sort_by_key(StayInterval::entry);

    let mut merged: Vec<StayInterval> = Vec::with_capacity(sorted.len());
    for stay in sorted {
        match merged.last_mut() {
            Some(current) if stay.entry() <= current.exit() => {
                *current = current.extended_to(stay.exit());
            }
            _ => merged.push(stay),
        }
    }

    NormalizedIntervals(merged)
}

/// Parse, validate and merge raw rows, rejecting inverted stays
///
/// # Errors
///
/// - `Error::InvalidDate` if any entry or exit does not parse
/// - `Error::InvertedInterval` if any exit precedes its entry
pub fn normalize(rows: &[RawInterval]) -> Result<NormalizedIntervals> {
    normalize_with(rows, InvertedIntervalPolicy::Reject)
}

/// Parse, validate and merge raw rows under an explicit inverted-stay policy
///
/// With `InvertedIntervalPolicy::Skip` an inverted row is dropped and
/// contributes zero days. Unparsable dates are rejected under every policy.
pub fn normalize_with(
    rows: &[RawInterval],
    policy: InvertedIntervalPolicy,
) -> Result<NormalizedIntervals> {
    let mut stays = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let (entry, exit) = row.parse_dates()?;
        match StayInterval::new(entry, exit) {
            Some(stay) => stays.push(stay),
            None => match policy {
                InvertedIntervalPolicy::Reject => {
                    return Err(Error::InvertedInterval { index, entry, exit });
                }
                InvertedIntervalPolicy::Skip => {
                    warn!(index, %entry, %exit, "Skipping stay that exits before it enters");
                }
            },
        }
    }

    let normalized = merge(stays);
    debug!(
        rows = rows.len(),
        stays = normalized.len(),
        days = normalized.total_days(),
        "Normalized travel history"
    );
    Ok(normalized)
}
