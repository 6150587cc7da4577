//! Rolling-window accounting
//!
//! Counts the days spent inside the area during the 180-day window ending at
//! an anchor date. Relies on [`NormalizedIntervals`] being sorted and
//! disjoint: no day is counted twice, and stays outside the window are
//! skipped without being visited.

use crate::normalize::NormalizedIntervals;
use chrono::NaiveDate;
use schengen_core::{RollingWindow, MAX_STAY_DAYS};

/// Days spent inside the window `[anchor - 179, anchor]`
///
/// Always in `0..=180`.
pub fn days_spent_in_window(intervals: &NormalizedIntervals, anchor: NaiveDate) -> i64 {
    let window = RollingWindow::ending_at(anchor);
    let stays = intervals.as_slice();

    // Exits are sorted too, so everything before `first` ends before the window
    let first = stays.partition_point(|stay| stay.exit() < window.start());

    stays[first..]
        .iter()
        .take_while(|stay| stay.entry() <= window.end())
        .map(|stay| stay.overlap_days(&window))
        .sum()
}

/// `90 - days spent` for the window ending at `anchor`; negative on overstay
pub fn days_remaining(intervals: &NormalizedIntervals, anchor: NaiveDate) -> i64 {
    MAX_STAY_DAYS - days_spent_in_window(intervals, anchor)
}
