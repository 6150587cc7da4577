//! Stay projection
//!
//! Drives the window accountant across the candidate re-entry dates that
//! start at the rejoin date and builds an [`Advisory`]:
//! - a dense trend of `(date, days remaining)` points, omitting overstays
//! - a summary figure taken from that dense trend
//! - the trend condensed to the first date each distinct value appears
//!
//! ## Summary rule
//!
//! The initial stay length is the value at the first point whose successor
//! is strictly smaller (the first peak before the count starts shrinking),
//! or the last point if it never shrinks. Plateaus and ties are walked
//! through, not treated as peaks.

use crate::config::MIN_HORIZON_DAYS;
use crate::normalize::NormalizedIntervals;
use crate::window::{days_remaining, days_spent_in_window};
use chrono::NaiveDate;
use schengen_core::date::{parse_date_lenient, saturating_shift, shift};
use schengen_core::{Advisory, Error, ProjectionPoint, Result, Summary, MAX_STAY_DAYS};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Resolve the rejoin date, falling back to `today`
///
/// Absent, blank, and unparsable text all resolve to `today`. This is the
/// only input the engine repairs instead of rejecting.
pub fn resolve_rejoin_date(text: Option<&str>, today: NaiveDate) -> NaiveDate {
    match parse_date_lenient(text) {
        Some(date) => date,
        None => {
            match text {
                Some(raw) if !raw.trim().is_empty() => {
                    warn!(rejoin = raw, %today, "Unparsable rejoin date, using today");
                }
                _ => debug!(%today, "No rejoin date given, using today"),
            }
            today
        }
    }
}

/// Days remaining for each candidate date, skipping overstays
///
/// Candidates are `rejoin + i` for `i` in `0..horizon_days - 1`.
pub fn dense_trend(
    intervals: &NormalizedIntervals,
    rejoin: NaiveDate,
    horizon_days: u32,
) -> Vec<ProjectionPoint> {
    let last_offset = i64::from(horizon_days.saturating_sub(1));
    (0..last_offset)
        .map_while(|offset| shift(rejoin, offset))
        .map(|candidate| ProjectionPoint::new(candidate, days_remaining(intervals, candidate)))
        .filter(|point| point.days_remaining >= 0)
        .collect()
}

/// Value at the first point followed by a strictly smaller one, or the last value
pub fn initial_stay_length(trend: &[ProjectionPoint]) -> Option<i64> {
    trend
        .windows(2)
        .find(|pair| pair[1].days_remaining < pair[0].days_remaining)
        .map(|pair| pair[0].days_remaining)
        .or_else(|| trend.last().map(|point| point.days_remaining))
}

/// Keep the first point for each distinct days-remaining value, in order
pub fn first_occurrences(trend: Vec<ProjectionPoint>) -> Vec<ProjectionPoint> {
    let mut seen = HashSet::new();
    trend
        .into_iter()
        .filter(|point| seen.insert(point.days_remaining))
        .collect()
}

/// Build the advisory for a normalized history and a resolved rejoin date
///
/// The summary is read off the dense trend, which leaves out overstayed
/// dates. If the rejoin date itself is over the limit but a later candidate
/// recovers inside the horizon, the summary is that later value anchored at
/// the rejoin date, e.g. `Remaining { days: 0, until: rejoin }`. Callers can
/// detect this when the first trend point is dated after `rejoin_date`.
///
/// # Errors
///
/// Returns `Error::InvalidHorizon` if `horizon_days` is too short to
/// evaluate the rejoin date itself.
pub fn build_advisory(
    intervals: &NormalizedIntervals,
    rejoin: NaiveDate,
    horizon_days: u32,
) -> Result<Advisory> {
    if horizon_days < MIN_HORIZON_DAYS {
        return Err(Error::InvalidHorizon(horizon_days));
    }

    let trend = dense_trend(intervals, rejoin, horizon_days);

    let summary = match initial_stay_length(&trend) {
        Some(days) => Summary::Remaining {
            days,
            until: saturating_shift(rejoin, days),
        },
        None => {
            let overstay = days_spent_in_window(intervals, rejoin) - MAX_STAY_DAYS;
            Summary::Overstay {
                days: overstay,
                exit_by: saturating_shift(rejoin, -overstay),
            }
        }
    };

    let trend = first_occurrences(trend);
    debug!(
        %rejoin,
        horizon_days,
        points = trend.len(),
        summary_days = summary.days(),
        overstay = summary.is_overstay(),
        "Projected stay"
    );

    Ok(Advisory {
        rejoin_date: rejoin,
        summary,
        trend,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::merge;
    use schengen_core::StayInterval;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn history(stays: &[(NaiveDate, NaiveDate)]) -> NormalizedIntervals {
        merge(stays.iter().map(|&(a, b)| StayInterval::new(a, b).unwrap()))
    }

    fn points(values: &[i64]) -> Vec<ProjectionPoint> {
        let start = d(2024, 1, 1);
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| ProjectionPoint::new(shift(start, i as i64).unwrap(), v))
            .collect()
    }

    #[test]
    fn test_resolve_rejoin_date() {
        let today = d(2026, 10, 19);
        assert_eq!(resolve_rejoin_date(Some("2024-04-02"), today), d(2024, 4, 2));
        assert_eq!(resolve_rejoin_date(Some(""), today), today);
        assert_eq!(resolve_rejoin_date(Some("  "), today), today);
        assert_eq!(resolve_rejoin_date(Some("2024-02-30"), today), today);
        assert_eq!(resolve_rejoin_date(None, today), today);
    }

    #[test]
    fn test_dense_trend_length() {
        let trend = dense_trend(&NormalizedIntervals::empty(), d(2024, 1, 1), 90);
        assert_eq!(trend.len(), 89);
        assert_eq!(trend[0], ProjectionPoint::new(d(2024, 1, 1), 90));
        assert_eq!(trend[88].date, d(2024, 3, 29));
    }

    #[test]
    fn test_initial_stay_length_first_peak() {
        assert_eq!(initial_stay_length(&points(&[5, 7, 7, 3, 9])), Some(7));
        assert_eq!(initial_stay_length(&points(&[8, 2])), Some(8));
    }

    #[test]
    fn test_initial_stay_length_never_decreasing() {
        assert_eq!(initial_stay_length(&points(&[1, 1, 2, 4])), Some(4));
        assert_eq!(initial_stay_length(&points(&[0])), Some(0));
        assert_eq!(initial_stay_length(&[]), None);
    }

    #[test]
    fn test_first_occurrences_keeps_first_date() {
        let deduped = first_occurrences(points(&[3, 3, 4, 3, 5, 4]));
        let values: Vec<i64> = deduped.iter().map(|p| p.days_remaining).collect();
        assert_eq!(values, vec![3, 4, 5]);
        assert_eq!(deduped[0].date, d(2024, 1, 1));
        assert_eq!(deduped[1].date, d(2024, 1, 3));
        assert_eq!(deduped[2].date, d(2024, 1, 5));
    }

    #[test]
    fn test_advisory_remaining() {
        let intervals = history(&[(d(2024, 1, 1), d(2024, 1, 10))]);
        let advisory = build_advisory(&intervals, d(2024, 1, 11), 90).unwrap();
        assert_eq!(
            advisory.summary,
            Summary::Remaining {
                days: 80,
                until: d(2024, 3, 31)
            }
        );
        assert_eq!(advisory.trend, vec![ProjectionPoint::new(d(2024, 1, 11), 80)]);
    }

    #[test]
    fn test_advisory_overstay() {
        let intervals = history(&[(d(2024, 1, 1), d(2024, 4, 1))]);
        let advisory = build_advisory(&intervals, d(2024, 4, 2), 90).unwrap();
        assert!(advisory.trend.is_empty());
        assert_eq!(
            advisory.summary,
            Summary::Overstay {
                days: 2,
                exit_by: d(2024, 3, 31)
            }
        );
    }

    #[test]
    fn test_advisory_recovers_inside_horizon() {
        // Over the limit on the rejoin date, back to zero once old days roll out
        let intervals = history(&[(d(2024, 1, 1), d(2024, 4, 1))]);
        let advisory = build_advisory(&intervals, d(2024, 4, 2), 91).unwrap();
        assert_eq!(advisory.trend, vec![ProjectionPoint::new(d(2024, 6, 30), 0)]);
        assert_eq!(
            advisory.summary,
            Summary::Remaining {
                days: 0,
                until: d(2024, 4, 2)
            }
        );
    }

    #[test]
    fn test_advisory_json_round_trip() {
        let intervals = history(&[(d(2024, 1, 1), d(2024, 1, 10))]);
        let advisory = build_advisory(&intervals, d(2024, 1, 11), 90).unwrap();
        let json = serde_json::to_string(&advisory).unwrap();
        assert!(json.contains("\"rejoin_date\":\"2024-01-11\""));
        let back: Advisory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, advisory);
    }

    #[test]
    fn test_short_horizon_rejected() {
        let err = build_advisory(&NormalizedIntervals::empty(), d(2024, 1, 1), 1).unwrap_err();
        assert!(matches!(err, Error::InvalidHorizon(1)));
    }
}
