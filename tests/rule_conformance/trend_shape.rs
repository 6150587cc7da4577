//! Shape of the condensed trend and the summary taken from it

use crate::common::{advise, date};
use schengen::{ProjectionPoint, Summary};

#[test]
fn old_stay_rolling_out_raises_allowance() {
    // September days leave the window one per day from 2024-03-10 on
    let advisory = advise(
        &[("2023-09-01", "2023-09-30"), ("2024-01-01", "2024-02-29")],
        Some("2024-03-10"),
    );

    assert_eq!(advisory.trend.len(), 19);
    assert_eq!(advisory.trend[0], ProjectionPoint::new(date("2024-03-10"), 12));
    assert_eq!(advisory.trend[1], ProjectionPoint::new(date("2024-03-11"), 13));
    assert_eq!(
        advisory.trend.last(),
        Some(&ProjectionPoint::new(date("2024-03-28"), 30))
    );
    // Never shrinks inside the horizon, so the last value is reported
    assert_eq!(
        advisory.summary,
        Summary::Remaining {
            days: 30,
            until: date("2024-04-09")
        }
    );
}

#[test]
fn planned_trip_caps_summary_at_first_peak() {
    let advisory = advise(
        &[("2023-12-01", "2023-12-31"), ("2024-03-20", "2024-04-05")],
        Some("2024-03-01"),
    );

    assert_eq!(
        advisory.summary,
        Summary::Remaining {
            days: 59,
            until: date("2024-04-29")
        }
    );
    // Flat at 59 until the trip starts, then one day less per day inside
    assert_eq!(advisory.trend[0], ProjectionPoint::new(date("2024-03-01"), 59));
    assert_eq!(advisory.trend[1], ProjectionPoint::new(date("2024-03-20"), 58));
    assert_eq!(
        advisory.trend.last(),
        Some(&ProjectionPoint::new(date("2024-04-05"), 42))
    );
    assert_eq!(advisory.trend.len(), 18);
}

#[test]
fn trend_values_are_distinct_and_chronological() {
    let advisory = advise(
        &[("2023-12-01", "2023-12-31"), ("2024-03-20", "2024-04-05")],
        Some("2024-03-01"),
    );
    for pair in advisory.trend.windows(2) {
        assert!(pair[0].date < pair[1].date);
        assert_ne!(pair[0].days_remaining, pair[1].days_remaining);
    }
}

#[test]
fn overstay_recovering_after_horizon_gives_empty_trend() {
    let advisory = advise(&[("2024-01-01", "2024-04-01")], Some("2024-04-02"));
    assert!(advisory.trend.is_empty());
    assert!(advisory.summary.is_overstay());
}
