//! Worked examples of the rule

use crate::common::{advise, date, rows, TODAY};
use schengen::{days_spent_in_window, normalize, ProjectionPoint, StayInterval, Summary};

#[test]
fn no_history_rejoin_today_has_full_allowance() {
    let advisory = advise(&[], None);
    assert_eq!(advisory.rejoin_date, date(TODAY));
    assert_eq!(advisory.trend[0], ProjectionPoint::new(date(TODAY), 90));
    assert_eq!(advisory.trend.len(), 1);
    assert_eq!(
        advisory.summary,
        Summary::Remaining {
            days: 90,
            until: date("2027-01-17")
        }
    );
}

#[test]
fn ten_day_stay_leaves_eighty() {
    let history = normalize(&rows(&[("2024-01-01", "2024-01-10")])).unwrap();
    assert_eq!(days_spent_in_window(&history, date("2024-01-11")), 10);

    let advisory = advise(&[("2024-01-01", "2024-01-10")], Some("2024-01-11"));
    assert_eq!(advisory.trend[0], ProjectionPoint::new(date("2024-01-11"), 80));
    assert_eq!(advisory.summary.days(), 80);
}

#[test]
fn exactly_ninety_days_leaves_zero() {
    let advisory = advise(&[("2024-01-01", "2024-03-30")], Some("2024-03-31"));
    assert_eq!(advisory.trend[0], ProjectionPoint::new(date("2024-03-31"), 0));
    assert_eq!(
        advisory.summary,
        Summary::Remaining {
            days: 0,
            until: date("2024-03-31")
        }
    );
}

#[test]
fn ninety_two_days_is_a_two_day_overstay() {
    let history = normalize(&rows(&[("2024-01-01", "2024-04-01")])).unwrap();
    assert_eq!(days_spent_in_window(&history, date("2024-04-02")), 92);

    let advisory = advise(&[("2024-01-01", "2024-04-01")], Some("2024-04-02"));
    assert!(advisory.trend.is_empty());
    assert_eq!(
        advisory.summary,
        Summary::Overstay {
            days: 2,
            exit_by: date("2024-03-31")
        }
    );
}

#[test]
fn touching_stays_merge_into_one() {
    let history = normalize(&rows(&[
        ("2024-01-01", "2024-01-05"),
        ("2024-01-05", "2024-01-10"),
    ]))
    .unwrap();
    let expected = StayInterval::new(date("2024-01-01"), date("2024-01-10")).unwrap();
    assert_eq!(history.as_slice(), &[expected]);
    assert_eq!(history.total_days(), 10);
}

#[test]
fn overlapping_rows_are_not_double_counted() {
    let advisory = advise(
        &[("2024-01-01", "2024-01-20"), ("2024-01-10", "2024-01-30")],
        Some("2024-02-01"),
    );
    assert_eq!(advisory.trend[0].days_remaining, 60);
}

#[test]
fn rows_in_any_order_give_same_advisory() {
    let ordered = advise(
        &[("2024-01-01", "2024-01-10"), ("2024-03-01", "2024-03-15")],
        Some("2024-04-01"),
    );
    let shuffled = advise(
        &[("2024-03-01", "2024-03-15"), ("2024-01-01", "2024-01-10")],
        Some("2024-04-01"),
    );
    assert_eq!(ordered, shuffled);
}
