//! Which inputs are rejected and which are repaired

use crate::common::{advise, date, rows, TODAY};
use schengen::{
    normalize_with, project_on, DateField, Engine, EngineConfig, Error, InvertedIntervalPolicy,
};

#[test]
fn malformed_history_date_propagates_through_projection() {
    let err = project_on(
        &rows(&[("2024-01-01", "2024-01-10"), ("2024-02-31", "2024-03-05")]),
        Some("2024-04-01"),
        90,
        date(TODAY),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidDate {
            field: DateField::Entry,
            ..
        }
    ));
}

#[test]
fn blank_history_row_is_rejected() {
    let err = project_on(&rows(&[("", "")]), None, 90, date(TODAY)).unwrap_err();
    assert!(err.is_input_error());
}

#[test]
fn inverted_row_rejected_by_default() {
    let err = project_on(
        &rows(&[("2024-01-10", "2024-01-01")]),
        Some("2024-02-01"),
        90,
        date(TODAY),
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvertedInterval { index: 0, .. }));
}

#[test]
fn inverted_row_counts_zero_days_when_skipped() {
    let history = rows(&[("2024-01-01", "2024-01-10"), ("2024-01-30", "2024-01-20")]);
    let normalized = normalize_with(&history, InvertedIntervalPolicy::Skip).unwrap();
    assert_eq!(normalized.total_days(), 10);

    let engine = Engine::new(EngineConfig {
        inverted_intervals: InvertedIntervalPolicy::Skip,
        ..EngineConfig::default()
    })
    .unwrap();
    let advisory = engine
        .project_on(&history, Some("2024-02-01"), date(TODAY))
        .unwrap();
    assert_eq!(advisory.trend[0].days_remaining, 80);
}

#[test]
fn unparsable_rejoin_falls_back_to_today() {
    for rejoin in [None, Some(""), Some("   "), Some("next tuesday"), Some("2024-02-30")] {
        let advisory = advise(&[], rejoin);
        assert_eq!(advisory.rejoin_date, date(TODAY), "rejoin {rejoin:?}");
    }
}

#[test]
fn horizon_too_short_is_rejected() {
    let err = project_on(&[], None, 1, date(TODAY)).unwrap_err();
    assert!(matches!(err, Error::InvalidHorizon(1)));
}
