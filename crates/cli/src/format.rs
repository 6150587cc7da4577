//! Advisory/history → human or json string formatting.
//!
//! Two modes:
//! - **Human** (default): sentences and a plain `Date / Days Left` table
//! - **JSON** (`--json`): `serde_json::to_string_pretty`

use chrono::{Datelike, NaiveDate};
use schengen_core::{Advisory, Error, RawInterval, Summary};
use schengen_engine::RowIssue;
use serde::Serialize;

use crate::state::TravelHistory;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Render a date the long way, e.g. `April 2nd, 2024`.
pub fn long_date(date: NaiveDate) -> String {
    let day = date.day();
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{} {}{}, {}", date.format("%B"), day, suffix, date.year())
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize output: {}\"}}", e))
}

/// Format an advisory.
pub fn format_advisory(advisory: &Advisory, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => to_json(advisory),
        OutputMode::Human => format_advisory_human(advisory),
    }
}

fn format_advisory_human(advisory: &Advisory) -> String {
    let status = match advisory.summary {
        Summary::Remaining { days, until } => format!(
            "you can still stay {} days in the Schengen area, until {}.",
            days,
            long_date(until)
        ),
        Summary::Overstay { days, .. } => format!(
            "you are exceeding the limit by {} days in the Schengen area. Please adjust your travel dates.",
            days
        ),
    };
    let mut out = format!(
        "If you plan to re-join the Schengen area on {}, {}",
        long_date(advisory.rejoin_date),
        status
    );
    if let Summary::Overstay { exit_by, .. } = advisory.summary {
        out.push_str(&format!("\nYou should have left by {}.", long_date(exit_by)));
    }
    if let Some(first) = advisory.first_point() {
        if first.date > advisory.rejoin_date {
            out.push_str(&format!(
                "\nYou are over the limit on that day; the earliest day you can re-join is {}.",
                long_date(first.date)
            ));
        }
    }

    if !advisory.trend.is_empty() {
        let dates: Vec<String> = advisory.trend.iter().map(|p| long_date(p.date)).collect();
        let width = dates.iter().map(String::len).max().unwrap_or(0).max("Date".len());
        out.push_str("\n\nThis is how many days you can stay if you join on this day:\n");
        out.push_str(&format!("{:<width$}  Days Left", "Date", width = width));
        for (date, point) in dates.iter().zip(&advisory.trend) {
            out.push_str(&format!(
                "\n{:<width$}  {}",
                date,
                point.days_remaining,
                width = width
            ));
        }
    }
    out
}

/// One history row as shown by `list`.
#[derive(Debug, Serialize)]
struct ListedStay<'a> {
    index: usize,
    entry: &'a str,
    exit: &'a str,
    /// Inclusive length, when both dates parse in order.
    days: Option<i64>,
}

#[derive(Debug, Serialize)]
struct ListedHistory<'a> {
    stays: Vec<ListedStay<'a>>,
    rejoin_date: Option<&'a str>,
    issues: &'a [RowIssue],
}

fn stay_length(row: &RawInterval, index: usize) -> Option<i64> {
    row.parse(index).ok().map(|stay| stay.days())
}

/// Format the stored history along with any issues found in it.
pub fn format_history(history: &TravelHistory, issues: &[RowIssue], mode: OutputMode) -> String {
    let stays: Vec<ListedStay<'_>> = history
        .stays
        .iter()
        .enumerate()
        .map(|(index, row)| ListedStay {
            index,
            entry: &row.entry,
            exit: &row.exit,
            days: stay_length(row, index),
        })
        .collect();

    match mode {
        OutputMode::Json => to_json(&ListedHistory {
            stays,
            rejoin_date: history.rejoin_date.as_deref(),
            issues,
        }),
        OutputMode::Human => {
            let mut lines = Vec::new();
            if stays.is_empty() {
                lines.push("(no stays recorded)".to_string());
            }
            for stay in &stays {
                let days = match stay.days {
                    Some(1) => "1 day".to_string(),
                    Some(n) => format!("{} days", n),
                    None => "-".to_string(),
                };
                lines.push(format!(
                    "{}) {} -> {}  ({})",
                    stay.index, stay.entry, stay.exit, days
                ));
            }
            if let Some(rejoin) = &history.rejoin_date {
                lines.push(format!("Rejoin date: {}", rejoin));
            }
            let problems = format_issues(issues);
            if !problems.is_empty() {
                lines.push(problems);
            }
            lines.join("\n")
        }
    }
}

/// One warning line per issue, empty when there are none.
pub fn format_issues(issues: &[RowIssue]) -> String {
    issues
        .iter()
        .map(|issue| match issue.index() {
            Some(index) => format!("(warning) row {}: {}", index, issue),
            None => format!("(warning) rejoin date: {}", issue),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a short acknowledgement.
pub fn format_ack(message: &str, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => to_json(&serde_json::json!({ "ok": message })),
        OutputMode::Human => message.to_string(),
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    format_error_message(&err.to_string(), mode)
}

/// Format an error raised by the CLI itself (bad arguments, missing rows).
pub fn format_error_message(message: &str, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => to_json(&serde_json::json!({ "error": message })),
        OutputMode::Human => format!("(error) {}", message),
    }
}
