//! Error types for the Schengen calculator
//!
//! This module defines all error types used throughout the workspace.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Every error is a caller input problem: all operations are deterministic, so
//! nothing here is retryable.

use std::io;
use thiserror::Error;

/// Result type alias for calculator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which side of a stay a date belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateField {
    /// The day the traveler entered the area
    Entry,
    /// The day the traveler left the area
    Exit,
    /// The planned re-entry date
    Rejoin,
}

impl std::fmt::Display for DateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateField::Entry => write!(f, "entry"),
            DateField::Exit => write!(f, "exit"),
            DateField::Rejoin => write!(f, "rejoin"),
        }
    }
}

/// Error types for the calculator
#[derive(Debug, Error)]
pub enum Error {
    /// A supplied date does not parse as an ISO `YYYY-MM-DD` calendar date
    #[error("Invalid {field} date: {value:?} (expected YYYY-MM-DD)")]
    InvalidDate {
        /// Which field held the text
        field: DateField,
        /// The offending text
        value: String,
    },

    /// A stay whose exit precedes its entry
    #[error("Stay #{index} exits on {exit} before it enters on {entry}")]
    InvertedInterval {
        /// Position of the row in the caller's input
        index: usize,
        /// Entry date of the row
        entry: chrono::NaiveDate,
        /// Exit date of the row
        exit: chrono::NaiveDate,
    },

    /// A projection horizon too short to evaluate the rejoin date
    #[error("Invalid horizon: {0} days (must be at least 2)")]
    InvalidHorizon(u32),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error (history and config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Create an `InvalidDate` error
    pub fn invalid_date(field: DateField, value: impl Into<String>) -> Self {
        Error::InvalidDate {
            field,
            value: value.into(),
        }
    }

    /// Create a `Config` error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// True for errors caused by the travel history itself
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidDate { .. } | Error::InvertedInterval { .. } | Error::InvalidHorizon(_)
        )
    }
}
