//! Core types for the Schengen 90/180 calculator
//!
//! This crate defines the value types shared by the engine and its callers:
//! - Calendar-day primitives (`date`)
//! - StayInterval / RawInterval: validated and raw stays
//! - RollingWindow and the fixed rule constants
//! - ProjectionPoint, Summary, Advisory: projection results
//! - Error: the error taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod advisory;
pub mod date;
pub mod error;
pub mod interval;
pub mod rules;

pub use advisory::{Advisory, ProjectionPoint, Summary};
pub use error::{DateField, Error, Result};
pub use interval::{RawInterval, StayInterval};
pub use rules::{RollingWindow, DEFAULT_HORIZON_DAYS, MAX_STAY_DAYS, WINDOW_DAYS};
