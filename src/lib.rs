//! Schengen 90/180 stay calculator
//!
//! Given past entry/exit dates and a planned re-entry date, works out how
//! many days a traveler may still spend in the Schengen area under the
//! "90 days in any 180-day period" rule, and how that allowance evolves over
//! the following days.
//!
//! # Quick Start
//!
//! ```
//! use schengen::{project, RawInterval, Summary};
//!
//! let history = [RawInterval::new("2024-01-01", "2024-01-10")];
//! let advisory = project(&history, Some("2024-01-11"), 90)?;
//!
//! assert!(matches!(advisory.summary, Summary::Remaining { days: 80, .. }));
//! # Ok::<(), schengen::Error>(())
//! ```
//!
//! # Architecture
//!
//! Value types live in `schengen-core`; the normalizer, window accountant and
//! projection live in `schengen-engine`. Both are re-exported here.

pub use schengen_core::*;
pub use schengen_engine::*;
