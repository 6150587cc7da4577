//! Rule conformance tests
//!
//! End-to-end checks of the public API against worked examples of the
//! 90/180 rule, from raw ISO text to the condensed advisory.

#[path = "../common/mod.rs"]
mod common;

mod error_propagation;
mod scenarios;
mod trend_shape;
