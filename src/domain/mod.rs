//! Domain types used throughout the evaluator.
//!
//! This module defines:
//!
//! - table identity and contents (`TableKey`, `TableRecord`, `Table`)
//! - the evaluation input (`EvaluationRequest`)
//! - the fallback decision reported in diagnostics (`Formula`)
//! - table binding configuration (`TableConfig`)

pub mod types;

pub use types::*;
