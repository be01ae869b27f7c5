//! The evaluated function graph.
//!
//! Combinators are small, pure functions; the table-backed part of the graph
//! lives on `Evaluator` so the table source can be injected.

pub mod combinators;
pub mod evaluator;

pub use combinators::*;
pub use evaluator::*;
