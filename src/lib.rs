//! `table-fun` library crate.
//!
//! Evaluates `fun(x, y, z)`, a fixed composition of combinators over two
//! table-interpolated functions `T` and `U`, with closed-form fallbacks when a
//! lookup or division cannot be completed.
//!
//! The binary (`tfun`) is a thin wrapper around this library so that:
//!
//! - the function graph is testable with in-memory tables
//! - table loading stays an injected dependency (`io::TableSource`)

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod math;
pub mod models;
pub mod report;
