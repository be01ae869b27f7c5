//! Input/output helpers.
//!
//! - table resources and the `TableSource` seam (`table`)
//! - read-through table cache (`cache`)
//! - input triples from the prompt or batch files (`input`)
//! - batch result exports (CSV/JSON) (`export`)

pub mod cache;
pub mod export;
pub mod input;
pub mod table;

pub use cache::*;
pub use export::*;
pub use input::*;
pub use table::*;
