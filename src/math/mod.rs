//! Numerical building blocks: argument remapping and linear interpolation.

pub mod interp;
pub mod remap;

pub use interp::*;
pub use remap::*;
