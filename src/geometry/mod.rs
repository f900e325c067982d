//! Geometry module - Grid addressing, coordinates and reach envelopes.

mod dimensions;
mod range;

pub use dimensions::*;
pub use range::*;
