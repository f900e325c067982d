//! Ore module - Statistical generation of reference ore distributions.

mod sampler;
mod trig;
mod vein;

pub use sampler::*;
pub use vein::*;
