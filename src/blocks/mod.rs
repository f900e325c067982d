//! Blocks module - Block kinds and mutable sample volumes.

mod kind;
mod sample;

pub use kind::*;
pub use sample::*;
