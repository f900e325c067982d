//! Search module - Action model, digging states and pattern generation.

mod action;
mod generator;
mod matrix;
mod pattern;
mod state;

pub use action::*;
pub use generator::*;
pub use matrix::*;
pub use pattern::*;
pub use state::*;
