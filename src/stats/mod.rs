//! Stats module - Pattern evaluation, dominance and the Pareto frontier.

mod evaluator;
mod statistics;
mod store;

pub use evaluator::*;
pub use statistics::*;
pub use store::*;
