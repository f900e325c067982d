//! Replays patterns against reference samples and aggregates outcomes.

use std::sync::Arc;

use crate::blocks::Sample;
use crate::search::DiggingPattern;

use super::Statistics;

/// Evaluates digging patterns against a fixed list of reference samples.
///
/// The reference list is shared read-only across all evaluators so every
/// pattern is measured on identical ground truth; the scratch sample is
/// private to this evaluator, making one instance per worker thread safe
/// without any locking.
pub struct PatternEvaluator {
    reference: Arc<Vec<Sample>>,
    scratch: Sample,
}

impl PatternEvaluator {
    /// Panics on an empty reference list: evaluating against nothing is a
    /// programming error.
    pub fn new(reference: Arc<Vec<Sample>>) -> Self {
        assert!(!reference.is_empty(), "cannot evaluate patterns against zero reference samples");
        let scratch = reference[0].clone();
        Self { reference, scratch }
    }

    /// Replays the pattern on every reference sample: remove the pattern's
    /// blocks, follow exposed ore veins, and accumulate cost and yield.
    pub fn evaluate(&mut self, pattern: &DiggingPattern) -> Statistics {
        let mut stats = Statistics::default();
        for i in 0..self.reference.len() {
            self.scratch.reset_to(&self.reference[i]);
            let initial_ore = self.scratch.ore_count() as u64;

            pattern.dig_into(&mut self.scratch);
            self.scratch.follow_veins(pattern.blocks().iter().copied());

            stats.total_ore += initial_ore;
            stats.dug_blocks += self.scratch.dug_count() as u64;
            stats.found_ore += initial_ore - self.scratch.ore_count() as u64;
        }
        stats
    }
}
