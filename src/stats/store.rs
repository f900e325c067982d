//! Pareto frontier of evaluated patterns.

use std::fmt;

use crate::search::DiggingPattern;

use super::Statistics;

/// A pattern together with its measured outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatedPattern {
    pub pattern: DiggingPattern,
    pub stats: Statistics,
}

impl EvaluatedPattern {
    pub fn new(pattern: DiggingPattern, stats: Statistics) -> Self {
        Self { pattern, stats }
    }
}

/// The set of patterns not dominated by any other seen so far.
///
/// The retained set is an antichain under the dominance order: inserting a
/// candidate first checks it against every member, and on acceptance evicts
/// every member the candidate dominates. Single-owner by design; the merge
/// loop feeds it from one thread.
#[derive(Debug, Default)]
pub struct PatternStore {
    patterns: Vec<EvaluatedPattern>,
}

impl PatternStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers a candidate to the frontier. Returns true when the retained
    /// set changed, false when an existing member dominates the candidate.
    pub fn add(&mut self, candidate: EvaluatedPattern) -> bool {
        if self.patterns.iter().any(|kept| kept.stats.dominates(&candidate.stats)) {
            return false;
        }
        self.patterns.retain(|kept| !candidate.stats.dominates(&kept.stats));
        self.patterns.push(candidate);
        true
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EvaluatedPattern> {
        self.patterns.iter()
    }
}

impl fmt::Display for PatternStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} best patterns:", self.patterns.len())?;
        for kept in &self.patterns {
            write!(f, " [{}]", kept.stats)?;
        }
        Ok(())
    }
}
