//! Breadth-first enumeration of reachable, non-redundant digging patterns.

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::sync::Arc;

use crate::geometry::{DigRange, Dimensions};

use super::{all_actions_for, Access, DigMatrix, DiggingPattern, DiggingState};

/// Resource bounds limiting the number of generated patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConstraints {
    /// Hard cap on the number of removed blocks per pattern.
    pub max_dug_blocks: usize,
    /// Optional cap on the number of actions taken to reach a pattern.
    pub max_actions: Option<usize>,
}

impl GenerationConstraints {
    pub fn new(max_dug_blocks: usize, max_actions: Option<usize>) -> Self {
        Self { max_dug_blocks, max_actions }
    }
}

impl fmt::Display for GenerationConstraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "max {} dug blocks", self.max_dug_blocks)?;
        if let Some(max_actions) = self.max_actions {
            write!(f, ", max {max_actions} actions")?;
        }
        Ok(())
    }
}

/// Lazily enumerates every digging pattern reachable within the given
/// constraints, breadth-first.
#[derive(Debug, Clone)]
pub struct PatternGenerator {
    dims: Arc<Dimensions>,
    accesses: Vec<Access>,
    range: DigRange,
    constraints: GenerationConstraints,
}

impl PatternGenerator {
    pub fn new(
        dims: Arc<Dimensions>,
        accesses: Vec<Access>,
        range: DigRange,
        constraints: GenerationConstraints,
    ) -> Self {
        Self { dims, accesses, range, constraints }
    }

    /// A generator with a single access in the middle of the entry plane.
    pub fn central(
        dims: Arc<Dimensions>,
        range: DigRange,
        constraints: GenerationConstraints,
    ) -> Self {
        let access = Access::at(dims.width() / 2, dims.height() / 2);
        Self::new(dims, vec![access], range, constraints)
    }
}

impl IntoIterator for PatternGenerator {
    type Item = DiggingPattern;
    type IntoIter = PatternIterator;

    fn into_iter(self) -> PatternIterator {
        PatternIterator::new(self)
    }
}

/// Iterator over all patterns within the constraints.
///
/// Owns the visited-state set and FIFO work queue exclusively; no
/// synchronization is involved. Children enter the visited set when queued,
/// so no state is ever queued or expanded twice. Exhaustion is a normal
/// terminal condition signaled by `None`.
pub struct PatternIterator {
    actions: Vec<Action>,
    constraints: GenerationConstraints,
    matrix: DigMatrix,
    visited: HashSet<DiggingState>,
    queue: VecDeque<DiggingState>,
}

use super::Action;

impl PatternIterator {
    fn new(generator: PatternGenerator) -> Self {
        let initial = DiggingState::initial(&generator.accesses, &generator.dims);
        let mut visited = HashSet::new();
        visited.insert(initial.clone());
        let mut queue = VecDeque::new();
        queue.push_back(initial);
        Self {
            actions: all_actions_for(generator.range),
            constraints: generator.constraints,
            matrix: DigMatrix::new(generator.dims),
            visited,
            queue,
        }
    }
}

impl Iterator for PatternIterator {
    type Item = DiggingPattern;

    fn next(&mut self) -> Option<DiggingPattern> {
        while let Some(state) = self.queue.pop_front() {
            // rebuild the scratch matrix to reflect this state, then expand
            self.matrix.reset();
            state.replay_on(&mut self.matrix);
            for child in state.expand(&self.matrix, &self.actions, &self.constraints) {
                if self.visited.insert(child.clone()) {
                    self.queue.push_back(child);
                }
            }

            // emit only canonical states: trailing moves don't change the
            // removed set, so each pattern surfaces exactly once
            if state.is_canonical() {
                return Some(state.to_pattern());
            }
        }
        None
    }
}
