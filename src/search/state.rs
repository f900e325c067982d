//! Search-graph nodes: one head position per access plus the removed set.

use std::collections::{BTreeMap, BTreeSet};
use std::hash::{Hash, Hasher};

use crate::geometry::{BlockIndex, Dimensions};

use super::{Access, Action, DigMatrix, DiggingPattern, GenerationConstraints};

/// A node in the digging search graph.
///
/// Tracks, per access, where the player's head currently is, plus every
/// block removed so far across all accesses. States are conceptually
/// immutable: every transition builds a new state, so readers never race.
///
/// Equality and hashing cover only the head map and the removed set, both
/// held in ordered collections so construction order can never change the
/// hash. The canonicality marker and the action counter are bookkeeping,
/// not identity.
#[derive(Debug, Clone)]
pub struct DiggingState {
    heads: BTreeMap<Access, BlockIndex>,
    dug: BTreeSet<BlockIndex>,
    /// Accesses whose most recent action was a move.
    moved_last: BTreeSet<Access>,
    actions_taken: usize,
}

impl PartialEq for DiggingState {
    fn eq(&self, other: &Self) -> bool {
        self.heads == other.heads && self.dug == other.dug
    }
}

impl Eq for DiggingState {}

impl Hash for DiggingState {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.heads.hash(hasher);
        self.dug.hash(hasher);
    }
}

impl DiggingState {
    /// The initial state for the given accesses: each access's feet and head
    /// blocks are removed and its head position is the access head.
    pub fn initial(accesses: &[Access], dims: &Dimensions) -> Self {
        let mut heads = BTreeMap::new();
        let mut dug = BTreeSet::new();
        for access in accesses {
            let head = dims.index_of(access.head);
            heads.insert(*access, head);
            dug.insert(dims.index_of(access.feet));
            dug.insert(head);
        }
        Self { heads, dug, moved_last: BTreeSet::new(), actions_taken: 0 }
    }

    pub fn dug_count(&self) -> usize {
        self.dug.len()
    }

    /// Whether this state should be emitted as a pattern: true when no
    /// access's most recent action was a move. Trailing moves don't change
    /// the removed set, so skipping non-canonical states guarantees each
    /// emitted pattern has exactly one representative state.
    pub fn is_canonical(&self) -> bool {
        self.moved_last.is_empty()
    }

    /// Marks every block removed in this state as dug in the scratch matrix.
    pub fn replay_on(&self, matrix: &mut DigMatrix) {
        for &block in &self.dug {
            matrix.dig(block);
        }
    }

    /// All states reachable from this one in a single action, given a
    /// scratch matrix reflecting this state. Returns nothing once a resource
    /// cap is reached; the state itself stays a valid pattern.
    pub fn expand(
        &self,
        matrix: &DigMatrix,
        actions: &[Action],
        constraints: &GenerationConstraints,
    ) -> Vec<DiggingState> {
        if self.dug.len() >= constraints.max_dug_blocks {
            return Vec::new();
        }
        if let Some(max_actions) = constraints.max_actions {
            if self.actions_taken >= max_actions {
                return Vec::new();
            }
        }

        let mut children = Vec::new();
        for (&access, &head) in &self.heads {
            for action in actions {
                if !action.is_valid_for(matrix, head) {
                    continue;
                }
                let Some(target) = action.target(matrix, head) else {
                    continue;
                };
                children.push(self.next(access, *action, target));
            }
        }
        children
    }

    /// The state resulting from performing `action` on `access`. Moves
    /// relocate that access's head; digs add one removed block.
    fn next(&self, access: Access, action: Action, target: BlockIndex) -> DiggingState {
        let mut child = self.clone();
        child.actions_taken = self.actions_taken + 1;
        match action {
            Action::Move(_) => {
                child.heads.insert(access, target);
                child.moved_last.insert(access);
            }
            Action::Dig(_) => {
                child.dug.insert(target);
                child.moved_last.remove(&access);
            }
        }
        child
    }

    /// The immutable pattern this state represents.
    pub fn to_pattern(&self) -> DiggingPattern {
        DiggingPattern::new(
            self.heads.keys().copied().collect(),
            self.dug.iter().copied().collect(),
        )
    }
}
