//! Scratch dug-state grid for validity testing during the search.

use std::sync::Arc;

use crate::geometry::{BlockIndex, Dimensions};

/// A boolean dug/not-dug view of a volume.
///
/// The search only needs to know which blocks are removed; tracking block
/// kinds here would be wasted work. Exclusively owned by the generator and
/// reset between state replays.
#[derive(Debug, Clone)]
pub struct DigMatrix {
    dims: Arc<Dimensions>,
    dug: Vec<bool>,
}

impl DigMatrix {
    pub fn new(dims: Arc<Dimensions>) -> Self {
        let nb = dims.nb_positions();
        Self { dims, dug: vec![false; nb] }
    }

    pub fn dimensions(&self) -> &Arc<Dimensions> {
        &self.dims
    }

    pub fn dig(&mut self, index: BlockIndex) {
        self.dug[index] = true;
    }

    pub fn is_dug(&self, index: BlockIndex) -> bool {
        self.dug[index]
    }

    /// Whether the block directly above is dug. Missing (ceiling) counts as
    /// not dug.
    pub fn is_dug_above(&self, index: BlockIndex) -> bool {
        self.dims.above(index).is_some_and(|above| self.dug[above])
    }

    /// Whether the block directly below is dug. Missing (floor) counts as
    /// not dug.
    pub fn is_dug_below(&self, index: BlockIndex) -> bool {
        self.dims.below(index).is_some_and(|below| self.dug[below])
    }

    pub fn reset(&mut self) {
        self.dug.fill(false);
    }
}
