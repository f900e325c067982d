//! Accesses and the immutable digging patterns produced by the search.

use std::fmt;

use crate::blocks::Sample;
use crate::geometry::{BlockIndex, Position};

/// An entry point into a pattern: the feet/head pair of blocks the player
/// occupies when stepping in.
///
/// By convention accesses sit on the z=0 boundary plane; a pattern is
/// oriented so its entry side faces that plane. Two accesses never overlap
/// within one pattern's footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Access {
    pub feet: Position,
    pub head: Position,
}

impl Access {
    /// An access with feet at `(x, y, 0)` and head right above.
    pub fn at(x: usize, y: usize) -> Self {
        Self {
            feet: Position::new(x, y, 0),
            head: Position::new(x, y + 1, 0),
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Access({},{})", self.feet.x, self.feet.y)
    }
}

/// A fixed, finite set of blocks to remove, plus the accesses required to
/// reach them. The terminal artifact of the search; never mutated once
/// produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiggingPattern {
    accesses: Vec<Access>,
    blocks: Vec<BlockIndex>,
}

impl DiggingPattern {
    pub fn new(accesses: Vec<Access>, blocks: Vec<BlockIndex>) -> Self {
        Self { accesses, blocks }
    }

    pub fn accesses(&self) -> &[Access] {
        &self.accesses
    }

    /// The blocks this pattern removes, in canonical (ascending) order.
    pub fn blocks(&self) -> &[BlockIndex] {
        &self.blocks
    }

    /// Removes every block of this pattern from the sample. Idempotent:
    /// already-removed blocks are left as-is.
    pub fn dig_into(&self, sample: &mut Sample) {
        for &block in &self.blocks {
            sample.dig(block);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::BlockKind;
    use crate::geometry::Dimensions;
    use proptest::prelude::*;
    use std::sync::Arc;

    #[test]
    fn test_access_at() {
        let access = Access::at(3, 1);
        assert_eq!(Position::new(3, 1, 0), access.feet);
        assert_eq!(Position::new(3, 2, 0), access.head);
    }

    #[test]
    fn test_dig_into_is_idempotent() {
        let dims = Arc::new(Dimensions::new(4, 4, 4));
        let pattern = DiggingPattern::new(vec![Access::at(1, 1)], vec![0, 5, 9, 13]);

        let mut once = Sample::new(Arc::clone(&dims), BlockKind::Rock);
        pattern.dig_into(&mut once);

        let mut twice = once.clone();
        pattern.dig_into(&mut twice);

        assert_eq!(once, twice);
        assert_eq!(4, twice.dug_count());
    }

    proptest! {
        #[test]
        fn test_dig_into_idempotent_for_any_block_set(
            blocks in prop::collection::vec(0usize..64, 0..20)
        ) {
            let dims = Arc::new(Dimensions::new(4, 4, 4));
            let pattern = DiggingPattern::new(vec![Access::at(1, 1)], blocks);

            let mut once = Sample::new(Arc::clone(&dims), BlockKind::Rock);
            pattern.dig_into(&mut once);
            let mut twice = once.clone();
            pattern.dig_into(&mut twice);

            prop_assert_eq!(once, twice);
        }
    }
}
