//! Mutable block volumes with running ore/dug counts.

use std::fmt;
use std::sync::Arc;

use crate::geometry::{BlockIndex, Dimensions, Position, Wrapping};

use super::BlockKind;

/// An arbitrary volume of blocks.
///
/// Keeps running counts of ore blocks and dug blocks so evaluation never has
/// to rescan the whole grid. A `Sample` is owned by exactly one thread at a
/// time; sharing requires cloning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    dims: Arc<Dimensions>,
    blocks: Vec<BlockKind>,
    ore_count: usize,
    dug_count: usize,
}

impl Sample {
    /// Creates a sample of the given dimensions uniformly filled with
    /// `initial` blocks.
    pub fn new(dims: Arc<Dimensions>, initial: BlockKind) -> Self {
        let nb = dims.nb_positions();
        Self {
            dims,
            blocks: vec![initial; nb],
            ore_count: if initial.is_ore() { nb } else { 0 },
            dug_count: if initial.is_dug() { nb } else { 0 },
        }
    }

    pub fn dimensions(&self) -> &Arc<Dimensions> {
        &self.dims
    }

    /// Number of ore blocks currently in this sample.
    pub fn ore_count(&self) -> usize {
        self.ore_count
    }

    /// Number of dug blocks currently in this sample.
    pub fn dug_count(&self) -> usize {
        self.dug_count
    }

    pub fn block(&self, index: BlockIndex) -> BlockKind {
        self.blocks[index]
    }

    pub fn block_at(&self, pos: Position) -> BlockKind {
        self.blocks[self.dims.index_of(pos)]
    }

    /// Changes the kind of one block, maintaining the running counts.
    pub fn set_block(&mut self, index: BlockIndex, kind: BlockKind) {
        let former = self.blocks[index];
        self.blocks[index] = kind;
        if former.is_ore() != kind.is_ore() {
            if kind.is_ore() {
                self.ore_count += 1;
            } else {
                self.ore_count -= 1;
            }
        }
        if former.is_dug() != kind.is_dug() {
            if kind.is_dug() {
                self.dug_count += 1;
            } else {
                self.dug_count -= 1;
            }
        }
    }

    /// Fills the whole sample with the given kind.
    pub fn fill(&mut self, kind: BlockKind) {
        for i in 0..self.blocks.len() {
            self.set_block(i, kind);
        }
    }

    /// Removes the block at the given index. Removing an already-removed
    /// block is a no-op.
    pub fn dig(&mut self, index: BlockIndex) {
        self.set_block(index, BlockKind::Air);
    }

    /// Resets this sample to the exact state of `reference`.
    ///
    /// Panics if the dimensions differ: resetting from a mismatched
    /// reference is a programming error, not a runtime condition.
    pub fn reset_to(&mut self, reference: &Sample) {
        assert_eq!(
            *self.dims, *reference.dims,
            "cannot reset a sample from a reference of different dimensions"
        );
        self.blocks.copy_from_slice(&reference.blocks);
        self.ore_count = reference.ore_count;
        self.dug_count = reference.dug_count;
    }

    /// Removes every ore block adjacent to an already-removed block,
    /// recursively, starting from the given removed seeds.
    ///
    /// This models the "follow visible ore" behavior of a real excavator:
    /// once a vein face is exposed by digging, the whole connected vein is
    /// taken. Adjacency wraps horizontally only. Implemented with an
    /// explicit work stack so vein size never threatens the call stack.
    pub fn follow_veins(&mut self, seeds: impl IntoIterator<Item = BlockIndex>) {
        let dims = Arc::clone(&self.dims);
        let mut stack: Vec<BlockIndex> = seeds.into_iter().collect();
        while let Some(index) = stack.pop() {
            for neighbor in dims.adjacent_indices(index, Wrapping::WrapXz) {
                if self.blocks[neighbor].is_ore() {
                    self.dig(neighbor);
                    stack.push(neighbor);
                }
            }
        }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Size: {}  Dug: {}", self.dims, self.dug_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::OreKind;

    fn rock_sample(w: usize, h: usize, l: usize) -> Sample {
        Sample::new(Arc::new(Dimensions::new(w, h, l)), BlockKind::Rock)
    }

    #[test]
    fn test_dig_block() {
        let mut sample = rock_sample(10, 10, 10);
        let dims = Arc::clone(sample.dimensions());
        for (x, y, z) in [(0, 0, 0), (2, 2, 2), (3, 4, 5), (1, 2, 3)] {
            sample.dig(dims.index_of(Position::new(x, y, z)));
        }
        for (x, y, z) in [(0, 0, 0), (2, 2, 2), (3, 4, 5), (1, 2, 3)] {
            assert_eq!(BlockKind::Air, sample.block_at(Position::new(x, y, z)));
        }
        assert_eq!(4, sample.dug_count());
    }

    #[test]
    fn test_dig_twice_is_noop() {
        let mut sample = rock_sample(4, 4, 4);
        sample.dig(7);
        sample.dig(7);
        assert_eq!(1, sample.dug_count());
    }

    #[test]
    fn test_ore_count() {
        let mut sample = rock_sample(10, 10, 10);
        sample.set_block(0, BlockKind::Ore(OreKind::Coal));
        sample.set_block(1, BlockKind::Ore(OreKind::Iron));
        sample.set_block(2, BlockKind::Ore(OreKind::Lapis));
        sample.set_block(3, BlockKind::Rock);
        sample.set_block(4, BlockKind::Air);
        assert_eq!(3, sample.ore_count());
        assert_eq!(1, sample.dug_count());
    }

    #[test]
    fn test_fill() {
        let mut sample = rock_sample(10, 10, 10);
        sample.dig(2);
        sample.set_block(5, BlockKind::Ore(OreKind::Coal));

        sample.fill(BlockKind::Air);
        assert_eq!(1000, sample.dug_count());
        assert_eq!(0, sample.ore_count());

        sample.fill(BlockKind::Ore(OreKind::Gold));
        assert_eq!(0, sample.dug_count());
        assert_eq!(1000, sample.ore_count());

        sample.fill(BlockKind::Rock);
        assert_eq!(0, sample.dug_count());
        assert_eq!(0, sample.ore_count());
    }

    #[test]
    fn test_reset_to() {
        let mut reference = rock_sample(4, 4, 4);
        reference.set_block(3, BlockKind::Ore(OreKind::Diamond));

        let mut sample = reference.clone();
        sample.dig(3);
        sample.dig(10);
        assert_eq!(0, sample.ore_count());

        sample.reset_to(&reference);
        assert_eq!(reference, sample);
        assert_eq!(1, sample.ore_count());
        assert_eq!(0, sample.dug_count());
    }

    #[test]
    #[should_panic(expected = "different dimensions")]
    fn test_reset_to_mismatched_dimensions_panics() {
        let reference = rock_sample(4, 4, 4);
        let mut sample = rock_sample(4, 4, 5);
        sample.reset_to(&reference);
    }

    #[test]
    fn test_follow_veins_takes_connected_vein() {
        let mut sample = rock_sample(5, 5, 5);
        let dims = Arc::clone(sample.dimensions());
        // a 3-block vein touching the dug block, plus a detached ore block
        let dug = dims.index_of(Position::new(1, 1, 1));
        let vein = [
            Position::new(2, 1, 1),
            Position::new(3, 1, 1),
            Position::new(3, 2, 1),
        ];
        let detached = dims.index_of(Position::new(0, 4, 4));
        for pos in vein {
            sample.set_block(dims.index_of(pos), BlockKind::Ore(OreKind::Iron));
        }
        sample.set_block(detached, BlockKind::Ore(OreKind::Iron));
        sample.dig(dug);

        sample.follow_veins([dug]);

        for pos in vein {
            assert_eq!(BlockKind::Air, sample.block_at(pos));
        }
        assert!(sample.block(detached).is_ore());
        assert_eq!(4, sample.dug_count());
        assert_eq!(1, sample.ore_count());
    }

    #[test]
    fn test_follow_veins_wraps_horizontally() {
        let mut sample = rock_sample(4, 4, 4);
        let dims = Arc::clone(sample.dimensions());
        let dug = dims.index_of(Position::new(0, 1, 1));
        let wrapped_ore = dims.index_of(Position::new(3, 1, 1));
        sample.set_block(wrapped_ore, BlockKind::Ore(OreKind::Gold));
        sample.dig(dug);

        sample.follow_veins([dug]);
        assert_eq!(BlockKind::Air, sample.block(wrapped_ore));
    }
}
