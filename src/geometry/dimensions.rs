//! Flat-indexed 3D grid addressing with per-policy neighbor tables.

use std::fmt;

/// An integer handle into the flat block array of one [`Dimensions`].
///
/// A `BlockIndex` is only meaningful relative to the `Dimensions` that
/// produced it.
pub type BlockIndex = usize;

/// An absolute block position inside a volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl Position {
    pub fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

/// A signed offset between two block positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Distance3D {
    pub dx: i32,
    pub dy: i32,
    pub dz: i32,
}

impl Distance3D {
    pub const fn new(dx: i32, dy: i32, dz: i32) -> Self {
        Self { dx, dy, dz }
    }

    /// Squared euclidean norm of this offset.
    pub fn sq_norm(&self) -> i32 {
        self.dx * self.dx + self.dy * self.dy + self.dz * self.dz
    }
}

impl fmt::Display for Distance3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.dx, self.dy, self.dz)
    }
}

/// Edge policy: how coordinates falling outside the volume are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wrapping {
    /// Coordinates outside the volume do not resolve to any block.
    Cut,
    /// All three axes wrap to the other side of the volume.
    Wrap,
    /// X and Z wrap, Y is clipped.
    ///
    /// Ore probability depends on absolute depth, so the floor and ceiling
    /// must never wrap; side-by-side repetitions of the same volume are
    /// statistically equivalent, so horizontal wrapping is sound.
    WrapXz,
}

/// The six axis-aligned directions, used to index neighbor tables.
const EAST: usize = 0; // +x
const WEST: usize = 1; // -x
const UP: usize = 2; // +y
const DOWN: usize = 3; // -y
const SOUTH: usize = 4; // +z
const NORTH: usize = 5; // -z

const DIRECTIONS: [Distance3D; 6] = [
    Distance3D::new(1, 0, 0),
    Distance3D::new(-1, 0, 0),
    Distance3D::new(0, 1, 0),
    Distance3D::new(0, -1, 0),
    Distance3D::new(0, 0, 1),
    Distance3D::new(0, 0, -1),
];

/// Immutable (width, height, length) triple with precomputed neighbor
/// tables for each [`Wrapping`] policy.
///
/// Block indices are laid out as `x + y * width + z * width * height`.
/// A `Dimensions` is built once at startup and shared read-only for the
/// whole run.
#[derive(Clone)]
pub struct Dimensions {
    width: usize,
    height: usize,
    length: usize,
    neighbors_cut: Vec<[Option<BlockIndex>; 6]>,
    neighbors_wrap: Vec<[Option<BlockIndex>; 6]>,
    neighbors_wrap_xz: Vec<[Option<BlockIndex>; 6]>,
}

impl Dimensions {
    pub fn new(width: usize, height: usize, length: usize) -> Self {
        let mut dims = Self {
            width,
            height,
            length,
            neighbors_cut: Vec::new(),
            neighbors_wrap: Vec::new(),
            neighbors_wrap_xz: Vec::new(),
        };
        dims.neighbors_cut = dims.build_neighbor_table(Wrapping::Cut);
        dims.neighbors_wrap = dims.build_neighbor_table(Wrapping::Wrap);
        dims.neighbors_wrap_xz = dims.build_neighbor_table(Wrapping::WrapXz);
        dims
    }

    fn build_neighbor_table(&self, wrapping: Wrapping) -> Vec<[Option<BlockIndex>; 6]> {
        (0..self.nb_positions())
            .map(|i| {
                let mut entry = [None; 6];
                for (dir, delta) in DIRECTIONS.iter().enumerate() {
                    entry[dir] = self.resolve(i, *delta, wrapping);
                }
                entry
            })
            .collect()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Total number of blocks addressed by this `Dimensions`.
    pub fn nb_positions(&self) -> usize {
        self.width * self.height * self.length
    }

    /// Whether the given (possibly out-of-bounds) coordinates fall inside.
    pub fn contains(&self, x: i64, y: i64, z: i64) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as usize) < self.width
            && (y as usize) < self.height
            && (z as usize) < self.length
    }

    /// Flat index of the given in-bounds position.
    pub fn index_of(&self, pos: Position) -> BlockIndex {
        debug_assert!(self.contains(pos.x as i64, pos.y as i64, pos.z as i64));
        pos.x + pos.y * self.width + pos.z * self.width * self.height
    }

    /// Position of the given flat index.
    pub fn position_of(&self, index: BlockIndex) -> Position {
        let plane = self.width * self.height;
        Position {
            x: index % self.width,
            y: (index % plane) / self.width,
            z: index / plane,
        }
    }

    /// All positions in flat-index order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.nb_positions()).map(|i| self.position_of(i))
    }

    /// Resolves `index + delta` under the given edge policy.
    pub fn offset(
        &self,
        index: BlockIndex,
        delta: Distance3D,
        wrapping: Wrapping,
    ) -> Option<BlockIndex> {
        self.resolve(index, delta, wrapping)
    }

    fn resolve(
        &self,
        index: BlockIndex,
        delta: Distance3D,
        wrapping: Wrapping,
    ) -> Option<BlockIndex> {
        let pos = self.position_of(index);
        let x = pos.x as i64 + delta.dx as i64;
        let y = pos.y as i64 + delta.dy as i64;
        let z = pos.z as i64 + delta.dz as i64;
        let (wrap_xz, wrap_y) = match wrapping {
            Wrapping::Cut => (false, false),
            Wrapping::Wrap => (true, true),
            Wrapping::WrapXz => (true, false),
        };
        let x = self.resolve_axis(x, self.width, wrap_xz)?;
        let y = self.resolve_axis(y, self.height, wrap_y)?;
        let z = self.resolve_axis(z, self.length, wrap_xz)?;
        Some(self.index_of(Position::new(x, y, z)))
    }

    fn resolve_axis(&self, value: i64, extent: usize, wrap: bool) -> Option<usize> {
        if wrap {
            Some(value.rem_euclid(extent as i64) as usize)
        } else if value >= 0 && (value as usize) < extent {
            Some(value as usize)
        } else {
            None
        }
    }

    /// Index of the block directly above, if any (never wraps).
    pub fn above(&self, index: BlockIndex) -> Option<BlockIndex> {
        self.neighbors_cut[index][UP]
    }

    /// Index of the block directly below, if any (never wraps).
    pub fn below(&self, index: BlockIndex) -> Option<BlockIndex> {
        self.neighbors_cut[index][DOWN]
    }

    /// The up-to-6 precomputed neighbor indices of a block under the given
    /// policy. With `Cut` on an edge block, fewer than 6 are returned.
    pub fn adjacent_indices(
        &self,
        index: BlockIndex,
        wrapping: Wrapping,
    ) -> impl Iterator<Item = BlockIndex> + '_ {
        let table = match wrapping {
            Wrapping::Cut => &self.neighbors_cut,
            Wrapping::Wrap => &self.neighbors_wrap,
            Wrapping::WrapXz => &self.neighbors_wrap_xz,
        };
        table[index].iter().flatten().copied()
    }
}

impl PartialEq for Dimensions {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.length == other.length
    }
}

impl Eq for Dimensions {}

impl fmt::Debug for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dimensions({}x{}x{})", self.width, self.height, self.length)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.length)
    }
}
