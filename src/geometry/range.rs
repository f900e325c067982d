//! Dig reach envelopes.

use serde::{Deserialize, Serialize};

/// A symmetric 3D envelope of block offsets a player can reach with a
/// pickaxe from a fixed head position.
///
/// The envelope is symmetric with respect to the XY, YZ and XZ planes, and
/// behaves identically for X and Z. `bounds[|dy|][|dx|]` gives the maximum
/// |dz| reachable at that offset; a negative entry means unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DigRange {
    /// Reach when the player is limited to the block they stand on.
    #[default]
    Strict,
    /// Extended reach when sneaking lets the player overextend.
    PressingShift,
}

const STRICT_BOUNDS: [&[i32]; 4] = [
    &[5, 5, 5, 5, 4, 3], // dy = 0
    &[5, 5, 5, 5, 4, 3], // dy = 1 or -1
    &[5, 5, 5, 4, 3, 2], // dy = 2 or -2
    &[4, 4, 4, 4, 3, -1], // dy = 3 or -3
];

const PRESSING_SHIFT_BOUNDS: [&[i32]; 4] = [
    &[6, 6, 6, 5, 5, 4, 2], // dy = 0
    &[6, 6, 6, 5, 5, 4, 2], // dy = 1 or -1
    &[6, 6, 5, 5, 5, 4, 1], // dy = 2 or -2
    &[5, 5, 5, 5, 4, 3, -1], // dy = 3 or -3
];

impl DigRange {
    fn bounds(&self) -> &'static [&'static [i32]] {
        match self {
            DigRange::Strict => &STRICT_BOUNDS,
            DigRange::PressingShift => &PRESSING_SHIFT_BOUNDS,
        }
    }

    /// Maximum |dy| of the envelope.
    pub fn max_y(&self) -> i32 {
        self.bounds().len() as i32 - 1
    }

    /// Maximum |dx| of the envelope at the given vertical offset.
    pub fn max_x(&self, dy: i32) -> i32 {
        self.bounds()[dy.unsigned_abs() as usize].len() as i32 - 1
    }

    /// Whether the given offset from the head falls inside the envelope.
    pub fn in_range(&self, dx: i32, dy: i32, dz: i32) -> bool {
        if dy.abs() > self.max_y() {
            return false;
        }
        if dx.abs() > self.max_x(dy) {
            return false;
        }
        dz.abs() <= self.bounds()[dy.unsigned_abs() as usize][dx.unsigned_abs() as usize]
    }
}
