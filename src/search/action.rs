//! The two actions a digging player can perform: move or dig.

use std::fmt;

use crate::geometry::{BlockIndex, DigRange, Distance3D, Wrapping};

use super::DigMatrix;

/// An action performed on a volume from a given head position.
///
/// Actions are constructed once at startup (see [`all_actions_for`]) and
/// shared read-only across the whole search; validity is re-checked against
/// each state. Illegal offsets are programming errors and fail fast at
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// One horizontal step, optionally combined with one step up or down.
    Move(Distance3D),
    /// Removal of one in-range block, the player staying in place.
    Dig(Distance3D),
}

impl Action {
    /// A one-block step. Panics on offsets a player cannot step.
    pub fn step(dx: i32, dy: i32, dz: i32) -> Action {
        assert!(dy <= 1, "can't jump higher than 1 block");
        assert!(dy >= -1, "no going down lower than 1 block, to be able to go back");
        assert!(dx != 0 || dz != 0, "cannot stay in the same horizontal place, falls are not actions");
        assert!(dx == 0 || dz == 0, "moves are accepted only along one axis at a time");
        assert!(dx.abs() <= 1 && dz.abs() <= 1, "only moves of one block are accepted");
        Action::Move(Distance3D::new(dx, dy, dz))
    }

    /// A one-block dig. Panics on digs directly above the head or below the
    /// feet.
    pub fn dig(dx: i32, dy: i32, dz: i32) -> Action {
        assert!(dx != 0 || dz != 0, "never dig above the head or below the feet");
        Action::Dig(Distance3D::new(dx, dy, dz))
    }

    /// Whether this action can be performed on `matrix` with the player's
    /// head at `head`.
    pub fn is_valid_for(&self, matrix: &DigMatrix, head: BlockIndex) -> bool {
        match self {
            Action::Move(delta) => Self::is_valid_move(matrix, head, *delta),
            Action::Dig(delta) => Self::is_valid_dig(matrix, head, *delta),
        }
    }

    fn is_valid_move(matrix: &DigMatrix, head: BlockIndex, delta: Distance3D) -> bool {
        let dims = matrix.dimensions();
        // room for the head at the destination
        let head_dest = match dims.offset(head, delta, Wrapping::WrapXz) {
            Some(index) if matrix.is_dug(index) => index,
            _ => return false,
        };
        // room for the feet below it
        if !matrix.is_dug_below(head_dest) {
            return false;
        }
        // room for the body during the vertical part of the step
        match delta.dy {
            0 => true,
            // jumping first: clearance above the origin head
            1 => matrix.is_dug_above(head),
            // stepping off a ledge: clearance above the destination head
            -1 => matrix.is_dug_above(head_dest),
            _ => false,
        }
    }

    fn is_valid_dig(matrix: &DigMatrix, head: BlockIndex, delta: Distance3D) -> bool {
        let dims = matrix.dimensions();
        // horizontal wrap lets diagonally repeating patterns exist; vertical
        // wrap would conflate different absolute depths
        let target = match dims.offset(head, delta, Wrapping::WrapXz) {
            Some(index) if !matrix.is_dug(index) => index,
            _ => return false,
        };
        Self::is_path_clear(matrix, head, target, delta)
    }

    /// Line-of-sight approximation, not a true occlusion test:
    /// adjacency is always clear, a diagonal below the feet is always clear,
    /// and a diagonal above the head is clear only when one of the two
    /// blocks beside the path is already removed. Everything farther is
    /// treated as obstructed rather than running a real occlusion test.
    fn is_path_clear(
        matrix: &DigMatrix,
        head: BlockIndex,
        target: BlockIndex,
        delta: Distance3D,
    ) -> bool {
        match (delta.sq_norm(), delta.dy) {
            (1, _) => true,
            (2, -1) => true,
            (2, 1) => matrix.is_dug_above(head) || matrix.is_dug_below(target),
            _ => false,
        }
    }

    /// The index this action affects: the new head position for a move, the
    /// removed block for a dig. `None` when the offset clips out of bounds.
    pub fn target(&self, matrix: &DigMatrix, head: BlockIndex) -> Option<BlockIndex> {
        let delta = match self {
            Action::Move(delta) | Action::Dig(delta) => *delta,
        };
        matrix.dimensions().offset(head, delta, Wrapping::WrapXz)
    }

    fn sq_norm(&self) -> i32 {
        match self {
            Action::Move(delta) | Action::Dig(delta) => delta.sq_norm(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move(delta) => write!(f, "MoveOf{delta}"),
            Action::Dig(delta) => write!(f, "Dig{delta}"),
        }
    }
}

/// All the moves a player can make: the 4 horizontal directions, each flat,
/// one block up, or one block down.
pub fn all_moves() -> Vec<Action> {
    let values = [0, 1, -1];
    let mut moves = Vec::with_capacity(12);
    for dy in values {
        for dx in values {
            for dz in values {
                // we have to move horizontally, and never diagonally
                if (dx == 0 && dz == 0) || (dx != 0 && dz != 0) {
                    continue;
                }
                moves.push(Action::step(dx, dy, dz));
            }
        }
    }
    moves
}

/// All the digs inside the given reach envelope, nearest first.
pub fn all_digs_for(range: DigRange) -> Vec<Action> {
    let mut digs = Vec::new();
    for dy in -range.max_y()..=range.max_y() {
        for dx in -range.max_x(dy)..=range.max_x(dy) {
            for dz in -range.max_x(dy)..=range.max_x(dy) {
                if dx == 0 && dz == 0 {
                    continue; // never dig above the head or below the feet
                }
                if range.in_range(dx, dy, dz) {
                    digs.push(Action::dig(dx, dy, dz));
                }
            }
        }
    }
    digs.sort_by_key(Action::sq_norm);
    digs
}

/// The full legal action set for the given reach envelope: every move plus
/// every in-range dig, digs sorted so nearer ones are tried first.
pub fn all_actions_for(range: DigRange) -> Vec<Action> {
    let mut actions = all_moves();
    actions.extend(all_digs_for(range));
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Dimensions, Position};
    use std::sync::Arc;

    fn matrix(w: usize, h: usize, l: usize) -> DigMatrix {
        DigMatrix::new(Arc::new(Dimensions::new(w, h, l)))
    }

    fn index(m: &DigMatrix, x: usize, y: usize, z: usize) -> BlockIndex {
        m.dimensions().index_of(Position::new(x, y, z))
    }

    #[test]
    #[should_panic(expected = "jump higher")]
    fn test_step_rejects_high_jump() {
        Action::step(1, 2, 0);
    }

    #[test]
    #[should_panic(expected = "one axis at a time")]
    fn test_step_rejects_diagonal() {
        Action::step(1, 0, 1);
    }

    #[test]
    #[should_panic(expected = "never dig")]
    fn test_dig_rejects_vertical_column() {
        Action::dig(0, 3, 0);
    }

    #[test]
    fn test_all_moves_count_and_shape() {
        let moves = all_moves();
        assert_eq!(12, moves.len());
        for action in &moves {
            match action {
                Action::Move(d) => {
                    assert!(d.dy.abs() <= 1);
                    assert!((d.dx == 0) != (d.dz == 0));
                }
                Action::Dig(_) => panic!("all_moves produced a dig"),
            }
        }
    }

    #[test]
    fn test_digs_exclude_vertical_column_and_sort_by_distance() {
        let digs = all_digs_for(DigRange::Strict);
        assert!(!digs.is_empty());
        let mut last_norm = 0;
        for action in &digs {
            match action {
                Action::Dig(d) => {
                    assert!(d.dx != 0 || d.dz != 0);
                    assert!(d.sq_norm() >= last_norm);
                    last_norm = d.sq_norm();
                }
                Action::Move(_) => panic!("all_digs_for produced a move"),
            }
        }
    }

    #[test]
    fn test_move_requires_dug_destination() {
        let mut m = matrix(3, 3, 3);
        let head = index(&m, 1, 2, 0);
        m.dig(index(&m, 1, 1, 0));
        m.dig(head);

        let east = Action::step(1, 0, 0);
        assert!(!east.is_valid_for(&m, head));

        // clear the destination column
        m.dig(index(&m, 2, 2, 0));
        m.dig(index(&m, 2, 1, 0));
        assert!(east.is_valid_for(&m, head));
    }

    #[test]
    fn test_move_up_requires_head_clearance() {
        let mut m = matrix(3, 4, 3);
        let head = index(&m, 1, 1, 0);
        m.dig(index(&m, 1, 0, 0));
        m.dig(head);
        // destination column for a +x step up
        m.dig(index(&m, 2, 2, 0));
        m.dig(index(&m, 2, 1, 0));

        let up_east = Action::step(1, 1, 0);
        assert!(!up_east.is_valid_for(&m, head));

        m.dig(index(&m, 1, 2, 0)); // above the origin head
        assert!(up_east.is_valid_for(&m, head));
    }

    #[test]
    fn test_adjacent_dig_always_clear() {
        let mut m = matrix(3, 3, 3);
        let head = index(&m, 1, 2, 0);
        m.dig(index(&m, 1, 1, 0));
        m.dig(head);

        assert!(Action::dig(1, 0, 0).is_valid_for(&m, head));
        assert!(Action::dig(0, 0, 1).is_valid_for(&m, head));
        // already dug: nothing to remove
        let feet_dig = Action::dig(1, -1, 0);
        assert!(feet_dig.is_valid_for(&m, head));
        m.dig(index(&m, 2, 1, 0));
        assert!(!feet_dig.is_valid_for(&m, head));
    }

    #[test]
    fn test_diagonal_above_requires_side_clearance() {
        let mut m = matrix(3, 4, 3);
        let head = index(&m, 1, 1, 0);
        m.dig(index(&m, 1, 0, 0));
        m.dig(head);

        let diag_up = Action::dig(1, 1, 0);
        assert!(!diag_up.is_valid_for(&m, head));

        // clearing the block below the target opens the line of sight
        m.dig(index(&m, 2, 1, 0));
        assert!(diag_up.is_valid_for(&m, head));
    }

    #[test]
    fn test_far_digs_rejected_by_path_approximation() {
        let mut m = matrix(9, 5, 9);
        let head = index(&m, 4, 2, 4);
        m.dig(index(&m, 4, 1, 4));
        m.dig(head);

        // in range for Strict reach, but beyond the approximated clear paths
        assert!(DigRange::Strict.in_range(2, 0, 0));
        assert!(!Action::dig(2, 0, 0).is_valid_for(&m, head));
        assert!(!Action::dig(1, 0, 1).is_valid_for(&m, head));
    }
}
