//! Grid cells and orthogonal movement.
//!
//! Positions are `(row, col)` pairs, 0-indexed from the top-left corner.
//! The grid size is a board parameter, so bounds checks always take it as
//! an argument rather than consulting a global constant.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A cell on the grid, identified by `(row, col)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

/// The four orthogonal step directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    Up,
    Down,
    Left,
    Right,
}

impl Step {
    /// All four directions, in a fixed enumeration order.
    pub const ALL: [Step; 4] = [Step::Up, Step::Down, Step::Left, Step::Right];

    /// The two directions perpendicular to this one.
    #[must_use]
    pub const fn perpendicular(self) -> [Step; 2] {
        match self {
            Step::Up | Step::Down => [Step::Left, Step::Right],
            Step::Left | Step::Right => [Step::Up, Step::Down],
        }
    }

    /// Row/col delta for this step.
    #[must_use]
    pub const fn delta(self) -> (i16, i16) {
        match self {
            Step::Up => (-1, 0),
            Step::Down => (1, 0),
            Step::Left => (0, -1),
            Step::Right => (0, 1),
        }
    }
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Whether this position lies on an `size`×`size` grid.
    #[must_use]
    pub const fn in_bounds(self, size: u8) -> bool {
        self.row < size && self.col < size
    }

    /// The cell one step in the given direction, if it stays on the grid.
    #[must_use]
    pub fn step(self, step: Step, size: u8) -> Option<Position> {
        let (dr, dc) = step.delta();
        let row = self.row as i16 + dr;
        let col = self.col as i16 + dc;
        if row < 0 || col < 0 || row >= size as i16 || col >= size as i16 {
            None
        } else {
            Some(Position::new(row as u8, col as u8))
        }
    }

    /// In-bounds orthogonal neighbors of this cell.
    #[must_use]
    pub fn neighbors(self, size: u8) -> SmallVec<[Position; 4]> {
        Step::ALL
            .iter()
            .filter_map(|&s| self.step(s, size))
            .collect()
    }

    /// Whether `other` is orthogonally adjacent to this cell.
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        let dr = (self.row as i16 - other.row as i16).abs();
        let dc = (self.col as i16 - other.col as i16).abs();
        dr + dc == 1
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
