//! Walls and the edges they block.
//!
//! A wall is anchored at a grid intersection `(x, y)` with
//! `0 <= x, y <= size - 2`. The anchor names the intersection between rows
//! `x`/`x+1` and columns `y`/`y+1`. Every wall blocks exactly two
//! adjacent-cell traversal edges:
//!
//! - Horizontal at `(x, y)`: blocks `(x,y)-(x+1,y)` and `(x,y+1)-(x+1,y+1)`
//!   (vertical movement across the wall, over two columns).
//! - Vertical at `(x, y)`: blocks `(x,y)-(x,y+1)` and `(x+1,y)-(x+1,y+1)`
//!   (horizontal movement across the wall, over two rows).

use serde::{Deserialize, Serialize};

use super::position::Position;

/// Wall orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// An unordered pair of orthogonally adjacent cells whose direct traversal
/// is forbidden by a wall.
///
/// Stored normalized (lesser position first) so that `(a, b)` and `(b, a)`
/// hash and compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge(Position, Position);

impl Edge {
    /// Create an edge between two adjacent cells, normalizing order.
    #[must_use]
    pub fn new(a: Position, b: Position) -> Self {
        debug_assert!(a.is_adjacent(b), "edge endpoints must be adjacent");
        if a <= b {
            Edge(a, b)
        } else {
            Edge(b, a)
        }
    }

    /// The two endpoints, in normalized order.
    #[must_use]
    pub fn endpoints(self) -> (Position, Position) {
        (self.0, self.1)
    }
}

/// A placed wall: anchor intersection plus orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wall {
    pub x: u8,
    pub y: u8,
    pub orientation: Orientation,
}

impl Wall {
    /// Create a new wall. Bounds are validated by the board, not here.
    #[must_use]
    pub const fn new(x: u8, y: u8, orientation: Orientation) -> Self {
        Self { x, y, orientation }
    }

    /// Whether the anchor is a legal placement slot on an `size`×`size` grid.
    #[must_use]
    pub const fn in_bounds(self, size: u8) -> bool {
        self.x <= size - 2 && self.y <= size - 2
    }

    /// The two traversal edges this wall blocks.
    #[must_use]
    pub fn blocked_edges(self) -> [Edge; 2] {
        let (x, y) = (self.x, self.y);
        match self.orientation {
            Orientation::Horizontal => [
                Edge::new(Position::new(x, y), Position::new(x + 1, y)),
                Edge::new(Position::new(x, y + 1), Position::new(x + 1, y + 1)),
            ],
            Orientation::Vertical => [
                Edge::new(Position::new(x, y), Position::new(x, y + 1)),
                Edge::new(Position::new(x + 1, y), Position::new(x + 1, y + 1)),
            ],
        }
    }

    /// Whether placing this wall would cross the already-placed `existing`.
    ///
    /// A horizontal wall at `(x, y)` conflicts with a vertical wall anchored
    /// at `(x, y)` or `(x, y+1)`; a vertical wall at `(x, y)` conflicts with
    /// a horizontal wall anchored at `(x, y)` or `(x+1, y)`. The check is
    /// directional: it is applied at placement time, new wall against each
    /// existing wall.
    #[must_use]
    pub fn crosses(self, existing: Wall) -> bool {
        match (self.orientation, existing.orientation) {
            (Orientation::Horizontal, Orientation::Vertical) => {
                existing.x == self.x && (existing.y == self.y || existing.y == self.y + 1)
            }
            (Orientation::Vertical, Orientation::Horizontal) => {
                existing.y == self.y && (existing.x == self.x || existing.x == self.x + 1)
            }
            _ => false,
        }
    }
}

impl std::fmt::Display for Wall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let o = match self.orientation {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
        };
        write!(f, "{}({}, {})", o, self.x, self.y)
    }
}
