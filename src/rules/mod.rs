//! The rules engine: board state, validated transitions, connectivity.
//!
//! `Board` owns the grid state and exposes the two pure-fail transitions
//! (`try_move`, `try_place_wall`) plus the queries the search subsystem
//! needs. `path` is the connectivity oracle behind wall legality and the
//! heuristic's shortest-path terms.

pub mod board;
pub mod path;

pub use board::{Action, Board, RuleViolation, DEFAULT_GRID_SIZE, DEFAULT_WALL_BUDGET};
pub use path::{has_path, shortest_distance};
