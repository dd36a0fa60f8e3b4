//! # quoridor-engine
//!
//! A two-player Quoridor rules engine plus an adversarial search opponent.
//!
//! ## Design Principles
//!
//! 1. **Pure-fail transitions**: every mutator either fully applies or
//!    leaves the board untouched and returns a `RuleViolation`. No panics.
//!
//! 2. **Connectivity is law**: a wall that would cut either player off from
//!    their goal row is illegal at the rules layer, not just filtered by
//!    the AI. Legality and search share one connectivity test.
//!
//! 3. **Search on clones**: exploration only ever mutates copies; the live
//!    board changes when the caller applies a chosen action to it.
//!
//! 4. **Parameterized grid**: the 9x9 board is a default, not a hardcoded
//!    literal, so everything is testable on small grids.
//!
//! ## Modules
//!
//! - `core`: positions, players, walls, deterministic RNG
//! - `rules`: the board state machine and the connectivity oracle
//! - `search`: heuristic evaluation, alpha-beta minimax, action selector
//!
//! ## Example
//!
//! ```
//! use quoridor_engine::{AiPlayer, Board, Difficulty, Player, Position, SearchConfig};
//!
//! let mut board = Board::default();
//!
//! // Human plays First by hand...
//! board.try_move(Player::First, Position::new(1, 4)).unwrap();
//!
//! // ...the engine answers as Second.
//! let mut ai = AiPlayer::new(SearchConfig::for_difficulty(Difficulty::Easy));
//! let action = ai.choose_action(&board, Player::Second).unwrap();
//! board.apply(Player::Second, action).unwrap();
//! ```

pub mod core;
pub mod rules;
pub mod search;

// Re-export the public surface.
pub use crate::core::{Edge, EngineRng, Orientation, Player, PlayerMap, Position, Step, Wall};
pub use crate::rules::{Action, Board, RuleViolation, DEFAULT_GRID_SIZE, DEFAULT_WALL_BUDGET};
pub use crate::search::{
    evaluate, AiPlayer, Difficulty, Minimax, SearchConfig, SearchOutcome, SearchStats, WIN_SCORE,
};
