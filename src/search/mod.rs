//! Adversarial search: heuristic evaluation, alpha-beta minimax, and the
//! difficulty-tiered action selector.
//!
//! ## Overview
//!
//! - `heuristic`: static evaluation from one player's perspective.
//! - `minimax`: depth-bounded alpha-beta over cloned boards.
//! - `agent`: `AiPlayer`, the caller-facing chooser (greedy at the shallow
//!   tier, minimax above it).
//! - `config`: difficulty→depth table and the seedable RNG configuration.
//!
//! ## Usage
//!
//! ```
//! use quoridor_engine::rules::Board;
//! use quoridor_engine::search::{AiPlayer, Difficulty, SearchConfig};
//!
//! let mut board = Board::default();
//! let mut ai = AiPlayer::new(SearchConfig::for_difficulty(Difficulty::Easy));
//!
//! let player = board.to_move();
//! if let Some(action) = ai.choose_action(&board, player) {
//!     board.apply(player, action).unwrap();
//! }
//! ```

pub mod agent;
pub mod config;
pub mod heuristic;
pub mod minimax;

pub use agent::AiPlayer;
pub use config::{Difficulty, SearchConfig};
pub use heuristic::{evaluate, WIN_SCORE};
pub use minimax::{Minimax, SearchOutcome, SearchStats};

use crate::core::Player;
use crate::rules::{Action, Board};

/// Candidate actions for search.
///
/// `legal_actions` already guarantees every wall keeps both players
/// connected; the explicit screen here re-applies the board's own
/// `wall_keeps_paths` so candidate generation can never drift from wall
/// legality if either changes.
#[must_use]
pub fn candidate_actions(board: &Board, player: Player) -> Vec<Action> {
    board
        .legal_actions(player)
        .into_iter()
        .filter(|action| match action {
            Action::PlaceWall { wall } => board.wall_keeps_paths(*wall),
            Action::Move { .. } => true,
        })
        .collect()
}
