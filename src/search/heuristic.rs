//! Static board evaluation.
//!
//! Scores a position from one player's perspective; higher is better for
//! them. Three weighted terms: shortest-path differential (dominant),
//! mobility differential, and wall-budget differential. Terminal positions
//! short-circuit to a win/loss sentinel whose magnitude no heuristic sum
//! can reach, so search always prefers a real win.

use crate::core::Player;
use crate::rules::Board;

/// Win/loss sentinel. On a 9x9 board the heuristic sum is bounded well
/// below this (path term at most ~800).
pub const WIN_SCORE: f64 = 10_000.0;

const PATH_WEIGHT: f64 = 10.0;
const MOBILITY_WEIGHT: f64 = 0.5;
const WALL_WEIGHT: f64 = 1.0;

/// Evaluate `board` from `perspective`'s point of view.
#[must_use]
pub fn evaluate(board: &Board, perspective: Player) -> f64 {
    if let Some(winner) = board.winner() {
        return if winner == perspective {
            WIN_SCORE
        } else {
            -WIN_SCORE
        };
    }

    let opponent = perspective.opponent();

    // Boards reached through the validated transitions always have both
    // paths; a missing one is scored as decided rather than panicking.
    let own_dist = match board.shortest_distance(perspective) {
        Some(d) => f64::from(d),
        None => return -WIN_SCORE,
    };
    let opp_dist = match board.shortest_distance(opponent) {
        Some(d) => f64::from(d),
        None => return WIN_SCORE,
    };

    let path_term = (opp_dist - own_dist) * PATH_WEIGHT;
    let mobility_term = (f64::from(board.mobility(perspective))
        - f64::from(board.mobility(opponent)))
        * MOBILITY_WEIGHT;
    let wall_term = (f64::from(board.walls_remaining(perspective))
        - f64::from(board.walls_remaining(opponent)))
        * WALL_WEIGHT;

    path_term + mobility_term + wall_term
}
