//! Minimax search with alpha-beta pruning.
//!
//! A recursive two-player zero-sum search over cloned boards. The searching
//! player is always the maximizer; the flag flips with the turn, which the
//! board tracks itself after every applied action. Backtracking is "discard
//! the clone" — the caller's board is never touched.
//!
//! Pruning never changes the returned value, only the number of explored
//! nodes (asserted against a pruning-free reference in the integration
//! tests).

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::rules::{Action, Board};

use super::candidate_actions;
use super::heuristic::{evaluate, WIN_SCORE};

/// Statistics from the most recent search.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Interior and leaf nodes visited.
    pub nodes: u64,

    /// Alpha-beta cutoffs taken.
    pub cutoffs: u64,

    /// Depth budget of the search.
    pub depth: u8,

    /// Total search time (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Nodes visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

/// Result of a root search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome {
    /// The best action found, `None` at depth 0 or when no action exists.
    pub action: Option<Action>,
    /// Score of that action (or the static evaluation when `action` is
    /// `None`), from the searching player's perspective.
    pub score: f64,
}

/// Alpha-beta minimax search context.
#[derive(Clone, Debug, Default)]
pub struct Minimax {
    stats: SearchStats,
}

impl Minimax {
    /// Create a new search context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics from the most recent `search` call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Search for `player`'s best action to the given depth.
    ///
    /// Depth 0 applies no action and returns the static evaluation. A
    /// terminal board likewise returns no action, scored at the sentinel.
    pub fn search(&mut self, board: &Board, player: Player, depth: u8) -> SearchOutcome {
        let start = Instant::now();
        self.stats.reset();
        self.stats.depth = depth;

        let outcome = self.root(board, player, depth);
        self.stats.time_us = start.elapsed().as_micros() as u64;
        outcome
    }

    fn root(&mut self, board: &Board, player: Player, depth: u8) -> SearchOutcome {
        if board.is_terminal() || depth == 0 {
            return SearchOutcome {
                action: None,
                score: evaluate(board, player),
            };
        }

        let actions = candidate_actions(board, player);
        if actions.is_empty() {
            return SearchOutcome {
                action: None,
                score: evaluate(board, player),
            };
        }

        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;
        let mut best_score = f64::NEG_INFINITY;
        let mut best_action = None;

        for action in actions {
            let mut child = board.clone();
            if child.apply(player, action).is_err() {
                // candidate_actions only yields applicable actions
                continue;
            }
            let score = self.node(&child, player, depth - 1, alpha, beta);
            if score > best_score {
                best_score = score;
                best_action = Some(action);
            }
            alpha = alpha.max(best_score);
        }

        SearchOutcome {
            action: best_action,
            score: best_score,
        }
    }

    fn node(&mut self, board: &Board, root: Player, depth: u8, mut alpha: f64, mut beta: f64) -> f64 {
        self.stats.nodes += 1;

        // Terminal beats depth: a decided position is scored immediately.
        if let Some(winner) = board.winner() {
            return if winner == root { WIN_SCORE } else { -WIN_SCORE };
        }
        if depth == 0 {
            return evaluate(board, root);
        }

        let mover = board.to_move();
        let actions = candidate_actions(board, mover);
        if actions.is_empty() {
            return evaluate(board, root);
        }

        if mover == root {
            let mut value = f64::NEG_INFINITY;
            for action in actions {
                let mut child = board.clone();
                if child.apply(mover, action).is_err() {
                    continue;
                }
                value = value.max(self.node(&child, root, depth - 1, alpha, beta));
                alpha = alpha.max(value);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            value
        } else {
            let mut value = f64::INFINITY;
            for action in actions {
                let mut child = board.clone();
                if child.apply(mover, action).is_err() {
                    continue;
                }
                value = value.min(self.node(&child, root, depth - 1, alpha, beta));
                beta = beta.min(value);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            value
        }
    }
}
