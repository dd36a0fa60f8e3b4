//! Difficulty-tiered action selector.
//!
//! `AiPlayer` is the entry point a caller hands the live board to. The
//! shallow tier ranks every legal action with one heuristic evaluation and
//! breaks score ties at random (a deterministic chooser is trivially
//! exploitable); deeper tiers delegate to alpha-beta minimax. The caller's
//! board is never mutated — all exploration happens on clones.

use log::{debug, error};

use crate::core::{EngineRng, Player};
use crate::rules::{Action, Board};

use super::candidate_actions;
use super::config::SearchConfig;
use super::heuristic::evaluate;
use super::minimax::{Minimax, SearchStats};

/// Action selector for one side.
#[derive(Debug)]
pub struct AiPlayer {
    config: SearchConfig,
    rng: EngineRng,
    minimax: Minimax,
}

impl AiPlayer {
    /// Create a selector from a search configuration. The configuration's
    /// seed fixes the greedy tie-breaking sequence.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        let rng = EngineRng::new(config.seed);
        Self {
            config,
            rng,
            minimax: Minimax::new(),
        }
    }

    /// The configuration this selector was built with.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics from the most recent minimax search. Zeroed counters for
    /// greedy-tier selectors.
    #[must_use]
    pub fn last_stats(&self) -> &SearchStats {
        self.minimax.stats()
    }

    /// Choose an action for `player` on (a clone of) `board`.
    ///
    /// Returns `None` on a terminal board, and also if a non-terminal board
    /// yields no legal actions — the latter is an invariant violation in a
    /// well-formed game and is reported at `error!` level rather than
    /// silently ignored.
    pub fn choose_action(&mut self, board: &Board, player: Player) -> Option<Action> {
        if board.is_terminal() {
            return None;
        }

        let chosen = if self.config.difficulty.uses_greedy() {
            self.choose_greedy(board, player)
        } else {
            let depth = self.config.depth();
            let outcome = self.minimax.search(board, player, depth);
            let stats = self.minimax.stats();
            debug!(
                "{} search: depth {}, {} nodes, {} cutoffs, {}us, score {:.1}",
                player, depth, stats.nodes, stats.cutoffs, stats.time_us, outcome.score
            );
            outcome.action
        };

        if chosen.is_none() {
            error!("no legal actions for {} on a non-terminal board", player);
        }
        chosen
    }

    /// One-ply greedy selection: score each action's resulting position and
    /// pick uniformly at random among the tied maxima.
    fn choose_greedy(&mut self, board: &Board, player: Player) -> Option<Action> {
        let actions = candidate_actions(board, player);

        let mut best_score = f64::NEG_INFINITY;
        let mut best: Vec<Action> = Vec::new();

        for action in actions {
            let mut child = board.clone();
            if child.apply(player, action).is_err() {
                continue;
            }
            let score = evaluate(&child, player);
            if score > best_score {
                best_score = score;
                best.clear();
                best.push(action);
            } else if score == best_score {
                best.push(action);
            }
        }

        debug!(
            "{} greedy: {} tied at {:.1}",
            player,
            best.len(),
            best_score
        );
        self.rng.choose(&best).copied()
    }
}
