//! Search configuration: difficulty tiers and their depth budgets.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Opponent strength tier.
///
/// Each tier maps to a fixed search depth; `Trivial` uses the one-ply
/// greedy chooser instead of minimax. The mapping is a table so new tiers
/// are additive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Trivial,
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// All tiers, weakest first.
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Trivial,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Search depth budget for this tier.
    #[must_use]
    pub const fn search_depth(self) -> u8 {
        match self {
            Difficulty::Trivial => 1,
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
            Difficulty::Expert => 5,
        }
    }

    /// Whether this tier uses the one-ply greedy chooser instead of minimax.
    #[must_use]
    pub const fn uses_greedy(self) -> bool {
        matches!(self, Difficulty::Trivial)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trivial" => Ok(Difficulty::Trivial),
            "easy" => Ok(Difficulty::Easy),
            "medium" | "normal" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "expert" => Ok(Difficulty::Expert),
            _ => Err(()),
        }
    }
}

/// Search configuration parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Opponent strength tier.
    pub difficulty: Difficulty,

    /// Random seed for greedy tie-breaking.
    /// Same seed produces deterministic choices.
    pub seed: u64,

    /// Explicit depth override. When set, replaces the tier's depth budget
    /// (useful for tests and tuning; `Some(0)` makes the root search return
    /// the static evaluation with no action applied).
    pub depth_override: Option<u8>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            seed: 42,
            depth_override: None,
        }
    }
}

impl SearchConfig {
    /// Create a config for a difficulty tier.
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    /// Create a new config with a custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with an explicit depth override.
    #[must_use]
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth_override = Some(depth);
        self
    }

    /// Effective search depth: override if set, else the tier's budget.
    #[must_use]
    pub fn depth(&self) -> u8 {
        self.depth_override
            .unwrap_or_else(|| self.difficulty.search_depth())
    }
}
