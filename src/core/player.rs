//! Player identity and per-player data storage.
//!
//! ## Player
//!
//! The two sides of the game. `First` starts on row 0 and races toward the
//! bottom row; `Second` starts on the bottom row and races toward row 0.
//!
//! ## PlayerMap
//!
//! Two-slot per-player storage with O(1) indexed access, the board's backing
//! store for pawn positions and wall budgets.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// Both players, in turn order.
    pub const BOTH: [Player; 2] = [Player::First, Player::Second];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// The row this player must reach to win, on an `size`×`size` grid.
    #[must_use]
    pub const fn goal_row(self, size: u8) -> u8 {
        match self {
            Player::First => size - 1,
            Player::Second => 0,
        }
    }

    /// Slot index for `PlayerMap` storage.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::First => write!(f, "First"),
            Player::Second => write!(f, "Second"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use quoridor_engine::core::{Player, PlayerMap};
///
/// let mut walls = PlayerMap::with_value(10u8);
/// walls[Player::First] -= 1;
/// assert_eq!(walls[Player::First], 9);
/// assert_eq!(walls[Player::Second], 10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create from a factory function receiving each `Player`.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::First), factory(Player::Second)],
        }
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's entry.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's entry.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over `(Player, &T)` pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::BOTH.iter().map(move |&p| (p, self.get(p)))
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
