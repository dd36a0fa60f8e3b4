//! The rules engine: board state and its two validated transitions.
//!
//! ## Board
//!
//! A `Board` is the complete unit of game state: pawn positions, placed
//! walls, the blocked-edge set derived from them, per-player wall budgets,
//! and whose turn it is. It is the snapshot cloned by the search engine when
//! exploring hypothetical lines; the live instance changes only through
//! `try_move` and `try_place_wall`.
//!
//! ## Failure semantics
//!
//! Every mutator is pure-fail: an illegal request leaves the board
//! byte-for-byte unchanged and returns a `RuleViolation`. Nothing panics.
//!
//! ## Blocked edges
//!
//! The blocked-edge set is updated incrementally as walls commit. Walls are
//! never removed, so the incremental set always equals a full recomputation
//! from the wall list (cross-checked by a debug assertion on every commit).

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Edge, Orientation, Player, PlayerMap, Position, Step, Wall};

use super::path;

/// Default grid size: the classic 9x9 board.
pub const DEFAULT_GRID_SIZE: u8 = 9;

/// Default per-player wall budget.
pub const DEFAULT_WALL_BUDGET: u8 = 10;

/// One of the two things a player can do on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the pawn to `target`.
    Move { target: Position },
    /// Place a wall.
    PlaceWall { wall: Wall },
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move { target } => write!(f, "move {}", target),
            Action::PlaceWall { wall } => write!(f, "wall {}", wall),
        }
    }
}

/// Why a requested transition was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleViolation {
    /// The pawn target fails all three move categories.
    IllegalMove,
    /// Out-of-bounds, duplicate, crossing, or path-severing wall.
    IllegalWallPlacement,
    /// The requesting player has no walls left.
    NoWallsRemaining,
}

impl std::fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleViolation::IllegalMove => write!(f, "illegal pawn move"),
            RuleViolation::IllegalWallPlacement => write!(f, "illegal wall placement"),
            RuleViolation::NoWallsRemaining => write!(f, "no walls remaining"),
        }
    }
}

impl std::error::Error for RuleViolation {}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: u8,
    pawns: PlayerMap<Position>,
    walls: Vec<Wall>,
    blocked: FxHashSet<Edge>,
    walls_left: PlayerMap<u8>,
    to_move: Player,
}

impl Board {
    /// Create a starting position: pawns centered on their home rows, no
    /// walls, full budgets, `First` to move.
    ///
    /// # Panics
    ///
    /// Panics if `size < 2` (there is no wall slot or race on smaller grids).
    #[must_use]
    pub fn new(size: u8, wall_budget: u8) -> Self {
        assert!(size >= 2, "grid must be at least 2x2");
        let center = size / 2;
        Self {
            size,
            pawns: PlayerMap::new(|p| match p {
                Player::First => Position::new(0, center),
                Player::Second => Position::new(size - 1, center),
            }),
            walls: Vec::new(),
            blocked: FxHashSet::default(),
            walls_left: PlayerMap::with_value(wall_budget),
            to_move: Player::First,
        }
    }

    // === Queries ===

    /// Grid size N (the board is N×N).
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// A player's pawn position.
    #[must_use]
    pub fn pawn(&self, player: Player) -> Position {
        self.pawns[player]
    }

    /// All committed walls, in placement order.
    #[must_use]
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// The blocked-edge set derived from the committed walls.
    #[must_use]
    pub fn blocked_edges(&self) -> &FxHashSet<Edge> {
        &self.blocked
    }

    /// Remaining wall budget for a player.
    #[must_use]
    pub fn walls_remaining(&self, player: Player) -> u8 {
        self.walls_left[player]
    }

    /// The player to act next.
    #[must_use]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Whether the direct step between two adjacent cells is walled off.
    #[must_use]
    pub fn is_edge_blocked(&self, a: Position, b: Position) -> bool {
        self.blocked.contains(&Edge::new(a, b))
    }

    /// Whether some pawn stands on its goal row.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some()
    }

    /// The player whose pawn stands on its goal row, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        Player::BOTH
            .into_iter()
            .find(|&p| self.pawns[p].row == p.goal_row(self.size))
    }

    /// Shortest-path length from a player's pawn to their goal row, honoring
    /// walls. `None` only on boards mutated outside the validated
    /// transitions; `try_place_wall` guarantees both paths survive.
    #[must_use]
    pub fn shortest_distance(&self, player: Player) -> Option<u32> {
        path::shortest_distance(
            self.pawns[player],
            player.goal_row(self.size),
            &self.blocked,
            self.size,
        )
    }

    /// Whether a player can still reach their goal row.
    #[must_use]
    pub fn has_path(&self, player: Player) -> bool {
        self.shortest_distance(player).is_some()
    }

    /// Count of a player's unblocked in-bounds orthogonal neighbor cells.
    /// Opponent occupancy is ignored; this is the mobility term of the
    /// heuristic, not the legal-move count.
    #[must_use]
    pub fn mobility(&self, player: Player) -> u32 {
        let from = self.pawns[player];
        from.neighbors(self.size)
            .iter()
            .filter(|&&next| !self.is_edge_blocked(from, next))
            .count() as u32
    }

    // === Pawn moves ===

    /// All legal pawn-move targets for a player from their current cell.
    ///
    /// Three mutually exclusive categories per direction:
    ///
    /// - plain step to an unoccupied adjacent cell with an unblocked edge;
    /// - straight jump two cells through an adjacent opponent, when the
    ///   beyond cell is in-bounds and both edges (mover→opponent and
    ///   opponent→beyond) are unblocked;
    /// - diagonal side-steps to the two cells perpendicular to the
    ///   mover→opponent axis, only when the straight jump is unavailable
    ///   (beyond off-board or its edge blocked), each requiring an unblocked
    ///   opponent→target edge.
    #[must_use]
    pub fn move_targets(&self, player: Player) -> SmallVec<[Position; 6]> {
        let from = self.pawns[player];
        let opponent = self.pawns[player.opponent()];
        let mut targets = SmallVec::new();

        for step in Step::ALL {
            let Some(next) = from.step(step, self.size) else {
                continue;
            };
            if self.is_edge_blocked(from, next) {
                continue;
            }
            if next != opponent {
                targets.push(next);
                continue;
            }

            // Opponent directly ahead: straight jump if available, else the
            // two diagonal side-steps around them.
            let beyond = next.step(step, self.size);
            match beyond {
                Some(beyond) if !self.is_edge_blocked(next, beyond) => targets.push(beyond),
                _ => {
                    for side in step.perpendicular() {
                        if let Some(diag) = next.step(side, self.size) {
                            if !self.is_edge_blocked(next, diag) {
                                targets.push(diag);
                            }
                        }
                    }
                }
            }
        }

        targets
    }

    /// Whether moving `player`'s pawn to `target` is legal right now.
    #[must_use]
    pub fn is_valid_move(&self, player: Player, target: Position) -> bool {
        self.move_targets(player).contains(&target)
    }

    /// Move a pawn. On success the turn advances; on failure nothing changes.
    pub fn try_move(&mut self, player: Player, target: Position) -> Result<(), RuleViolation> {
        if !self.is_valid_move(player, target) {
            return Err(RuleViolation::IllegalMove);
        }
        self.pawns[player] = target;
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    // === Wall placement ===

    /// Whether both players keep a route to their goal rows after adding
    /// `wall`'s edges to the blocked set. Shared by wall legality and the
    /// search layer's candidate pre-filter so the two cannot diverge.
    #[must_use]
    pub fn wall_keeps_paths(&self, wall: Wall) -> bool {
        let mut blocked = self.blocked.clone();
        for edge in wall.blocked_edges() {
            blocked.insert(edge);
        }
        Player::BOTH.into_iter().all(|p| {
            path::has_path(self.pawns[p], p.goal_row(self.size), &blocked, self.size)
        })
    }

    /// Whether `wall` may be placed: in-bounds anchor, no duplicate, no
    /// crossing, and both players keep a path to their goal rows.
    #[must_use]
    pub fn can_place_wall(&self, wall: Wall) -> bool {
        wall.in_bounds(self.size)
            && !self.walls.contains(&wall)
            && !self.walls.iter().any(|&existing| wall.crosses(existing))
            && self.wall_keeps_paths(wall)
    }

    /// Place a wall for `player`. On success the wall commits, the blocked
    /// edges update, the budget decrements, and the turn advances; on
    /// failure nothing changes.
    pub fn try_place_wall(&mut self, player: Player, wall: Wall) -> Result<(), RuleViolation> {
        if self.walls_left[player] == 0 {
            return Err(RuleViolation::NoWallsRemaining);
        }
        if !self.can_place_wall(wall) {
            return Err(RuleViolation::IllegalWallPlacement);
        }

        self.walls.push(wall);
        for edge in wall.blocked_edges() {
            self.blocked.insert(edge);
        }
        self.walls_left[player] -= 1;
        self.to_move = self.to_move.opponent();

        debug_assert_eq!(
            self.blocked,
            self.walls
                .iter()
                .flat_map(|w| w.blocked_edges())
                .collect::<FxHashSet<_>>(),
            "incremental blocked-edge set drifted from the wall list"
        );
        Ok(())
    }

    // === Action enumeration ===

    /// Every legal action for a player: all pawn-move targets plus, budget
    /// permitting, every wall placement passing `can_place_wall`.
    #[must_use]
    pub fn legal_actions(&self, player: Player) -> Vec<Action> {
        let mut actions: Vec<Action> = self
            .move_targets(player)
            .into_iter()
            .map(|target| Action::Move { target })
            .collect();

        if self.walls_left[player] > 0 {
            for x in 0..self.size - 1 {
                for y in 0..self.size - 1 {
                    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                        let wall = Wall::new(x, y, orientation);
                        if self.can_place_wall(wall) {
                            actions.push(Action::PlaceWall { wall });
                        }
                    }
                }
            }
        }

        actions
    }

    /// Apply any action through the validated transitions.
    pub fn apply(&mut self, player: Player, action: Action) -> Result<(), RuleViolation> {
        match action {
            Action::Move { target } => self.try_move(player, target),
            Action::PlaceWall { wall } => self.try_place_wall(player, wall),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE, DEFAULT_WALL_BUDGET)
    }
}
