//! Connectivity oracle: breadth-first search over the grid graph.
//!
//! Walls turn the grid into a general planar graph; every wall-legality
//! check asks whether each player can still reach their goal row. This is
//! the engine's hot path (one query per player per candidate wall), so the
//! traversal stays allocation-light: a flat visited bitmap and a ring-buffer
//! queue, no per-node heap structures.
//!
//! BFS with unit edge costs also yields shortest-path lengths for the
//! heuristic evaluator. Neighbor expansion order only affects which of
//! several equal-length paths is found, never existence or length.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::core::{Edge, Position};

/// Length of the shortest path from `start` to any cell on `goal_row`,
/// honoring `blocked` edges. `None` if the goal row is unreachable.
#[must_use]
pub fn shortest_distance(
    start: Position,
    goal_row: u8,
    blocked: &FxHashSet<Edge>,
    size: u8,
) -> Option<u32> {
    if start.row == goal_row {
        return Some(0);
    }

    let n = size as usize;
    let mut visited = vec![false; n * n];
    visited[start.row as usize * n + start.col as usize] = true;

    let mut queue: VecDeque<(Position, u32)> = VecDeque::new();
    queue.push_back((start, 0));

    while let Some((pos, dist)) = queue.pop_front() {
        for next in pos.neighbors(size) {
            let idx = next.row as usize * n + next.col as usize;
            if visited[idx] || blocked.contains(&Edge::new(pos, next)) {
                continue;
            }
            if next.row == goal_row {
                return Some(dist + 1);
            }
            visited[idx] = true;
            queue.push_back((next, dist + 1));
        }
    }

    None
}

/// Whether any route from `start` to `goal_row` survives the blocked edges.
#[must_use]
pub fn has_path(start: Position, goal_row: u8, blocked: &FxHashSet<Edge>, size: u8) -> bool {
    shortest_distance(start, goal_row, blocked, size).is_some()
}
