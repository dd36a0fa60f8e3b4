//! Property-based tests over random playouts.
//!
//! Games are driven by a seeded [`EngineRng`] picking uniformly among the
//! legal actions, so every case is reproducible from its seed. Case counts
//! are kept low; each case plays out a whole game worth of rule checks.

use proptest::prelude::*;

use quoridor_engine::{Action, Board, EngineRng, Player, Position, Wall};

const PLY_CAP: usize = 60;

/// Play up to `PLY_CAP` random legal plies, yielding each applied action.
fn random_playout(size: u8, budget: u8, seed: u64) -> (Board, Vec<(Player, Action)>) {
    let mut board = Board::new(size, budget);
    let mut rng = EngineRng::new(seed);
    let mut history = Vec::new();

    for _ in 0..PLY_CAP {
        if board.is_terminal() {
            break;
        }
        let player = board.to_move();
        let actions = board.legal_actions(player);
        let action = *rng.choose(&actions).expect("non-terminal board has actions");
        board.apply(player, action).expect("legal action applies");
        history.push((player, action));
    }

    (board, history)
}

/// Rotate a cell 180 degrees on a `size` grid.
fn mirror_position(p: Position, size: u8) -> Position {
    Position::new(size - 1 - p.row, size - 1 - p.col)
}

/// Rotate a wall anchor 180 degrees. Orientation is preserved.
fn mirror_wall(w: Wall, size: u8) -> Wall {
    Wall::new(size - 2 - w.x, size - 2 - w.y, w.orientation)
}

fn mirror_action(action: Action, size: u8) -> Action {
    match action {
        Action::Move { target } => Action::Move {
            target: mirror_position(target, size),
        },
        Action::PlaceWall { wall } => Action::PlaceWall {
            wall: mirror_wall(wall, size),
        },
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Core safety invariants hold at every ply of a random game.
    #[test]
    fn playout_invariants(seed in any::<u64>()) {
        let size = 5;
        let budget = 3;
        let mut board = Board::new(size, budget);
        let mut rng = EngineRng::new(seed);

        for _ in 0..PLY_CAP {
            if board.is_terminal() {
                break;
            }
            let player = board.to_move();
            let actions = board.legal_actions(player);
            prop_assert!(!actions.is_empty(), "non-terminal board must offer actions");

            let action = *rng.choose(&actions).unwrap();
            board.apply(player, action).unwrap();

            // Both pawns stay on the grid and never share a cell.
            for p in Player::BOTH {
                let pawn = board.pawn(p);
                prop_assert!(pawn.row < size && pawn.col < size);
            }
            prop_assert_ne!(board.pawn(Player::First), board.pawn(Player::Second));

            // No accepted wall ever severs a player's route to goal.
            for p in Player::BOTH {
                prop_assert!(board.has_path(p), "{:?} lost its path", p);
            }

            // Wall accounting: every spent wall is on the board.
            let spent = 2 * budget
                - board.walls_remaining(Player::First)
                - board.walls_remaining(Player::Second);
            prop_assert_eq!(board.walls().len(), spent as usize);
        }
    }

    /// The rules are symmetric under 180-degree rotation with the players
    /// swapped: replaying a game's mirror image is legal move for move and
    /// lands in the mirrored final position.
    #[test]
    fn rotation_symmetry(seed in any::<u64>()) {
        let size = 5;
        let budget = 2;
        let (original, history) = random_playout(size, budget, seed);

        let mut mirrored = Board::new(size, budget);
        for &(player, action) in &history {
            let swapped = player.opponent();
            let image = mirror_action(action, size);
            prop_assert!(
                mirrored.apply(swapped, image).is_ok(),
                "mirror of legal action {} rejected", action
            );
        }

        prop_assert_eq!(
            mirrored.pawn(Player::First),
            mirror_position(original.pawn(Player::Second), size)
        );
        prop_assert_eq!(
            mirrored.pawn(Player::Second),
            mirror_position(original.pawn(Player::First), size)
        );
        prop_assert_eq!(
            mirrored.walls_remaining(Player::First),
            original.walls_remaining(Player::Second)
        );
        prop_assert_eq!(
            original.winner().map(Player::opponent),
            mirrored.winner()
        );
    }

    /// Shortest distances are exact: a pawn walked greedily along any
    /// shortest route reaches its goal in exactly that many moves.
    #[test]
    fn distance_is_achievable(seed in any::<u64>()) {
        let size = 5;
        // Let a few random walls land first.
        let (board, _) = random_playout(size, 2, seed);
        if board.is_terminal() {
            return Ok(());
        }

        let player = board.to_move();

        // With the opponent adjacent the first step of a shortest route can
        // be occupied; only the unobstructed case has an exact guarantee.
        if board.pawn(player).is_adjacent(board.pawn(player.opponent())) {
            return Ok(());
        }

        let start_dist = board
            .shortest_distance(player)
            .expect("paths are never severed");

        // The best move steps onto a shortest route, shrinking the
        // distance by exactly one.
        let best_after = board
            .move_targets(player)
            .iter()
            .filter_map(|&target| {
                let mut next = board.clone();
                next.try_move(player, target).ok()?;
                next.shortest_distance(player)
            })
            .min()
            .expect("non-terminal pawn can move");
        prop_assert_eq!(best_after + 1, start_dist);
    }
}
