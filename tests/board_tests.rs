//! Rules-engine integration tests against the public API.

use quoridor_engine::{
    Action, Board, Orientation, Player, Position, RuleViolation, Wall,
};

// =============================================================================
// Opening Position
// =============================================================================

#[test]
fn test_opening_legal_actions_for_first() {
    let board = Board::default();
    let actions = board.legal_actions(Player::First);

    let move_targets: Vec<Position> = actions
        .iter()
        .filter_map(|a| match a {
            Action::Move { target } => Some(*target),
            Action::PlaceWall { .. } => None,
        })
        .collect();

    // From (0,4): down, left, right. Up is off-board.
    assert_eq!(move_targets.len(), 3);
    assert!(move_targets.contains(&Position::new(1, 4)));
    assert!(move_targets.contains(&Position::new(0, 3)));
    assert!(move_targets.contains(&Position::new(0, 5)));

    // Every wall slot is open on an empty board.
    let wall_count = actions
        .iter()
        .filter(|a| matches!(a, Action::PlaceWall { .. }))
        .count();
    assert_eq!(wall_count, 8 * 8 * 2);
}

#[test]
fn test_initial_distances_are_symmetric() {
    let board = Board::default();
    assert_eq!(board.shortest_distance(Player::First), Some(8));
    assert_eq!(board.shortest_distance(Player::Second), Some(8));
}

// =============================================================================
// Jump and Diagonal Scenarios
// =============================================================================

/// Walk the pawns to First at (4,4) and Second at (5,4).
fn face_to_face() -> Board {
    let mut board = Board::default();
    let first_rows = [1, 2, 3, 4];
    let second_rows = [7, 6, 5];
    for i in 0..4 {
        board
            .try_move(Player::First, Position::new(first_rows[i], 4))
            .unwrap();
        if i < 3 {
            board
                .try_move(Player::Second, Position::new(second_rows[i], 4))
                .unwrap();
        }
    }
    board
}

#[test]
fn test_straight_jump_over_adjacent_opponent() {
    let board = face_to_face();
    assert_eq!(board.pawn(Player::First), Position::new(4, 4));
    assert_eq!(board.pawn(Player::Second), Position::new(5, 4));

    let targets = board.move_targets(Player::First);
    assert!(targets.contains(&Position::new(6, 4)), "jump target");
    assert!(!targets.contains(&Position::new(5, 4)), "occupied cell");
    // No diagonals while the straight jump is open.
    assert!(!targets.contains(&Position::new(5, 3)));
    assert!(!targets.contains(&Position::new(5, 5)));
}

#[test]
fn test_blocked_jump_becomes_diagonals() {
    let mut board = face_to_face();
    // Second walls the edge (5,4)-(6,4) behind itself.
    board
        .try_place_wall(Player::Second, Wall::new(5, 4, Orientation::Horizontal))
        .unwrap();

    let targets = board.move_targets(Player::First);
    assert!(!targets.contains(&Position::new(6, 4)), "jump is gone");
    assert!(targets.contains(&Position::new(5, 3)), "left diagonal");
    assert!(targets.contains(&Position::new(5, 5)), "right diagonal");
}

#[test]
fn test_diagonal_blocked_by_side_wall() {
    let mut board = face_to_face();
    board
        .try_place_wall(Player::Second, Wall::new(5, 4, Orientation::Horizontal))
        .unwrap();
    // Wall off the edge (5,3)-(5,4): only the right diagonal survives.
    board
        .try_place_wall(Player::First, Wall::new(4, 3, Orientation::Vertical))
        .unwrap();

    let targets = board.move_targets(Player::First);
    assert!(!targets.contains(&Position::new(5, 3)));
    assert!(targets.contains(&Position::new(5, 5)));
}

// =============================================================================
// Wall Legality
// =============================================================================

#[test]
fn test_corridor_sealing_wall_is_rejected() {
    // Build a wall line across the board leaving one corridor at column 8,
    // then try to seal the corridor. The sealing wall passes bounds,
    // duplicate, and crossing checks but would strand both pawns.
    let mut board = Board::default();
    let players = [Player::First, Player::Second];
    for (i, y) in [0u8, 2, 4, 6].iter().enumerate() {
        board
            .try_place_wall(players[i % 2], Wall::new(4, *y, Orientation::Horizontal))
            .unwrap();
    }
    // Crossings row 4->5 remain only at column 8.
    assert_eq!(board.shortest_distance(Player::First), Some(12));

    let sealing = Wall::new(4, 7, Orientation::Horizontal);
    assert!(sealing.in_bounds(board.size()));
    assert!(!board.walls().contains(&sealing));
    assert!(!board.walls().iter().any(|&w| sealing.crosses(w)));

    let result = board.try_place_wall(Player::First, sealing);
    assert_eq!(result, Err(RuleViolation::IllegalWallPlacement));
    assert!(board.has_path(Player::First));
    assert!(board.has_path(Player::Second));
}

#[test]
fn test_accepted_walls_never_sever_paths() {
    // Greedily place every wall the engine will accept, alternating
    // players; connectivity must hold after each commit.
    let mut board = Board::default();
    let mut player = Player::First;
    for x in 0..8 {
        for y in 0..8 {
            for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                let wall = Wall::new(x, y, orientation);
                if board.walls_remaining(player) > 0 && board.can_place_wall(wall) {
                    board.try_place_wall(player, wall).unwrap();
                    assert!(board.has_path(Player::First));
                    assert!(board.has_path(Player::Second));
                    player = player.opponent();
                }
            }
        }
    }
    assert!(!board.walls().is_empty());
}

#[test]
fn test_wall_budget_exhaustion() {
    let mut board = Board::new(9, 2);
    board
        .try_place_wall(Player::First, Wall::new(0, 0, Orientation::Horizontal))
        .unwrap();
    board
        .try_place_wall(Player::First, Wall::new(0, 2, Orientation::Horizontal))
        .unwrap();
    assert_eq!(board.walls_remaining(Player::First), 0);
    assert_eq!(
        board.try_place_wall(Player::First, Wall::new(0, 4, Orientation::Horizontal)),
        Err(RuleViolation::NoWallsRemaining)
    );
    // Second's budget is untouched.
    assert_eq!(board.walls_remaining(Player::Second), 2);
    board
        .try_place_wall(Player::Second, Wall::new(0, 4, Orientation::Horizontal))
        .unwrap();
}

// =============================================================================
// Game Progress
// =============================================================================

#[test]
fn test_legal_actions_non_empty_until_terminal() {
    // March First straight to its goal row; at every step before the win
    // both players still have actions.
    let mut board = Board::new(5, 0);
    for row in 1..=4 {
        assert!(!board.is_terminal());
        assert!(!board.legal_actions(Player::First).is_empty());
        assert!(!board.legal_actions(Player::Second).is_empty());
        // Second shuffles sideways, staying off column 2.
        let second_col = if row % 2 == 1 { 1 } else { 2 };
        board
            .try_move(Player::First, Position::new(row, 2))
            .unwrap();
        if row < 4 {
            board
                .try_move(Player::Second, Position::new(4, second_col))
                .unwrap();
        }
    }
    assert!(board.is_terminal());
    assert_eq!(board.winner(), Some(Player::First));
}

#[test]
fn test_full_game_between_default_positions() {
    // Shortest-path racers meet head-on mid-board; the face-to-face jump
    // hands the second mover a tempo and with it the race.
    let mut board = Board::new(9, 0);
    loop {
        if let Some(winner) = board.winner() {
            assert_eq!(winner, Player::Second);
            break;
        }
        let player = board.to_move();
        // Always step along the own shortest path: pick the move target
        // that minimizes remaining distance.
        let target = board
            .move_targets(player)
            .into_iter()
            .min_by_key(|&t| {
                let mut probe = board.clone();
                probe.try_move(player, t).unwrap();
                probe.shortest_distance(player).unwrap_or(u32::MAX)
            })
            .unwrap();
        board.try_move(player, target).unwrap();
    }
}
