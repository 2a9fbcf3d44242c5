use crate::game_repr::{cell, Action, Direction, GameState, Isolation, PlayerId};
use super::placed;

// ==================== TERMINAL DETECTION ====================

/// First player boxed into the corner with both of its jumps closed, first to move
fn first_player_trapped() -> Isolation {
    Isolation::from_cells(
        &[cell(2, 1), cell(1, 2)],
        [Some(cell(0, 0)), Some(cell(5, 4))],
        2,
    )
}

#[test]
fn test_trapped_side_to_move_is_terminal() {
    let state = first_player_trapped();

    assert_eq!(state.player(), PlayerId::First);
    assert!(state.is_terminal());
    assert!(state.actions().is_empty());
}

#[test]
fn test_side_to_move_loses() {
    let state = first_player_trapped();

    assert_eq!(state.utility(PlayerId::First), f64::NEG_INFINITY);
    assert_eq!(state.utility(PlayerId::Second), f64::INFINITY);
}

#[test]
fn test_trapped_opponent_is_not_terminal_yet() {
    // Same board, but it is the free player's turn
    let state = Isolation::from_cells(
        &[cell(2, 1), cell(1, 2)],
        [Some(cell(0, 0)), Some(cell(5, 4))],
        3,
    );

    assert_eq!(state.player(), PlayerId::Second);
    assert!(!state.is_terminal());
    assert_eq!(state.utility(PlayerId::First), 0.0);
    assert_eq!(state.utility(PlayerId::Second), 0.0);
}

#[test]
fn test_non_terminal_utility_is_zero() {
    let state = placed(cell(5, 4), cell(3, 3));
    assert!(!state.is_terminal());
    assert_eq!(state.utility(PlayerId::First), 0.0);
}

#[test]
fn test_game_ends_after_last_escape() {
    // First player at (0,0) with a single exit at (1,2); (1,2) itself leads nowhere new
    let state = Isolation::from_cells(
        &[cell(2, 1), cell(2, 0), cell(3, 1), cell(3, 3), cell(2, 4), cell(0, 4)],
        [Some(cell(0, 0)), Some(cell(8, 8))],
        2,
    );
    assert_eq!(state.actions(), vec![Action::Jump(Direction::NNW)]);

    let after = state.result(Action::Jump(Direction::NNW));
    assert!(!after.is_terminal(), "second player still has moves");

    // Second player wanders; first player, now at (1,2), has no open jump left
    let reply = after.actions()[0];
    let next = after.result(reply);
    assert_eq!(next.player(), PlayerId::First);
    assert!(next.is_terminal());
    assert_eq!(next.utility(PlayerId::Second), f64::INFINITY);
}
