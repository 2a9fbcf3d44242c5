use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Position after both players have placed their pieces
pub fn placed(first: Cell, second: Cell) -> Isolation {
    Isolation::new()
        .result(Action::Place(first))
        .result(Action::Place(second))
}

/// Destination cells of the jump actions available to the side to move
pub fn jump_targets(state: &Isolation) -> Vec<Cell> {
    let loc = state
        .location(state.player())
        .expect("side to move must be placed");
    state
        .actions()
        .into_iter()
        .map(|action| match action {
            Action::Jump(direction) => (loc as isize + direction.offset()) as Cell,
            Action::Place(cell) => panic!("unexpected placement {cell}"),
        })
        .collect()
}

// ==================== TEST MODULES ====================

mod terminal;
