// Fixed-depth minimax baseline opponent
//
// Places its piece at random, then searches every later move with an
// unpruned minimax at a fixed depth, scoring the frontier by the difference in
// liberties. Publishes exactly once per turn.

use rand::seq::SliceRandom;

use super::alpha_beta::minimax_decision;
use super::evaluation::LibertyDifference;
use crate::agent::player::Player;
use crate::agent::ActionSlot;
use crate::game_repr::{Action, GameState, Isolation, PlayerId};

/// Search depth used once both pieces are on the board
pub const MINIMAX_DEPTH: u32 = 3;

pub struct MinimaxPlayer {
    player_id: PlayerId,
    depth: u32,
}

impl MinimaxPlayer {
    pub fn new(player_id: PlayerId) -> Self {
        Self::with_depth(player_id, MINIMAX_DEPTH)
    }

    pub fn with_depth(player_id: PlayerId, depth: u32) -> Self {
        Self { player_id, depth }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Player for MinimaxPlayer {
    fn get_action(&self, state: &Isolation, slot: &ActionSlot<Action>) {
        let action = if state.ply_count() < 2 {
            state.actions().choose(&mut rand::thread_rng()).copied()
        } else {
            minimax_decision(state, self.depth, self.player_id, &LibertyDifference).map(|(action, _)| action)
        };

        if let Some(action) = action {
            slot.publish(action);
        }
    }

    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::cell;

    #[test]
    fn test_places_randomly_in_opening() {
        let player = MinimaxPlayer::new(PlayerId::First);
        let state = Isolation::new();
        let slot = ActionSlot::new();

        player.get_action(&state, &slot);
        assert!(matches!(slot.latest(), Some(Action::Place(_))));
    }

    #[test]
    fn test_takes_only_escape() {
        // First player cornered with a single open jump
        let state = Isolation::from_cells(
            &[cell(2, 1)],
            [Some(cell(0, 0)), Some(cell(8, 8))],
            2,
        );
        let player = MinimaxPlayer::new(PlayerId::First);
        let slot = ActionSlot::new();

        player.get_action(&state, &slot);
        assert_eq!(slot.latest(), state.actions().first().copied());
    }

    #[test]
    fn test_publishes_nothing_when_terminal() {
        let state = Isolation::from_cells(
            &[cell(2, 1), cell(1, 2)],
            [Some(cell(0, 0)), Some(cell(8, 8))],
            2,
        );
        let player = MinimaxPlayer::new(PlayerId::First);
        let slot = ActionSlot::new();

        player.get_action(&state, &slot);
        assert_eq!(slot.latest(), None);
    }
}
