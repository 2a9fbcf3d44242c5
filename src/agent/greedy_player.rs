//! Baseline opponent that maximizes its own liberties one ply ahead.

use crate::agent::ai::{Evaluator, OwnLiberties};
use crate::agent::player::Player;
use crate::agent::ActionSlot;
use crate::game_repr::{Action, GameState, Isolation, PlayerId};

pub struct GreedyPlayer {
    player_id: PlayerId,
}

impl GreedyPlayer {
    pub fn new(player_id: PlayerId) -> Self {
        Self { player_id }
    }

    /// Action leaving this player the most liberties; the first one wins ties
    pub fn choose(&self, state: &Isolation) -> Option<Action> {
        let mut best: Option<(Action, f64)> = None;

        for action in state.actions() {
            let score = OwnLiberties.evaluate(&state.result(action), self.player_id);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((action, score));
            }
        }

        best.map(|(action, _)| action)
    }
}

impl Player for GreedyPlayer {
    fn get_action(&self, state: &Isolation, slot: &ActionSlot<Action>) {
        if let Some(action) = self.choose(state) {
            slot.publish(action);
        }
    }

    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}
