//! Baseline opponent that plays a uniformly random legal action.

use rand::seq::SliceRandom;

use crate::agent::player::Player;
use crate::agent::ActionSlot;
use crate::game_repr::{Action, GameState, Isolation, PlayerId};

pub struct RandomPlayer {
    player_id: PlayerId,
}

impl RandomPlayer {
    pub fn new(player_id: PlayerId) -> Self {
        Self { player_id }
    }
}

impl Player for RandomPlayer {
    fn get_action(&self, state: &Isolation, slot: &ActionSlot<Action>) {
        if let Some(&action) = state.actions().choose(&mut rand::thread_rng()) {
            slot.publish(action);
        }
    }

    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn name(&self) -> &str {
        "Random"
    }
}
