//! Player trait for knight's Isolation agents.
//!
//! A player is any entity that can choose an action for the side it plays:
//! the alpha-beta agent, or one of the sample opponents used to measure it.
//!
//! # Anytime Design
//!
//! `get_action()` does not return a move. It publishes one or more moves into
//! an [`ActionSlot`] and the caller keeps whichever was published last when its
//! time budget runs out. Quick players publish once and return; searching
//! players keep refining until the caller closes the slot.
//!
//! Players are constructed for a fixed [`PlayerId`] and must be `Send + Sync`
//! because the orchestrator runs every turn on its own worker thread and may
//! stop waiting for that thread before it finishes.

use crate::agent::ActionSlot;
use crate::game_repr::{Action, Isolation, PlayerId};

pub trait Player: Send + Sync {
    /// Publish an action for the side to move in `state`.
    ///
    /// Called only when it is this player's turn. The caller may stop waiting at
    /// any time; implementations should return once `slot` is closed.
    fn get_action(&self, state: &Isolation, slot: &ActionSlot<Action>);

    /// The side this player was constructed for
    fn player_id(&self) -> PlayerId;

    /// Display name, used in logs and match summaries
    fn name(&self) -> &str {
        "Player"
    }
}
