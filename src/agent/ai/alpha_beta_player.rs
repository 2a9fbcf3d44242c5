//! AlphaBetaPlayer - the knight's Isolation agent
//!
//! Runs an iterative deepening alpha-beta search with the border-aware
//! mobility heuristic and publishes the best root action after every completed
//! depth. The player never stops on its own: it keeps deepening until the
//! caller closes the slot, then returns after the depth in progress.
//!
//! # Examples
//!
//! ```
//! use isolation_agent::agent::{ActionSlot, AlphaBetaPlayer, Player};
//! use isolation_agent::game_repr::{Isolation, PlayerId};
//!
//! let player = AlphaBetaPlayer::new(PlayerId::First).with_depth_limit(2);
//! let slot = ActionSlot::new();
//! player.get_action(&Isolation::new(), &slot);
//! assert!(slot.latest().is_some());
//! ```

use log::debug;

use super::evaluation::{BorderMobility, HeuristicConfig};
use super::search::IterativeDeepening;
use crate::agent::player::Player;
use crate::agent::ActionSlot;
use crate::game_repr::{Action, GameState, Isolation, PlayerId};

pub struct AlphaBetaPlayer {
    player_id: PlayerId,

    /// Heuristic constants used at the search frontier
    config: HeuristicConfig,

    /// Stop after this depth even if the slot is still open
    ///
    /// `None` searches until the caller closes the slot.
    depth_limit: Option<u32>,

    name: String,
}

impl AlphaBetaPlayer {
    pub fn new(player_id: PlayerId) -> Self {
        Self::with_config(player_id, HeuristicConfig::default())
    }

    pub fn with_config(player_id: PlayerId, config: HeuristicConfig) -> Self {
        Self {
            player_id,
            config,
            depth_limit: None,
            name: "AlphaBeta".to_string(),
        }
    }

    /// Cap the search depth (useful when no caller enforces a time limit)
    pub fn with_depth_limit(mut self, depth_limit: u32) -> Self {
        self.depth_limit = Some(depth_limit);
        self
    }

    pub fn config(&self) -> HeuristicConfig {
        self.config
    }
}

impl Player for AlphaBetaPlayer {
    fn get_action(&self, state: &Isolation, slot: &ActionSlot<Action>) {
        let search = IterativeDeepening::new(*state, self.player_id, BorderMobility::new(self.config));

        for result in search {
            debug!(
                "[{}] ply {} depth {} value {} nodes {} best {}",
                self.name,
                state.ply_count(),
                result.depth,
                result.value,
                result.nodes,
                result.action
            );

            if !slot.publish(result.action) {
                break;
            }

            if self.depth_limit.is_some_and(|limit| result.depth >= limit) {
                break;
            }
        }

        if slot.latest().is_none() && !state.is_terminal() {
            debug!("[{}] no depth completed at ply {}", self.name, state.ply_count());
        }
    }

    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
