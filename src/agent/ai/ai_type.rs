//! AI Type Registry - enumerates the players a match can be run with
//!
//! The alpha-beta agent is the player under test; Random, Greedy and Minimax
//! are the baselines it is measured against.

use std::sync::Arc;

use super::{AlphaBetaPlayer, MinimaxPlayer};
use crate::agent::player::Player;
use crate::agent::{GreedyPlayer, RandomPlayer};
use crate::game_repr::PlayerId;

/// Enumeration of available players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AIType {
    Random,
    Greedy,
    Minimax,
    /// Iterative deepening alpha-beta agent
    #[default]
    AlphaBeta,
}

impl AIType {
    /// Get all available AI types
    pub fn all() -> &'static [AIType] {
        &[AIType::Random, AIType::Greedy, AIType::Minimax, AIType::AlphaBeta]
    }

    /// Get the display name for this AI type
    pub fn display_name(&self) -> &'static str {
        match self {
            AIType::Random => "Random",
            AIType::Greedy => "Greedy",
            AIType::Minimax => "Minimax",
            AIType::AlphaBeta => "AlphaBeta",
        }
    }

    /// Get a short description of this AI type
    pub fn description(&self) -> &'static str {
        match self {
            AIType::Random => "Uniformly random legal moves",
            AIType::Greedy => "Maximizes its own liberties one move ahead",
            AIType::Minimax => "Depth 3 minimax on the liberty difference",
            AIType::AlphaBeta => "Iterative deepening alpha-beta with border-aware mobility",
        }
    }

    /// Parse a command-line name; "self" selects the alpha-beta agent
    pub fn from_name(name: &str) -> Option<AIType> {
        match name.to_ascii_lowercase().as_str() {
            "random" => Some(AIType::Random),
            "greedy" => Some(AIType::Greedy),
            "minimax" => Some(AIType::Minimax),
            "self" | "alphabeta" => Some(AIType::AlphaBeta),
            _ => None,
        }
    }

    /// Create a player of this type for one side of a game
    pub fn create_player(&self, player_id: PlayerId) -> Arc<dyn Player> {
        match self {
            AIType::Random => Arc::new(RandomPlayer::new(player_id)),
            AIType::Greedy => Arc::new(GreedyPlayer::new(player_id)),
            AIType::Minimax => Arc::new(MinimaxPlayer::new(player_id)),
            AIType::AlphaBeta => Arc::new(AlphaBetaPlayer::new(player_id)),
        }
    }
}
