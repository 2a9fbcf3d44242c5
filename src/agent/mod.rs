pub mod player;
pub use player::*;

pub mod action_slot;
pub use action_slot::ActionSlot;

pub mod greedy_player;
pub use greedy_player::GreedyPlayer;

pub mod random_player;
pub use random_player::RandomPlayer;

pub mod ai;
pub use ai::{AIType, AlphaBetaPlayer, DepthResult, HeuristicConfig, IterativeDeepening, MinimaxPlayer};
