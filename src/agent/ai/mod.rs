// AI Agent - Iterative Deepening Alpha-Beta
//
// This module implements the knight's Isolation agent and the search it runs:
// - Depth-limited minimax with alpha-beta pruning
// - Iterative deepening that yields a result after every completed depth
// - A border-aware mobility heuristic at the search frontier
//
// No transposition table, no move ordering, no parallel search: each depth is
// a plain single-threaded alpha-beta pass over the actions in engine order.

mod alpha_beta;
mod alpha_beta_player;
mod ai_type;
mod evaluation;
mod minimax_player;
mod search;

#[cfg(test)]
mod tests;

pub use alpha_beta::{minimax_decision, minimax_value, AlphaBeta};
pub use alpha_beta_player::AlphaBetaPlayer;
pub use ai_type::AIType;
pub use evaluation::{BorderMobility, Evaluator, HeuristicConfig, LibertyDifference, OwnLiberties};
pub use minimax_player::{MinimaxPlayer, MINIMAX_DEPTH};
pub use search::{DepthResult, IterativeDeepening};
