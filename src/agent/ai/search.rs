// Iterative Deepening Search
//
// Runs the alpha-beta root search at depth 1, 2, 3, ... with no upper bound.
// Each call to `next()` completes exactly one depth and returns its best root
// action, so the caller always holds the result of the deepest fully searched
// depth. A depth that is interrupted never produces a result.
//
// There is no time check in here. The caller decides when to stop asking.

use super::alpha_beta::AlphaBeta;
use super::evaluation::Evaluator;
use crate::game_repr::{GameState, PlayerId};

/// Best root choice of one completed depth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthResult<A> {
    pub depth: u32,
    pub action: A,
    pub value: f64,
    pub nodes: u64,
}

/// Endless iterator of [`DepthResult`]s for a fixed root and player.
///
/// Yields nothing if the root has no legal action.
pub struct IterativeDeepening<S, E> {
    root: S,
    player: PlayerId,
    evaluator: E,
    depth: u32,
}

impl<S, E> IterativeDeepening<S, E>
where
    S: GameState,
    E: Evaluator<S>,
{
    pub fn new(root: S, player: PlayerId, evaluator: E) -> Self {
        Self {
            root,
            player,
            evaluator,
            depth: 0,
        }
    }

    /// Depth of the last completed iteration (0 before the first)
    pub fn completed_depth(&self) -> u32 {
        self.depth
    }
}

impl<S, E> Iterator for IterativeDeepening<S, E>
where
    S: GameState,
    E: Evaluator<S>,
{
    type Item = DepthResult<S::Action>;

    fn next(&mut self) -> Option<Self::Item> {
        let depth = self.depth + 1;
        let mut searcher = AlphaBeta::new(&self.evaluator, self.player);
        let (action, value) = searcher.search(&self.root, depth)?;
        let nodes = searcher.nodes();

        self.depth = depth;
        Some(DepthResult {
            depth,
            action,
            value,
            nodes,
        })
    }
}
