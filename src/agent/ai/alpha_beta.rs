// Depth-limited Minimax Search with Alpha-Beta Pruning
//
// Values are always taken from the perspective of one fixed player (the agent),
// so max nodes are the agent's turns and min nodes the opponent's. Terminal
// positions score their exact utility regardless of the remaining depth;
// positions reached with no depth left are scored by the evaluator.
//
// Pruning only skips subtrees that cannot change the result: every root action
// gets the same value an unpruned minimax would compute at that depth.

use super::evaluation::Evaluator;
use crate::game_repr::{GameState, PlayerId};

/// Alpha-beta searcher for one player's decision
pub struct AlphaBeta<'e, E> {
    evaluator: &'e E,
    player: PlayerId,
    nodes: u64,
}

impl<'e, E> AlphaBeta<'e, E> {
    pub fn new(evaluator: &'e E, player: PlayerId) -> Self {
        Self {
            evaluator,
            player,
            nodes: 0,
        }
    }

    /// Positions visited since construction
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Best action at the root and its value.
    ///
    /// Every root action is searched as an opponent (min) node at `depth - 1`
    /// with a full window, so each root value is exact and a child that would
    /// only fail low can never pose as a tie. An action replaces the incumbent
    /// when its value is greater than or equal to the best so far, so among
    /// equal values the last one enumerated wins. Returns `None` only when the
    /// root has no legal action.
    pub fn search<S>(&mut self, state: &S, depth: u32) -> Option<(S::Action, f64)>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.nodes += 1;

        let mut best: Option<(S::Action, f64)> = None;

        for action in state.actions() {
            let value = self.value(
                &state.result(action),
                depth.saturating_sub(1),
                f64::NEG_INFINITY,
                f64::INFINITY,
                false,
            );

            if best.map_or(true, |(_, best_value)| value >= best_value) {
                best = Some((action, value));
            }
        }

        best
    }

    /// Minimax value of `state` with `depth` plies remaining inside the
    /// (`alpha`, `beta`) window
    pub fn value<S>(&mut self, state: &S, depth: u32, mut alpha: f64, mut beta: f64, maximizing: bool) -> f64
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.nodes += 1;

        if state.is_terminal() {
            return state.utility(self.player);
        }

        if depth == 0 {
            return self.evaluator.evaluate(state, self.player);
        }

        if maximizing {
            let mut best = f64::NEG_INFINITY;
            for action in state.actions() {
                best = best.max(self.value(&state.result(action), depth - 1, alpha, beta, false));
                if best >= beta {
                    return best;
                }
                alpha = alpha.max(best);
            }
            best
        } else {
            let mut best = f64::INFINITY;
            for action in state.actions() {
                best = best.min(self.value(&state.result(action), depth - 1, alpha, beta, true));
                if best <= alpha {
                    return best;
                }
                beta = beta.min(best);
            }
            best
        }
    }
}

/// Unpruned minimax value of `state` for `player`
pub fn minimax_value<S, E>(state: &S, depth: u32, player: PlayerId, evaluator: &E, maximizing: bool) -> f64
where
    S: GameState,
    E: Evaluator<S>,
{
    if state.is_terminal() {
        return state.utility(player);
    }

    if depth == 0 {
        return evaluator.evaluate(state, player);
    }

    let children = state
        .actions()
        .into_iter()
        .map(|action| minimax_value(&state.result(action), depth - 1, player, evaluator, !maximizing));

    if maximizing {
        children.fold(f64::NEG_INFINITY, f64::max)
    } else {
        children.fold(f64::INFINITY, f64::min)
    }
}

/// Unpruned minimax decision; the first action with the highest value wins
pub fn minimax_decision<S, E>(state: &S, depth: u32, player: PlayerId, evaluator: &E) -> Option<(S::Action, f64)>
where
    S: GameState,
    E: Evaluator<S>,
{
    let mut best: Option<(S::Action, f64)> = None;

    for action in state.actions() {
        let value = minimax_value(&state.result(action), depth.saturating_sub(1), player, evaluator, false);
        if best.map_or(true, |(_, best_value)| value > best_value) {
            best = Some((action, value));
        }
    }

    best
}
