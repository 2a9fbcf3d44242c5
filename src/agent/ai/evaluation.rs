// Static position evaluation
//
// Evaluators score non-terminal positions from one player's perspective and
// are only consulted at the search frontier. Terminal positions are scored by
// the game's own utility.

use crate::game_repr::{Cell, GameState, Isolation, PlayerId, HEIGHT, WIDTH};

/// Scores a position for `player`; larger is better for `player`
pub trait Evaluator<S: GameState> {
    fn evaluate(&self, state: &S, player: PlayerId) -> f64;
}

/// Domain constants for the border-aware mobility heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicConfig {
    /// Playable columns; rows are padded with two extra columns
    pub width: usize,
    /// Playable rows
    pub height: usize,
    /// Weight of the agent's interior liberties
    pub own_weight: i32,
    /// Penalty per opponent interior liberty
    pub opponent_weight: i32,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            own_weight: 2,
            opponent_weight: 3,
        }
    }
}

impl HeuristicConfig {
    /// True for cells in the first row or column, or within one cell of the
    /// right or bottom edge
    pub fn is_on_border(&self, cell: Cell) -> bool {
        let stride = self.width + 2;
        let (col, row) = (cell % stride, cell / stride);

        col == 0 || row == 0 || col + 1 >= self.width || row + 1 >= self.height
    }

    /// Number of liberties that are not on the border
    pub fn interior_count(&self, liberties: &[Cell]) -> usize {
        liberties.iter().filter(|&&cell| !self.is_on_border(cell)).count()
    }

    pub fn score(&self, own_liberties: &[Cell], opponent_liberties: &[Cell]) -> f64 {
        let own = self.interior_count(own_liberties) as i32;
        let opponent = self.interior_count(opponent_liberties) as i32;

        (self.own_weight * own - self.opponent_weight * opponent) as f64
    }
}

/// Interior mobility for the agent minus weighted interior mobility for the
/// opponent. Border cells count for neither side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BorderMobility {
    pub config: HeuristicConfig,
}

impl BorderMobility {
    pub fn new(config: HeuristicConfig) -> Self {
        Self { config }
    }
}

impl Evaluator<Isolation> for BorderMobility {
    fn evaluate(&self, state: &Isolation, player: PlayerId) -> f64 {
        let own = state.liberties(state.location(player));
        let opponent = state.liberties(state.location(player.opponent()));

        self.config.score(&own, &opponent)
    }
}

/// Own liberties minus opponent liberties
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LibertyDifference;

impl Evaluator<Isolation> for LibertyDifference {
    fn evaluate(&self, state: &Isolation, player: PlayerId) -> f64 {
        let own = state.liberties(state.location(player)).len() as f64;
        let opponent = state.liberties(state.location(player.opponent())).len() as f64;

        own - opponent
    }
}

/// Own liberties only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OwnLiberties;

impl Evaluator<Isolation> for OwnLiberties {
    fn evaluate(&self, state: &Isolation, player: PlayerId) -> f64 {
        state.liberties(state.location(player)).len() as f64
    }
}
