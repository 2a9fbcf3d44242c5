//! The game contract consumed by the search.
//!
//! The search never looks inside a position. It only enumerates actions,
//! derives successors, asks whether a position is over and, if so, who won.
//! Everything else about the game lives behind this trait.

use std::fmt;

/// One of the two sides of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    First,
    Second,
}

impl PlayerId {
    pub fn opponent(&self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    /// 0 for the first player, 1 for the second
    pub fn index(&self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }

    /// Side to move after `ply_count` plies
    pub fn from_ply(ply_count: u32) -> Self {
        if ply_count % 2 == 0 {
            Self::First
        } else {
            Self::Second
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.index() + 1)
    }
}

/// Immutable, value-like game position.
///
/// Implementations must uphold: a position is either terminal or has at least
/// one legal action, and `utility` is only meaningful at terminal positions.
pub trait GameState: Clone {
    type Action: Copy + PartialEq + fmt::Debug;

    /// Legal actions for the side to move, in a stable order
    fn actions(&self) -> Vec<Self::Action>;

    /// Successor position after `action`; `action` must be legal here
    fn result(&self, action: Self::Action) -> Self;

    fn is_terminal(&self) -> bool;

    /// Game-theoretic value from `player`'s perspective; 0 for non-terminal positions
    fn utility(&self, player: PlayerId) -> f64;

    /// Side to move
    fn player(&self) -> PlayerId;
}
