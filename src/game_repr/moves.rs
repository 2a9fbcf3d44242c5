use std::fmt;

use super::bitboards::{coordinates, Cell, KNIGHT_OFFSETS};

/// The eight knight jumps, named by compass heading (two steps, then one)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    NNE = 0,
    ENE = 1,
    ESE = 2,
    SSE = 3,
    SSW = 4,
    WSW = 5,
    WNW = 6,
    NNW = 7,
}

impl Direction {
    /// All directions in generation order
    pub const ALL: [Direction; 8] = [
        Direction::NNE,
        Direction::ENE,
        Direction::ESE,
        Direction::SSE,
        Direction::SSW,
        Direction::WSW,
        Direction::WNW,
        Direction::NNW,
    ];

    /// Offset in bits on the padded board
    #[inline]
    pub fn offset(self) -> isize {
        KNIGHT_OFFSETS[self as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::NNE => "NNE",
            Direction::ENE => "ENE",
            Direction::ESE => "ESE",
            Direction::SSE => "SSE",
            Direction::SSW => "SSW",
            Direction::WSW => "WSW",
            Direction::WNW => "WNW",
            Direction::NNW => "NNW",
        }
    }
}

/// A move in knight's Isolation.
///
/// A player's first move places its piece on any open cell; every later move
/// is a knight jump relative to the player's current location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Place(Cell),
    Jump(Direction),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Place(cell) => {
                let (col, row) = coordinates(*cell);
                write!(f, "place({col},{row})")
            }
            Action::Jump(direction) => f.write_str(direction.name()),
        }
    }
}
