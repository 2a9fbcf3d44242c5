use std::fmt;

use smallvec::SmallVec;

use super::bitboards::{cell_bit, cells, Cell, BLANK_BOARD, HEIGHT, KNIGHT_DESTINATIONS, ROW_STRIDE, SIZE, WIDTH};
use super::moves::{Action, Direction};
use super::state::{GameState, PlayerId};
use crate::error::{Error, Result};

/// Cells reachable from a location; spills to the heap only for placement
pub type Liberties = SmallVec<[Cell; 8]>;

/// A knight's Isolation position.
///
/// `board` holds one bit per open cell. Every cell a piece enters is closed for
/// the rest of the game, including the cell a piece currently stands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Isolation {
    board: u128,
    ply_count: u32,
    locs: [Option<Cell>; 2],
}

impl Default for Isolation {
    fn default() -> Self {
        Self::new()
    }
}

impl Isolation {
    /// Empty board, first player to place
    pub fn new() -> Self {
        Self {
            board: BLANK_BOARD,
            ply_count: 0,
            locs: [None, None],
        }
    }

    /// Build an arbitrary position: `closed` cells are blocked, located pieces
    /// close their own cells as well. Closed cells off the board are ignored.
    ///
    /// # Panics
    ///
    /// If a location is not a playable cell.
    pub fn from_cells(closed: &[Cell], locs: [Option<Cell>; 2], ply_count: u32) -> Self {
        for &loc in locs.iter().flatten() {
            assert!(
                loc < SIZE && BLANK_BOARD & cell_bit(loc) != 0,
                "location {loc} is not a playable cell"
            );
        }

        let mut board = BLANK_BOARD;
        for &c in closed.iter().chain(locs.iter().flatten()) {
            if c < SIZE {
                board &= !cell_bit(c);
            }
        }

        Self { board, ply_count, locs }
    }

    pub fn board(&self) -> u128 {
        self.board
    }

    pub fn ply_count(&self) -> u32 {
        self.ply_count
    }

    pub fn locations(&self) -> [Option<Cell>; 2] {
        self.locs
    }

    pub fn location(&self, player: PlayerId) -> Option<Cell> {
        self.locs[player.index()]
    }

    #[inline]
    pub fn is_open(&self, cell: Cell) -> bool {
        cell < SIZE && self.board & cell_bit(cell) != 0
    }

    /// Every open cell on the board
    pub fn blank_cells(&self) -> Liberties {
        cells(self.board).collect()
    }

    /// Open cells reachable from `loc` by one knight jump. A piece that has not
    /// been placed yet may go to any open cell.
    pub fn liberties(&self, loc: Option<Cell>) -> Liberties {
        match loc {
            None => self.blank_cells(),
            Some(loc) => cells(KNIGHT_DESTINATIONS[loc] & self.board).collect(),
        }
    }

    pub fn has_liberties(&self, player: PlayerId) -> bool {
        match self.location(player) {
            None => self.board != 0,
            Some(loc) => KNIGHT_DESTINATIONS[loc] & self.board != 0,
        }
    }

    /// Cell the side to move would enter with `action`, if that is legal
    fn destination(&self, action: Action) -> Option<Cell> {
        let target = match (self.location(self.player()), action) {
            (None, Action::Place(cell)) => cell,
            (Some(loc), Action::Jump(direction)) => {
                let target = loc as isize + direction.offset();
                if target < 0 {
                    return None;
                }
                target as Cell
            }
            _ => return None,
        };

        self.is_open(target).then_some(target)
    }

    /// Successor position, or `Error::IllegalAction` if `action` is not legal here
    pub fn try_result(&self, action: Action) -> Result<Self> {
        let target = self.destination(action).ok_or(Error::IllegalAction {
            action,
            ply: self.ply_count,
        })?;

        let mut locs = self.locs;
        locs[self.player().index()] = Some(target);

        Ok(Self {
            board: self.board & !cell_bit(target),
            ply_count: self.ply_count + 1,
            locs,
        })
    }
}

impl GameState for Isolation {
    type Action = Action;

    fn actions(&self) -> Vec<Action> {
        match self.location(self.player()) {
            None => cells(self.board).map(Action::Place).collect(),
            Some(loc) => Direction::ALL
                .iter()
                .copied()
                .filter(|direction| {
                    let target = loc as isize + direction.offset();
                    target >= 0 && self.is_open(target as Cell)
                })
                .map(Action::Jump)
                .collect(),
        }
    }

    fn result(&self, action: Action) -> Self {
        match self.try_result(action) {
            Ok(next) => next,
            Err(err) => panic!("{err}"),
        }
    }

    fn is_terminal(&self) -> bool {
        !self.has_liberties(self.player())
    }

    fn utility(&self, player: PlayerId) -> f64 {
        if !self.is_terminal() {
            0.0
        } else if player == self.player() {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    }

    fn player(&self) -> PlayerId {
        PlayerId::from_ply(self.ply_count)
    }
}

impl fmt::Display for Isolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                let cell = row * ROW_STRIDE + col;
                let symbol = if self.locs[0] == Some(cell) {
                    '1'
                } else if self.locs[1] == Some(cell) {
                    '2'
                } else if self.is_open(cell) {
                    '.'
                } else {
                    '#'
                };

                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
