mod moves;
mod position;
mod state;
pub mod bitboards;

#[cfg(test)]
mod tests;

pub use moves::*;
pub use position::*;
pub use state::*;
pub use bitboards::{cell, coordinates, Cell, HEIGHT, WIDTH};

/*-------BOARD LAYOUT--------*/

// 11 x 9 playable cells, two padding columns per row:
//
// | col 0 .. col 10 | pad | pad |   row 0
// | col 0 .. col 10 | pad | pad |   row 1
//   ...
// | col 0 .. col 10 |                row 8
//
// cell = row * 13 + col, 115 bits in a u128
