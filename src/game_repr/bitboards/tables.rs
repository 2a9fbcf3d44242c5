// Board geometry and precomputed knight destination tables.
//
// Cells are laid out row by row with two padding columns after every row, so a
// knight jump that leaves the board sideways lands on a padding bit that is
// never open. Jumps past the first or last row fall outside 0..SIZE.

/// Number of playable columns
pub const WIDTH: usize = 11;

/// Number of playable rows
pub const HEIGHT: usize = 9;

/// Distance in bits between vertically adjacent cells
pub const ROW_STRIDE: usize = WIDTH + 2;

/// Number of addressable bits (the last row carries no trailing padding)
pub const SIZE: usize = ROW_STRIDE * HEIGHT - 2;

/// Knight offsets in direction order: NNE, ENE, ESE, SSE, SSW, WSW, WNW, NNW
///
/// Built from N = +ROW_STRIDE, S = -ROW_STRIDE, E = -1, W = +1.
pub const KNIGHT_OFFSETS: [isize; 8] = [
    2 * ROW_STRIDE as isize - 1,  // NNE
    ROW_STRIDE as isize - 2,      // ENE
    -(ROW_STRIDE as isize) - 2,   // ESE
    -2 * ROW_STRIDE as isize - 1, // SSE
    -2 * ROW_STRIDE as isize + 1, // SSW
    -(ROW_STRIDE as isize) + 2,   // WSW
    ROW_STRIDE as isize + 2,      // WNW
    2 * ROW_STRIDE as isize + 1,  // NNW
];

/// Bitboard with every playable cell open
pub const BLANK_BOARD: u128 = generate_blank_board();

/// KNIGHT_DESTINATIONS[cell] returns a bitboard of every playable cell a knight
/// can jump to from that cell, ignoring occupancy. Padding cells map to 0.
pub static KNIGHT_DESTINATIONS: [u128; SIZE] = generate_knight_destinations();

/// Generate the blank board at compile time
const fn generate_blank_board() -> u128 {
    let mut board = 0u128;
    let mut idx = 0;

    while idx < SIZE {
        if idx % ROW_STRIDE < WIDTH {
            board |= 1u128 << idx;
        }
        idx += 1;
    }

    board
}

/// Generate the knight destination table at compile time
const fn generate_knight_destinations() -> [u128; SIZE] {
    let mut table = [0u128; SIZE];
    let blank = generate_blank_board();
    let mut cell = 0;

    while cell < SIZE {
        if blank & (1u128 << cell) != 0 {
            let mut mask = 0u128;
            let mut i = 0;

            while i < 8 {
                let target = cell as isize + KNIGHT_OFFSETS[i];
                if target >= 0 && target < SIZE as isize && blank & (1u128 << target) != 0 {
                    mask |= 1u128 << target;
                }
                i += 1;
            }

            table[cell] = mask;
        }
        cell += 1;
    }

    table
}
