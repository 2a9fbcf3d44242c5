pub mod tables;
pub use tables::*;

/// Index of a bit on the padded board (`row * ROW_STRIDE + col`)
pub type Cell = usize;

/// Cell index for a playable column/row pair
#[inline]
pub const fn cell(col: usize, row: usize) -> Cell {
    row * ROW_STRIDE + col
}

/// Column and row of a cell index
#[inline]
pub const fn coordinates(cell: Cell) -> (usize, usize) {
    (cell % ROW_STRIDE, cell / ROW_STRIDE)
}

/// Single-bit mask for a cell
#[inline]
pub const fn cell_bit(cell: Cell) -> u128 {
    1u128 << cell
}

/// Pop the least significant set bit and return its index
#[inline]
pub fn pop_lsb(bb: &mut u128) -> Cell {
    let idx = bb.trailing_zeros() as Cell;
    *bb &= *bb - 1;
    idx
}

/// Iterate the set bits of a bitboard in ascending order
pub fn cells(mut bb: u128) -> impl Iterator<Item = Cell> {
    std::iter::from_fn(move || if bb == 0 { None } else { Some(pop_lsb(&mut bb)) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_board_has_every_playable_cell() {
        assert_eq!(BLANK_BOARD.count_ones() as usize, WIDTH * HEIGHT);
        assert_eq!(BLANK_BOARD & cell_bit(WIDTH), 0, "padding must be closed");
        assert_eq!(BLANK_BOARD & cell_bit(WIDTH + 1), 0, "padding must be closed");
        assert_ne!(BLANK_BOARD & cell_bit(SIZE - 1), 0);
    }

    #[test]
    fn test_knight_destinations_center() {
        assert_eq!(KNIGHT_DESTINATIONS[cell(5, 4)].count_ones(), 8);
    }

    #[test]
    fn test_knight_destinations_corners() {
        let from_origin: Vec<Cell> = cells(KNIGHT_DESTINATIONS[cell(0, 0)]).collect();
        assert_eq!(from_origin, vec![cell(2, 1), cell(1, 2)]);

        let far_corner = cell(WIDTH - 1, HEIGHT - 1);
        let from_far: Vec<Cell> = cells(KNIGHT_DESTINATIONS[far_corner]).collect();
        assert_eq!(from_far, vec![cell(WIDTH - 2, HEIGHT - 3), cell(WIDTH - 3, HEIGHT - 2)]);
    }

    #[test]
    fn test_knight_destinations_never_wrap() {
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                for target in cells(KNIGHT_DESTINATIONS[cell(col, row)]) {
                    let (tc, tr) = coordinates(target);
                    assert!(tc < WIDTH && tr < HEIGHT);
                    let dc = (tc as isize - col as isize).abs();
                    let dr = (tr as isize - row as isize).abs();
                    assert!(
                        (dc == 1 && dr == 2) || (dc == 2 && dr == 1),
                        "({col},{row}) -> ({tc},{tr}) is not a knight jump"
                    );
                }
            }
        }
    }

    #[test]
    fn test_pop_lsb() {
        let mut bb = 0b1010_0000u128;
        assert_eq!(pop_lsb(&mut bb), 5);
        assert_eq!(pop_lsb(&mut bb), 7);
        assert_eq!(bb, 0);
    }
}
