//! Line windows used by the Freedom evaluation
//!
//! Every term of the heuristic is a count over fixed windows of the board:
//! length-4 windows (with the two cells that would extend them to a run of
//! five) and length-5 windows (a middle three plus two end cells). The
//! windows only depend on the board size, so they are built once per size
//! and stored as bitmasks over the cell index space.

use std::sync::OnceLock;

use crate::board::{BoardSize, Pos};

/// Direction vectors for line windows (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Four consecutive cells plus their in-bounds extension cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FourWindow {
    /// The four cells of the window
    pub cells: u128,
    /// The cell before and the cell after the window, where on the board
    pub flanks: u128,
}

/// Five consecutive cells split into the middle three and the two ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreeWindow {
    /// Middle three cells
    pub stones: u128,
    /// First and last cell
    pub ends: u128,
}

/// All windows for one board size
#[derive(Debug)]
pub struct PatternTable {
    pub fours: Vec<FourWindow>,
    pub threes: Vec<ThreeWindow>,
}

impl PatternTable {
    /// Shared table for a board size, built on first use
    pub fn for_size(size: BoardSize) -> &'static PatternTable {
        static SIX: OnceLock<PatternTable> = OnceLock::new();
        static EIGHT: OnceLock<PatternTable> = OnceLock::new();
        static TEN: OnceLock<PatternTable> = OnceLock::new();

        let cell = match size {
            BoardSize::Six => &SIX,
            BoardSize::Eight => &EIGHT,
            BoardSize::Ten => &TEN,
        };
        cell.get_or_init(|| PatternTable::build(size.dim()))
    }

    fn build(dim: usize) -> Self {
        let mut fours = Vec::new();
        let mut threes = Vec::new();

        for &(dr, dc) in &DIRECTIONS {
            for row in 0..dim as i32 {
                for col in 0..dim as i32 {
                    if let Some(cells) = line_mask(row, col, dr, dc, 4, dim) {
                        let mut flanks = 0u128;
                        if let Some(before) = cell_bit(row - dr, col - dc, dim) {
                            flanks |= before;
                        }
                        if let Some(after) = cell_bit(row + 4 * dr, col + 4 * dc, dim) {
                            flanks |= after;
                        }
                        fours.push(FourWindow { cells, flanks });
                    }

                    if let Some(span) = line_mask(row, col, dr, dc, 5, dim) {
                        let ends = cell_bit(row, col, dim).unwrap_or(0)
                            | cell_bit(row + 4 * dr, col + 4 * dc, dim).unwrap_or(0);
                        threes.push(ThreeWindow {
                            stones: span & !ends,
                            ends,
                        });
                    }
                }
            }
        }

        Self { fours, threes }
    }
}

/// Bit for a cell, or None if off the board
#[inline]
fn cell_bit(row: i32, col: i32, dim: usize) -> Option<u128> {
    if Pos::is_valid(row, col, dim) {
        Some(1u128 << (row as usize * dim + col as usize))
    } else {
        None
    }
}

/// Mask of `len` cells from (row, col) along (dr, dc), if all fit
fn line_mask(row: i32, col: i32, dr: i32, dc: i32, len: i32, dim: usize) -> Option<u128> {
    let mut mask = 0u128;
    for k in 0..len {
        mask |= cell_bit(row + k * dr, col + k * dc, dim)?;
    }
    Some(mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Windows of length `len` on an n x n board across all 4 directions
    fn expected_windows(n: usize, len: usize) -> usize {
        let fit = n + 1 - len;
        2 * n * fit + 2 * fit * fit
    }

    #[test]
    fn test_window_counts() {
        for size in BoardSize::ALL {
            let table = PatternTable::for_size(size);
            assert_eq!(table.fours.len(), expected_windows(size.dim(), 4));
            assert_eq!(table.threes.len(), expected_windows(size.dim(), 5));
        }
        assert_eq!(PatternTable::for_size(BoardSize::Six).fours.len(), 54);
        assert_eq!(PatternTable::for_size(BoardSize::Ten).fours.len(), 238);
    }

    #[test]
    fn test_window_shapes() {
        let table = PatternTable::for_size(BoardSize::Eight);
        for w in &table.fours {
            assert_eq!(w.cells.count_ones(), 4);
            assert!(w.flanks.count_ones() <= 2);
            assert_eq!(w.cells & w.flanks, 0);
        }
        for w in &table.threes {
            assert_eq!(w.stones.count_ones(), 3);
            assert_eq!(w.ends.count_ones(), 2);
            assert_eq!(w.stones & w.ends, 0);
        }
    }

    #[test]
    fn test_corner_window_has_one_flank() {
        let table = PatternTable::for_size(BoardSize::Six);
        // Row 0, columns 0..=3: nothing before, (0, 4) after
        let cells = 0b1111u128;
        let window = table
            .fours
            .iter()
            .find(|w| w.cells == cells)
            .expect("top-left horizontal window");
        assert_eq!(window.flanks, 1u128 << 4);
    }

    #[test]
    fn test_tables_are_shared() {
        let a = PatternTable::for_size(BoardSize::Ten) as *const PatternTable;
        let b = PatternTable::for_size(BoardSize::Ten) as *const PatternTable;
        assert_eq!(a, b);
    }
}
