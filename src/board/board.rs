//! Two-plane board with speculative place/unplace

use super::bitboard::{Bitboard, BitboardIter};
use super::{BoardSize, Player, Pos};
use crate::error::{FreedomError, Result};

/// Game board: one occupancy plane per player plus a running empty count.
///
/// `place` and `unplace` are O(1) and exact inverses, so the search can
/// mutate one board in place and undo every move on the way back up.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: BoardSize,
    planes: [Bitboard; 2],
    empty_count: usize,
}

impl Board {
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            planes: [Bitboard::new(); 2],
            empty_count: size.cells(),
        }
    }

    #[inline]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Side length N
    #[inline]
    pub fn dim(&self) -> usize {
        self.size.dim()
    }

    /// Number of cells held by neither player
    #[inline]
    pub fn empty_count(&self) -> usize {
        self.empty_count
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty_count == 0
    }

    /// Check that a position lies on this board
    pub fn check_bounds(&self, pos: Pos) -> Result<()> {
        if Pos::is_valid(i32::from(pos.row), i32::from(pos.col), self.dim()) {
            Ok(())
        } else {
            Err(FreedomError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                size: self.dim(),
            })
        }
    }

    /// Occupancy plane of a player
    #[inline]
    pub fn plane(&self, player: Player) -> Bitboard {
        self.planes[player.index()]
    }

    /// Cells held by neither player
    #[inline]
    pub fn empty_plane(&self) -> Bitboard {
        !(self.planes[0] | self.planes[1]) & Bitboard::full(self.size.cells())
    }

    /// Get the owner of a cell
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Player> {
        let idx = pos.to_index(self.dim());
        if self.planes[0].get(idx) {
            Some(Player::One)
        } else if self.planes[1].get(idx) {
            Some(Player::Two)
        } else {
            None
        }
    }

    /// Check if neither plane marks the cell
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        let idx = pos.to_index(self.dim());
        !self.planes[0].get(idx) && !self.planes[1].get(idx)
    }

    /// Place a stone. The cell must be empty.
    ///
    /// # Panics
    ///
    /// Panics if the cell is occupied; use [`Board::try_place`] for input
    /// that has not been validated.
    #[inline]
    pub fn place(&mut self, player: Player, pos: Pos) {
        assert!(
            self.is_empty(pos),
            "place({player:?}, {pos}) on an occupied cell"
        );
        self.planes[player.index()].set(pos.to_index(self.dim()));
        self.empty_count -= 1;
    }

    /// Remove a stone previously placed by `player`.
    ///
    /// # Panics
    ///
    /// Panics if `player` does not hold the cell.
    #[inline]
    pub fn unplace(&mut self, player: Player, pos: Pos) {
        let idx = pos.to_index(self.dim());
        assert!(
            self.planes[player.index()].get(idx),
            "unplace({player:?}, {pos}) on a cell it does not hold"
        );
        self.planes[player.index()].clear(idx);
        self.empty_count += 1;
    }

    /// Checked variant of [`Board::place`]
    pub fn try_place(&mut self, player: Player, pos: Pos) -> Result<()> {
        self.check_bounds(pos)?;
        if !self.is_empty(pos) {
            return Err(FreedomError::CellOccupied(pos));
        }
        self.place(player, pos);
        Ok(())
    }

    /// Checked variant of [`Board::unplace`]
    pub fn try_unplace(&mut self, player: Player, pos: Pos) -> Result<()> {
        self.check_bounds(pos)?;
        if self.get(pos) != Some(player) {
            return Err(FreedomError::CellNotOwned { pos, player });
        }
        self.unplace(player, pos);
        Ok(())
    }

    /// Empty cells in row-major order.
    ///
    /// The iterator holds a snapshot of the empty plane, not a borrow, so
    /// the board may be mutated inside the loop body.
    #[inline]
    pub fn empty_cells(&self) -> EmptyCells {
        EmptyCells {
            inner: self.empty_plane().iter_ones(),
            dim: self.dim(),
        }
    }

    /// Call `f` for every empty cell in row-major order
    pub fn for_each_empty_cell(&self, mut f: impl FnMut(Pos)) {
        for pos in self.empty_cells() {
            f(pos);
        }
    }

    /// Stones held by a player
    #[inline]
    pub fn stone_count(&self, player: Player) -> u32 {
        self.planes[player.index()].count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dim = self.dim();
        write!(f, "   ")?;
        for col in 0..dim {
            write!(f, " {col}")?;
        }
        writeln!(f)?;
        for row in 0..dim {
            write!(f, "{row:>2} ")?;
            for col in 0..dim {
                let symbol = match self.get(Pos::new(row as u8, col as u8)) {
                    Some(player) => player.symbol(),
                    None => '.',
                };
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over empty cells, see [`Board::empty_cells`]
#[derive(Debug, Clone)]
pub struct EmptyCells {
    inner: BitboardIter,
    dim: usize,
}

impl Iterator for EmptyCells {
    type Item = Pos;

    #[inline]
    fn next(&mut self) -> Option<Pos> {
        self.inner.next().map(|idx| Pos::from_index(idx, self.dim))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for EmptyCells {}
