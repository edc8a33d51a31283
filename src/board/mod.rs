//! Board representation for Freedom

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, EmptyCells};

use crate::error::FreedomError;

/// Largest supported board dimension (10x10)
pub const MAX_BOARD_SIZE: usize = 10;
pub const MAX_CELLS: usize = MAX_BOARD_SIZE * MAX_BOARD_SIZE; // 100

/// Supported board dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoardSize {
    Six,
    Eight,
    #[default]
    Ten,
}

impl BoardSize {
    pub const ALL: [BoardSize; 3] = [BoardSize::Six, BoardSize::Eight, BoardSize::Ten];

    /// Side length N of the N x N board
    #[inline]
    pub const fn dim(self) -> usize {
        match self {
            BoardSize::Six => 6,
            BoardSize::Eight => 8,
            BoardSize::Ten => 10,
        }
    }

    /// Total number of cells (N * N)
    #[inline]
    pub const fn cells(self) -> usize {
        self.dim() * self.dim()
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = FreedomError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            6 => Ok(BoardSize::Six),
            8 => Ok(BoardSize::Eight),
            10 => Ok(BoardSize::Ten),
            other => Err(FreedomError::UnsupportedBoardSize(other)),
        }
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{0}x{0}", self.dim())
    }
}

/// The two sides. `One` moves first and is drawn white.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::One, Player::Two];

    /// Get the opposing player
    #[inline]
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Plane index of this player (0 or 1)
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Board symbol used in text output
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Player::One => 'O',
            Player::Two => 'X',
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < MAX_BOARD_SIZE && (col as usize) < MAX_BOARD_SIZE);
        Self { row, col }
    }

    /// Row-major cell index on a board of side `dim`
    #[inline]
    pub fn to_index(self, dim: usize) -> usize {
        self.row as usize * dim + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, dim: usize) -> Self {
        Self {
            row: (idx / dim) as u8,
            col: (idx % dim) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32, dim: usize) -> bool {
        row >= 0 && row < dim as i32 && col >= 0 && col < dim as i32
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}
