//! Error types for the Freedom engine
//!
//! Board, search and controller operations that can be misused from the UI
//! boundary report a [`FreedomError`]. Broken invariants inside the search
//! itself are not recoverable and panic instead.

use crate::board::{Player, Pos};

/// Errors that can occur while setting up or playing a game
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FreedomError {
    /// Only 6x6, 8x8 and 10x10 boards are supported
    #[error("Unsupported board size {0} (expected 6, 8 or 10)")]
    UnsupportedBoardSize(usize),

    /// Position lies outside the board
    #[error("Position ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds { row: u8, col: u8, size: usize },

    /// Cell already holds a stone
    #[error("Cell ({}, {}) is already occupied", .0.row, .0.col)]
    CellOccupied(Pos),

    /// Cell is not held by the player trying to remove a stone from it
    #[error("Cell ({}, {}) is not occupied by {player:?}", .pos.row, .pos.col)]
    CellNotOwned { pos: Pos, player: Player },

    /// Move selection was requested on a full board
    #[error("No empty cells left to choose a move from")]
    NoEmptyCells,

    /// The game has already been decided
    #[error("Game is over")]
    GameOver,

    /// A human move was attempted while the computer is to move
    #[error("Not a human turn ({0:?} is computer controlled)")]
    NotHumanTurn(Player),

    /// A computer move was requested while a human is to move
    #[error("Not a computer turn ({0:?} is human controlled)")]
    NotComputerTurn(Player),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, FreedomError>;
