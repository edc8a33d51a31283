//! Freedom board game engine
//!
//! Freedom is played on a 6x6, 8x8 or 10x10 board. Two players take turns
//! placing stones on any empty cell:
//! - Player One moves first
//! - A stone is "live" when it is part of a row of exactly four stones of one
//!   colour, horizontally, vertically or diagonally
//! - The score is the number of such rows; a run of five or more scores nothing
//! - With one cell left, the player to move may pass instead of lowering their
//!   own score, and the game ends
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with one bitboard per player
//! - [`eval`]: Window geometry and the heuristic evaluation
//! - [`search`]: Depth policy, minimax and alpha-beta search
//! - [`engine`]: Move selection facade with the random fallback
//! - [`game`]: Turn order, seats and game termination
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use freedom::{BoardSize, GameController, GameMode, GameSettings};
//!
//! let settings = GameSettings {
//!     size: BoardSize::Six,
//!     mode: GameMode::ComputerVsComputer,
//!     fixed_depth: Some(1),
//!     seed: Some(42),
//!     ..GameSettings::default()
//! };
//!
//! let mut game = GameController::new(settings);
//! game.run_computer_turns().unwrap();
//!
//! let outcome = game.outcome().unwrap();
//! println!("{}", game.board());
//! println!("Scores: {:?}, winner: {:?}", outcome.scores, outcome.winner);
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, BoardSize, Player, Pos, MAX_BOARD_SIZE};
pub use engine::{FreedomEngine, MoveResult, SearchType};
pub use error::{FreedomError, Result};
pub use game::{Command, GameController, GameMode, GameSettings, Outcome};
