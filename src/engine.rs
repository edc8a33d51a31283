//! Main AI engine for Freedom
//!
//! The engine is the single entry point the game controller uses to pick a
//! computer move. It owns the random number generator and the searcher and
//! picks one of two paths:
//!
//! 1. **Random**: every evaluation term is disabled, so a uniformly random
//!    empty cell is played without searching
//! 2. **Search**: minimax or alpha-beta over a private copy of the board
//!
//! # Example
//!
//! ```
//! use freedom::{Board, BoardSize, FreedomEngine, Player};
//! use freedom::search::{Algorithm, SearchConfig};
//! use freedom::eval::EvalWeights;
//!
//! let mut engine = FreedomEngine::with_seed(7);
//! let board = Board::new(BoardSize::Six);
//! let config = SearchConfig::new(2, Algorithm::AlphaBeta, EvalWeights::ALL);
//!
//! let result = engine.choose_move(&board, Player::One, &config).unwrap();
//! println!("Best move: {}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::board::{Board, Player, Pos};
use crate::error::{FreedomError, Result};
use crate::search::{Algorithm, SearchConfig, SearchResult, Searcher};

/// Path that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Uniform random pick, no evaluation terms enabled
    Random,
    /// Plain minimax
    Minimax,
    /// Minimax with alpha-beta pruning
    AlphaBeta,
}

impl SearchType {
    pub fn label(self) -> &'static str {
        match self {
            SearchType::Random => "Random",
            SearchType::Minimax => "Minimax",
            SearchType::AlphaBeta => "Alpha-Beta",
        }
    }
}

impl From<Algorithm> for SearchType {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Minimax => SearchType::Minimax,
            Algorithm::AlphaBeta => SearchType::AlphaBeta,
        }
    }
}

/// Result of a move decision with search statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    /// Cell to play
    pub best_move: Pos,
    /// Minimax value of the move for the player who chose it
    pub score: i32,
    pub search_type: SearchType,
    /// Plies searched (0 for a random pick)
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Alpha-beta cutoffs taken
    pub cutoffs: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Value of every root move, in row-major order
    pub root_scores: Vec<(Pos, i32)>,
}

impl MoveResult {
    #[inline]
    fn random(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: pos,
            score: 0,
            search_type: SearchType::Random,
            depth: 0,
            nodes: 0,
            cutoffs: 0,
            time_ms,
            root_scores: Vec::new(),
        }
    }

    #[inline]
    fn from_search(result: SearchResult, algorithm: Algorithm, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: algorithm.into(),
            depth: result.depth,
            nodes: result.stats.nodes,
            cutoffs: result.stats.cutoffs,
            time_ms,
            root_scores: result.root_scores,
        }
    }
}

/// Main AI engine for Freedom.
///
/// Holds the random number generator used both for the random path and for
/// tie-breaking between equally valued moves. A seeded engine replays the
/// same decisions for the same sequence of positions.
#[derive(Debug, Clone)]
pub struct FreedomEngine {
    searcher: Searcher,
    rng: StdRng,
}

impl FreedomEngine {
    /// Engine seeded from the operating system
    #[must_use]
    pub fn new() -> Self {
        Self {
            searcher: Searcher::new(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Engine with a deterministic random number generator
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            searcher: Searcher::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Choose a move for `player`.
    ///
    /// The caller's board is never modified; the search runs on a copy.
    ///
    /// # Errors
    ///
    /// Returns [`FreedomError::NoEmptyCells`] when the board is full.
    pub fn choose_move(
        &mut self,
        board: &Board,
        player: Player,
        config: &SearchConfig,
    ) -> Result<MoveResult> {
        let start = Instant::now();

        if config.weights.is_disabled() {
            let pos = self.random_move(board)?;
            debug!(?player, %pos, "random move, no evaluation terms enabled");
            return Ok(MoveResult::random(pos, start.elapsed().as_millis() as u64));
        }

        let mut scratch = board.clone();
        let result = self
            .searcher
            .search(&mut scratch, player, config, &mut self.rng)?;
        let time_ms = start.elapsed().as_millis() as u64;

        debug!(
            ?player,
            depth = result.depth,
            nodes = result.stats.nodes,
            cutoffs = result.stats.cutoffs,
            time_ms,
            score = result.score,
            "engine decision"
        );

        Ok(MoveResult::from_search(result, config.algorithm, time_ms))
    }

    /// Independent engine seeded from this one's generator, for running a
    /// search on another thread.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self {
            searcher: Searcher::new(),
            rng: StdRng::from_rng(&mut self.rng),
        }
    }

    /// Uniformly random empty cell
    fn random_move(&mut self, board: &Board) -> Result<Pos> {
        let count = board.empty_count();
        if count == 0 {
            return Err(FreedomError::NoEmptyCells);
        }
        let nth = self.rng.random_range(0..count);
        board.empty_cells().nth(nth).ok_or(FreedomError::NoEmptyCells)
    }
}

impl Default for FreedomEngine {
    fn default() -> Self {
        Self::new()
    }
}
