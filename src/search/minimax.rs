//! Depth-bounded minimax and alpha-beta search
//!
//! The searcher explores the tree in place: every frame places a stone on the
//! shared board, recurses, and removes the stone again before looking at the
//! next sibling. No board is cloned below the root.
//!
//! Leaves are scored from the root player's perspective with
//! [`evaluate`](crate::eval::evaluate), so the root player maximizes and the
//! opponent minimizes.
//!
//! # Example
//!
//! ```
//! use freedom::board::{Board, BoardSize, Player};
//! use freedom::search::{Algorithm, SearchConfig, Searcher};
//! use freedom::eval::EvalWeights;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut board = Board::new(BoardSize::Six);
//! let config = SearchConfig::new(2, Algorithm::AlphaBeta, EvalWeights::ALL);
//! let mut rng = StdRng::seed_from_u64(1);
//!
//! let result = Searcher::new().search(&mut board, Player::One, &config, &mut rng).unwrap();
//! assert!(board.is_empty(result.best_move));
//! ```

use rand::Rng;
use tracing::{debug, trace};

use crate::board::{Board, Player, Pos};
use crate::error::{FreedomError, Result};
use crate::eval::{evaluate, EvalWeights};

use super::config::{Algorithm, SearchConfig};

/// Infinity score for alpha-beta bounds
const INF: i32 = 2_000_000_000;

/// Search statistics for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, leaves included
    pub nodes: u64,
    /// Static evaluations performed
    pub leaves: u64,
    /// Alpha or beta cutoffs taken
    pub cutoffs: u64,
}

/// Search result containing the chosen move and associated statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Chosen move
    pub best_move: Pos,
    /// Minimax value of the chosen move
    pub score: i32,
    /// Plies searched
    pub depth: u8,
    /// Exact value of every root move, in row-major order
    pub root_scores: Vec<(Pos, i32)>,
    pub stats: SearchStats,
}

/// Minimax / alpha-beta searcher.
///
/// Holds the per-search state (root player, evaluation weights and counters);
/// a searcher can be reused across searches.
#[derive(Debug, Clone)]
pub struct Searcher {
    root: Player,
    weights: EvalWeights,
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: Player::One,
            weights: EvalWeights::ALL,
            stats: SearchStats::default(),
        }
    }

    /// Choose a move for `player`.
    ///
    /// Every empty cell is tried in row-major order and valued by searching
    /// `config.max_depth - 1` further plies. A strictly better value replaces
    /// the current best; an equal value replaces it on a fair coin flip drawn
    /// from `rng`. Alpha-beta children of the root are searched with a full
    /// window, so both algorithms report identical root values.
    ///
    /// The board is left exactly as it was passed in.
    ///
    /// # Errors
    ///
    /// Returns [`FreedomError::NoEmptyCells`] on a full board.
    pub fn search<R: Rng>(
        &mut self,
        board: &mut Board,
        player: Player,
        config: &SearchConfig,
        rng: &mut R,
    ) -> Result<SearchResult> {
        if board.is_full() {
            return Err(FreedomError::NoEmptyCells);
        }

        self.root = player;
        self.weights = config.weights;
        self.stats = SearchStats::default();

        let depth = config.max_depth.max(1);
        let mut best: Option<(Pos, i32)> = None;
        let mut root_scores = Vec::with_capacity(board.empty_count());

        for pos in board.empty_cells() {
            board.place(player, pos);
            let score = match config.algorithm {
                Algorithm::AlphaBeta => self.min_value_ab(board, -INF, INF, depth - 1),
                Algorithm::Minimax => self.min_value(board, depth - 1),
            };
            board.unplace(player, pos);

            trace!(%pos, score, "root move");
            root_scores.push((pos, score));

            let replace = match best {
                None => true,
                Some((_, best_score)) => {
                    score > best_score || (score == best_score && rng.random_bool(0.5))
                }
            };
            if replace {
                best = Some((pos, score));
            }
        }

        let (best_move, score) = best.ok_or(FreedomError::NoEmptyCells)?;

        debug!(
            player = ?player,
            algorithm = ?config.algorithm,
            depth,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            score,
            best = %best_move,
            "search finished"
        );

        Ok(SearchResult {
            best_move,
            score,
            depth,
            root_scores,
            stats: self.stats,
        })
    }

    /// Static value of a leaf from the root player's perspective
    #[inline]
    fn leaf(&mut self, board: &Board) -> i32 {
        self.stats.leaves += 1;
        evaluate(board, self.root, &self.weights)
    }

    /// Root player to move: best value over all replies
    fn max_value(&mut self, board: &mut Board, depth: u8) -> i32 {
        self.stats.nodes += 1;
        if depth == 0 || board.is_full() {
            return self.leaf(board);
        }

        let player = self.root;
        let mut max = -INF;
        for pos in board.empty_cells() {
            board.place(player, pos);
            let value = self.min_value(board, depth - 1);
            board.unplace(player, pos);
            max = max.max(value);
        }
        max
    }

    /// Opponent to move: worst value for the root player over all replies
    fn min_value(&mut self, board: &mut Board, depth: u8) -> i32 {
        self.stats.nodes += 1;
        if depth == 0 || board.is_full() {
            return self.leaf(board);
        }

        let player = self.root.other();
        let mut min = INF;
        for pos in board.empty_cells() {
            board.place(player, pos);
            let value = self.max_value(board, depth - 1);
            board.unplace(player, pos);
            min = min.min(value);
        }
        min
    }

    /// [`Self::max_value`] with a beta cutoff
    fn max_value_ab(&mut self, board: &mut Board, mut alpha: i32, beta: i32, depth: u8) -> i32 {
        self.stats.nodes += 1;
        if depth == 0 || board.is_full() {
            return self.leaf(board);
        }

        let player = self.root;
        let mut max = -INF;
        for pos in board.empty_cells() {
            board.place(player, pos);
            let value = self.min_value_ab(board, alpha, beta, depth - 1);
            board.unplace(player, pos);

            max = max.max(value);
            if max >= beta {
                self.stats.cutoffs += 1;
                return max;
            }
            alpha = alpha.max(max);
        }
        max
    }

    /// [`Self::min_value`] with an alpha cutoff
    fn min_value_ab(&mut self, board: &mut Board, alpha: i32, mut beta: i32, depth: u8) -> i32 {
        self.stats.nodes += 1;
        if depth == 0 || board.is_full() {
            return self.leaf(board);
        }

        let player = self.root.other();
        let mut min = INF;
        for pos in board.empty_cells() {
            board.place(player, pos);
            let value = self.max_value_ab(board, alpha, beta, depth - 1);
            board.unplace(player, pos);

            min = min.min(value);
            if min <= alpha {
                self.stats.cutoffs += 1;
                return min;
            }
            beta = beta.min(min);
        }
        min
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot search with a fresh [`Searcher`]
pub fn choose_move<R: Rng>(
    board: &mut Board,
    player: Player,
    config: &SearchConfig,
    rng: &mut R,
) -> Result<SearchResult> {
    Searcher::new().search(board, player, config, rng)
}
