//! Heuristic evaluation function for Freedom board positions
//!
//! The utility of a position for one player combines three counts:
//! - Exact score: live fours, i.e. runs of exactly four (the game's score)
//! - Open threes: `_XXX_` with both ends empty
//! - Latent fours: four-cell windows without an opponent stone
//!
//! The weighting is `((2 * exact) + open_threes) * 2 + latent_fours`, with
//! disabled terms contributing zero. The doubling is applied whether or not
//! the first two terms are enabled.

use crate::board::{Bitboard, Board, Player};

use super::patterns::PatternTable;
use super::weights::EvalWeights;

/// Evaluate the board from the perspective of the given player.
///
/// Returns `utility(player) - utility(opponent)`, so
/// `evaluate(board, a) == -evaluate(board, a.other())` for any board.
#[must_use]
#[inline]
pub fn evaluate(board: &Board, player: Player, weights: &EvalWeights) -> i32 {
    utility(board, player, weights) - utility(board, player.other(), weights)
}

/// Utility of a position for one player, gated by the enabled terms
#[must_use]
pub fn utility(board: &Board, player: Player, weights: &EvalWeights) -> i32 {
    let mut utility = 0;
    if weights.exact_score {
        utility = 2 * exact_score(board, player);
    }
    if weights.open_three {
        utility += open_three_score(board, player);
    }
    utility *= 2;
    if weights.latent_four {
        utility += latent_four_score(board, player);
    }
    utility
}

/// Number of live fours: windows of four `player` stones whose extension
/// cells on both ends (where on the board) are not `player` stones.
///
/// A run of five or more scores nothing.
#[must_use]
pub fn exact_score(board: &Board, player: Player) -> i32 {
    let table = PatternTable::for_size(board.size());
    let own = board.plane(player);

    table
        .fours
        .iter()
        .filter(|w| own.contains_all(w.cells) && !own.intersects(w.flanks))
        .count() as i32
}

/// Number of threes of `player` stones with an empty cell at both ends
#[must_use]
pub fn open_three_score(board: &Board, player: Player) -> i32 {
    let table = PatternTable::for_size(board.size());
    let own = board.plane(player);
    let empty = board.empty_plane();

    table
        .threes
        .iter()
        .filter(|w| own.contains_all(w.stones) && empty.contains_all(w.ends))
        .count() as i32
}

/// Number of four-cell windows free of opponent stones, minus one for each
/// such window that a `player` stone on either end would extend past four.
#[must_use]
pub fn latent_four_score(board: &Board, player: Player) -> i32 {
    let table = PatternTable::for_size(board.size());
    let own = board.plane(player);
    let opp = board.plane(player.other());

    let mut score = 0;
    for w in &table.fours {
        if !opp.intersects(w.cells) {
            score += 1;
            if own.intersects(w.flanks) {
                score -= 1;
            }
        }
    }
    score
}

/// Stones of `player` that belong to at least one live four
#[must_use]
pub fn live_stones(board: &Board, player: Player) -> Bitboard {
    let table = PatternTable::for_size(board.size());
    let own = board.plane(player);

    let bits = table
        .fours
        .iter()
        .filter(|w| own.contains_all(w.cells) && !own.intersects(w.flanks))
        .fold(0u128, |acc, w| acc | w.cells);
    Bitboard::from_bits(bits)
}

/// Final game score for both players, indexed by [`Player::index`]
#[must_use]
pub fn final_scores(board: &Board) -> [i32; 2] {
    [
        exact_score(board, Player::One),
        exact_score(board, Player::Two),
    ]
}
