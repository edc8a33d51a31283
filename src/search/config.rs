//! Per-decision search configuration and the depth policy

use crate::eval::EvalWeights;

/// Search depth by number of empty cells: `(max empty cells, plies)`.
/// Fewer empty cells means a smaller tree, so the search goes deeper.
pub const DEPTH_TIERS: [(usize, i32); 5] = [(11, 10), (20, 7), (30, 6), (50, 5), (80, 4)];

/// Depth used when more empty cells remain than the last tier covers
pub const OPENING_DEPTH: i32 = 3;

/// Plain minimax visits every node, so it searches one ply less than
/// alpha-beta at the same setting.
pub const MINIMAX_DEPTH_PENALTY: i32 = 1;

/// Computer strength, applied as a ply offset to the depth policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Genius,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Genius];

    #[inline]
    pub fn offset(self) -> i32 {
        match self {
            Difficulty::Easy => -1,
            Difficulty::Normal => 0,
            Difficulty::Genius => 1,
        }
    }
}

/// Tree search variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    Minimax,
    #[default]
    AlphaBeta,
}

/// Depth policy before clamping: a step function of the number of empty
/// cells, non-increasing as that number grows, shifted by difficulty.
#[must_use]
pub fn depth_for(empty_cells: usize, difficulty: Difficulty) -> i32 {
    tier_depth(empty_cells) + difficulty.offset()
}

fn tier_depth(empty_cells: usize) -> i32 {
    DEPTH_TIERS
        .iter()
        .find(|&&(max_empty, _)| empty_cells <= max_empty)
        .map_or(OPENING_DEPTH, |&(_, depth)| depth)
}

/// Settings for one move decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched below the current position (at least 1)
    pub max_depth: u8,
    pub algorithm: Algorithm,
    pub weights: EvalWeights,
}

impl SearchConfig {
    pub fn new(max_depth: u8, algorithm: Algorithm, weights: EvalWeights) -> Self {
        Self {
            max_depth: max_depth.max(1),
            algorithm,
            weights,
        }
    }

    /// Config for a position with `empty_cells` empty cells.
    ///
    /// The tier depth is first capped at `empty_cells - 1`, the plies left
    /// before the last-cell pass rule settles the game. Difficulty and the
    /// minimax penalty shift that value, so they still apply in the endgame.
    /// The result stays within `[1, empty_cells]`.
    pub fn for_position(
        empty_cells: usize,
        difficulty: Difficulty,
        algorithm: Algorithm,
        weights: EvalWeights,
    ) -> Self {
        let horizon = empty_cells.saturating_sub(1).max(1) as i32;
        let mut depth = tier_depth(empty_cells).min(horizon) + difficulty.offset();
        if algorithm == Algorithm::Minimax {
            depth -= MINIMAX_DEPTH_PENALTY;
        }
        let depth = depth.clamp(1, empty_cells.max(1) as i32);
        Self::new(depth as u8, algorithm, weights)
    }

    #[inline]
    pub fn use_alpha_beta(&self) -> bool {
        self.algorithm == Algorithm::AlphaBeta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_tiers() {
        assert_eq!(depth_for(100, Difficulty::Normal), 3);
        assert_eq!(depth_for(81, Difficulty::Normal), 3);
        assert_eq!(depth_for(80, Difficulty::Normal), 4);
        assert_eq!(depth_for(50, Difficulty::Normal), 5);
        assert_eq!(depth_for(30, Difficulty::Normal), 6);
        assert_eq!(depth_for(20, Difficulty::Normal), 7);
        assert_eq!(depth_for(11, Difficulty::Normal), 10);
        assert_eq!(depth_for(1, Difficulty::Normal), 10);
    }

    #[test]
    fn test_depth_monotonic() {
        for difficulty in Difficulty::ALL {
            for empty in 0..100 {
                assert!(
                    depth_for(empty, difficulty) >= depth_for(empty + 1, difficulty),
                    "depth increased from {} to {} empty cells ({:?})",
                    empty,
                    empty + 1,
                    difficulty
                );
            }
        }
    }

    #[test]
    fn test_difficulty_offset() {
        assert_eq!(depth_for(60, Difficulty::Easy), 3);
        assert_eq!(depth_for(60, Difficulty::Genius), 5);
    }

    fn endgame_depths(empty: usize, algorithm: Algorithm) -> Vec<u8> {
        Difficulty::ALL
            .iter()
            .map(|&d| SearchConfig::for_position(empty, d, algorithm, EvalWeights::ALL).max_depth)
            .collect()
    }

    #[test]
    fn test_difficulty_applies_in_endgame() {
        assert_eq!(endgame_depths(5, Algorithm::AlphaBeta), vec![3, 4, 5]);
        assert_eq!(endgame_depths(8, Algorithm::AlphaBeta), vec![6, 7, 8]);
        assert_eq!(endgame_depths(10, Algorithm::AlphaBeta), vec![8, 9, 10]);
    }

    #[test]
    fn test_minimax_shallower_in_endgame() {
        assert_eq!(endgame_depths(5, Algorithm::Minimax), vec![2, 3, 4]);
        assert_eq!(endgame_depths(8, Algorithm::Minimax), vec![5, 6, 7]);
    }

    #[test]
    fn test_for_position_stays_in_range() {
        for empty in 1..=100 {
            for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
                for depth in endgame_depths(empty, algorithm) {
                    assert!(depth >= 1, "depth 0 at {} empty cells", empty);
                    assert!(depth as usize <= empty, "depth {} at {} empty cells", depth, empty);
                }
            }
        }
        assert_eq!(endgame_depths(1, Algorithm::AlphaBeta), vec![1, 1, 1]);
        assert_eq!(endgame_depths(2, Algorithm::Minimax), vec![1, 1, 1]);
    }

    #[test]
    fn test_minimax_one_ply_shallower() {
        let ab = SearchConfig::for_position(64, Difficulty::Normal, Algorithm::AlphaBeta, EvalWeights::ALL);
        let mm = SearchConfig::for_position(64, Difficulty::Normal, Algorithm::Minimax, EvalWeights::ALL);
        assert_eq!(ab.max_depth, 4);
        assert_eq!(mm.max_depth, 3);
        assert!(ab.use_alpha_beta());
        assert!(!mm.use_alpha_beta());
    }

    #[test]
    fn test_new_enforces_minimum_depth() {
        assert_eq!(SearchConfig::new(0, Algorithm::AlphaBeta, EvalWeights::ALL).max_depth, 1);
    }
}
