//! Evaluation module for Freedom positions
//!
//! This module provides window geometry and scoring for board positions.
//! The evaluation considers:
//! - Live fours (the game's own score)
//! - Open-ended threes
//! - Four-cell windows still available to a player

pub mod heuristic;
pub mod patterns;
pub mod weights;

pub use heuristic::{
    evaluate, exact_score, final_scores, latent_four_score, live_stones, open_three_score,
    utility,
};
pub use patterns::PatternTable;
pub use weights::{EvalTerm, EvalWeights};
