//! Search module for Freedom AI
//!
//! Contains:
//! - Depth policy and per-decision search configuration
//! - Minimax and alpha-beta search over the empty cells

pub mod config;
pub mod minimax;

pub use config::{depth_for, Algorithm, Difficulty, SearchConfig, MINIMAX_DEPTH_PENALTY};
pub use minimax::{choose_move, SearchResult, SearchStats, Searcher};
