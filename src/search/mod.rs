//! Move selection for Gomoku AI
//!
//! Contains:
//! - Candidate generation (search-space pruning around existing stones)
//! - Difficulty strategies built on the one-ply evaluator

pub mod candidates;
pub mod strategy;

pub use candidates::{candidate_moves, candidate_moves_or_all};
pub use strategy::{
    best_scored, choose, score_candidate, CenterBase, Choice, Difficulty, ScoringWeights,
};
