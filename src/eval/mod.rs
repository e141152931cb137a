//! Evaluation module for Gomoku AI
//!
//! Contains:
//! - Line scanning through a cell
//! - Pattern scoring of line shapes
//! - Move and position heuristics

pub mod heuristic;
pub mod line;
pub mod patterns;

pub use heuristic::{
    center_bias, center_distance, count_neighbors, evaluate_board, evaluate_move_score,
};
pub use line::{get_line_info, LineInfo};
pub use patterns::{pattern_score, PatternScore};
