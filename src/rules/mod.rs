//! Game rules for Gomoku
//!
//! Freestyle rules: the first player to line up five or more stones wins;
//! a full board without a winner is a draw.

pub mod win;

pub use win::{check_win, find_immediate_win, find_winning_line, WIN_LENGTH};
