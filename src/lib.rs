//! Heuristic Gomoku engine
//!
//! A five-in-a-row game between a human and a one-ply heuristic AI:
//! - 15x15 board by default (5x5 to 25x25 supported)
//! - Five or more stones in a row win (overlines allowed)
//! - A full board without a winner is a draw
//! - Three AI levels: Easy, Medium, Hard
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards and speculative probes
//! - [`rules`]: Win detection
//! - [`eval`]: Line scanning, pattern scores and move heuristics
//! - [`search`]: Candidate generation and difficulty strategies
//! - [`engine`]: Main AI engine and the external move interface
//! - [`session`]: Turn order and game status for one game
//! - [`config`]: Settings loaded at game start
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{apply_move, is_winning_move, AIEngine, Board, Difficulty, Move, Pos, Stone};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::with_seed(Difficulty::Hard, 7);
//!
//! // Human plays Black
//! let human = Move::new(Pos::new(7, 7), Stone::Black);
//! apply_move(&mut board, human).unwrap();
//!
//! // AI responds as White
//! if let Some(mv) = engine.select_move(&board, Stone::White, Stone::Black) {
//!     apply_move(&mut board, mv).unwrap();
//!     assert!(!is_winning_move(&board, mv));
//!     println!("AI plays at {}", mv.pos);
//! }
//! ```
//!
//! # Decision Priority
//!
//! 1. Immediate winning move
//! 2. Block the opponent's immediate win
//! 3. Difficulty strategy (center/random for Easy, weighted one-ply score
//!    for Medium and Hard)

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Move, Pos, Stone, BOARD_SIZE};
pub use config::{FirstMove, GameConfig};
pub use engine::{apply_move, is_winning_move, select_move, AIEngine, MoveResult, SearchType};
pub use error::{ConfigError, GameError};
pub use search::Difficulty;
pub use session::{GameSession, Player, Status};
