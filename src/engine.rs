//! Main AI engine integrating the move-selection components
//!
//! Every difficulty follows the same priority:
//!
//! 1. **Immediate win**: complete five if possible
//! 2. **Block**: occupy the cell where the opponent would complete five
//! 3. **Strategy**: Easy plays center/random, Medium and Hard play the best
//!    one-ply heuristic score
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Difficulty, Pos, Stone};
//!
//! let mut engine = AIEngine::with_seed(Difficulty::Medium, 42);
//! let mut board = Board::new();
//! board.place(Pos::new(7, 7), Stone::Black).unwrap();
//!
//! let result = engine.select_move_with_stats(&board, Stone::White, Stone::Black);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::board::{Board, Move, Stone};
use crate::error::GameError;
use crate::rules::check_win;
use crate::search::{choose, Choice, Difficulty};

/// Which branch of the decision procedure produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Completes five in a row
    ImmediateWin,
    /// Occupies the opponent's winning cell
    Block,
    /// Opening move at the center (Easy)
    Center,
    /// Uniform pick among nearby or empty cells (Easy)
    Random,
    /// Best weighted one-ply score (Medium, Hard)
    Heuristic,
}

/// Result of a move selection with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen move, `None` when the board is full
    pub best_move: Option<Move>,
    /// Heuristic score of the move (0 for unscored branches)
    pub score: f64,
    /// Branch that produced the move
    pub search_type: Option<SearchType>,
    /// Number of cells considered by the deciding branch
    pub candidates: usize,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    fn from_choice(choice: Choice, stone: Stone, time_ms: u64) -> Self {
        Self {
            best_move: Some(Move::new(choice.pos, stone)),
            score: choice.score,
            search_type: Some(choice.search_type),
            candidates: choice.candidates,
            time_ms,
        }
    }

    fn no_move(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0.0,
            search_type: None,
            candidates: 0,
            time_ms,
        }
    }
}

/// Heuristic Gomoku AI.
///
/// Owns the difficulty and the random source used by the Easy strategy.
/// Seeding it makes every choice reproducible.
///
/// # Example
///
/// ```
/// use gomoku::{AIEngine, Board, Difficulty, Pos, Stone};
///
/// let mut engine = AIEngine::new(Difficulty::Easy);
/// let board = Board::new();
///
/// // Easy always opens at the center
/// let mv = engine.select_move(&board, Stone::Black, Stone::White).unwrap();
/// assert_eq!(mv.pos, Pos::new(7, 7));
/// ```
pub struct AIEngine {
    difficulty: Difficulty,
    rng: Pcg32,
}

impl AIEngine {
    /// Create an engine seeded from the thread-local generator.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_seed(difficulty, rand::random())
    }

    /// Create an engine with a fixed seed.
    #[must_use]
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Create an engine from an optional seed.
    #[must_use]
    pub fn with_config(difficulty: Difficulty, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(difficulty, seed),
            None => Self::new(difficulty),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Pick a move for `ai` against `opponent`.
    ///
    /// Returns `None` only when the board has no empty cell.
    #[must_use]
    pub fn select_move(&mut self, board: &Board, ai: Stone, opponent: Stone) -> Option<Move> {
        self.select_move_with_stats(board, ai, opponent).best_move
    }

    /// Pick a move and report how it was found.
    #[must_use]
    pub fn select_move_with_stats(
        &mut self,
        board: &Board,
        ai: Stone,
        opponent: Stone,
    ) -> MoveResult {
        let start = Instant::now();
        let mut scratch = board.clone();
        let choice = choose(&mut scratch, self.difficulty, ai, opponent, &mut self.rng);
        let time_ms = start.elapsed().as_millis() as u64;

        match choice {
            Some(choice) => {
                log::debug!(
                    "{} AI ({}) plays {} via {:?} (score {:.1}, {} candidates, {}ms)",
                    self.difficulty,
                    ai.name(),
                    choice.pos,
                    choice.search_type,
                    choice.score,
                    choice.candidates,
                    time_ms
                );
                MoveResult::from_choice(choice, ai, time_ms)
            }
            None => {
                log::debug!("{} AI ({}) has no legal move", self.difficulty, ai.name());
                MoveResult::no_move(time_ms)
            }
        }
    }
}

/// Pick a move with an explicit random source.
///
/// Pure with respect to `board`: probes run on a private copy.
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    ai: Stone,
    opponent: Stone,
    rng: &mut R,
) -> Option<Move> {
    let mut scratch = board.clone();
    choose(&mut scratch, difficulty, ai, opponent, rng).map(|choice| Move::new(choice.pos, ai))
}

/// Apply a move, rejecting off-board and occupied cells.
pub fn apply_move(board: &mut Board, mv: Move) -> Result<(), GameError> {
    board.place(mv.pos, mv.stone)
}

/// Whether the already-applied `mv` completes five in a row.
pub fn is_winning_move(board: &Board, mv: Move) -> bool {
    board.get(mv.pos) == mv.stone && check_win(board, mv.pos, mv.stone)
}
