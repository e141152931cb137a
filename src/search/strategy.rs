//! Difficulty strategies
//!
//! Every strategy first takes an immediate win, then blocks the opponent's
//! immediate win. After that:
//!
//! - **Easy** plays the center, else a random cell next to a stone, else a
//!   random empty cell.
//! - **Medium** and **Hard** score radius-2 candidates with one weighted
//!   function ([`ScoringWeights`]) and play the best one. Hard weighs offense
//!   higher; it does not look further ahead.

use std::fmt;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::board::{Board, Pos, Stone};
use crate::engine::SearchType;
use crate::eval::{center_bias, count_neighbors, evaluate_move_score};
use crate::rules::find_immediate_win;

use super::candidates::{candidate_moves, candidate_moves_or_all};

/// AI strength, fixed for the duration of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(serde::Serialize, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Candidate radius used after the win/block checks
    pub fn radius(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium | Difficulty::Hard => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Constant term of the center bias
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CenterBase {
    /// Fixed constant, independent of the board size
    Fixed(f64),
    /// `N`: the bias becomes `(N/2 - |x - N/2|) + (N/2 - |y - N/2|)`
    BoardSize,
}

/// Weights of the one-ply move score
///
/// `offense * own + defense * opponent + center_bias + neighbor * neighbors`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub offense: f64,
    pub defense: f64,
    pub center: CenterBase,
    pub neighbor: f64,
}

impl ScoringWeights {
    pub const MEDIUM: ScoringWeights = ScoringWeights {
        offense: 1.2,
        defense: 1.0,
        center: CenterBase::Fixed(12.0),
        neighbor: 2.0,
    };

    pub const HARD: ScoringWeights = ScoringWeights {
        offense: 2.0,
        defense: 1.0,
        center: CenterBase::BoardSize,
        neighbor: 2.0,
    };

    fn center_base(&self, board: &Board) -> f64 {
        match self.center {
            CenterBase::Fixed(base) => base,
            CenterBase::BoardSize => board.size() as f64,
        }
    }
}

/// A strategy's pick, before it is turned into a [`crate::Move`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Choice {
    pub pos: Pos,
    pub search_type: SearchType,
    /// Heuristic score for scored picks, 0 otherwise
    pub score: f64,
    /// Number of cells the strategy chose among
    pub candidates: usize,
}

impl Choice {
    fn new(pos: Pos, search_type: SearchType, candidates: usize) -> Self {
        Self {
            pos,
            search_type,
            score: 0.0,
            candidates,
        }
    }
}

/// Run the strategy for `difficulty` and pick a cell for `ai`.
///
/// The board may be probed but is unchanged on return. `None` means no
/// empty cell is left.
pub fn choose<R: Rng + ?Sized>(
    board: &mut Board,
    difficulty: Difficulty,
    ai: Stone,
    opponent: Stone,
    rng: &mut R,
) -> Option<Choice> {
    if let Some(choice) = forced_move(board, ai, opponent) {
        return Some(choice);
    }

    match difficulty {
        Difficulty::Easy => easy(board, rng),
        Difficulty::Medium => medium(board, ai, opponent),
        Difficulty::Hard => hard(board, ai, opponent),
    }
}

/// Win if possible, otherwise block the opponent's win
fn forced_move(board: &mut Board, ai: Stone, opponent: Stone) -> Option<Choice> {
    if let Some(pos) = find_immediate_win(board, ai) {
        return Some(Choice::new(pos, SearchType::ImmediateWin, 1));
    }
    find_immediate_win(board, opponent).map(|pos| Choice::new(pos, SearchType::Block, 1))
}

fn easy<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Choice> {
    let center = board.center();
    if board.is_empty(center) {
        return Some(Choice::new(center, SearchType::Center, 1));
    }

    let near = candidate_moves(board, Difficulty::Easy.radius());
    let pool = if near.is_empty() { board.empty_cells() } else { near };
    pool.choose(rng)
        .map(|&pos| Choice::new(pos, SearchType::Random, pool.len()))
}

fn medium(board: &mut Board, ai: Stone, opponent: Stone) -> Option<Choice> {
    let moves = candidate_moves_or_all(board, Difficulty::Medium.radius());
    best_scored(board, &moves, ai, opponent, &ScoringWeights::MEDIUM)
}

fn hard(board: &mut Board, ai: Stone, opponent: Stone) -> Option<Choice> {
    let moves = candidate_moves_or_all(board, Difficulty::Hard.radius());
    best_scored(board, &moves, ai, opponent, &ScoringWeights::HARD)
}

/// Weighted one-ply score of playing `pos` for `ai`
pub fn score_candidate(
    board: &mut Board,
    pos: Pos,
    ai: Stone,
    opponent: Stone,
    weights: &ScoringWeights,
) -> f64 {
    let offense = evaluate_move_score(board, pos, ai) as f64;
    let defense = evaluate_move_score(board, pos, opponent) as f64;
    let center = center_bias(board, pos, weights.center_base(board));
    let neighbors = count_neighbors(board, pos) as f64;

    offense * weights.offense + defense * weights.defense + center + neighbors * weights.neighbor
}

/// Highest-scoring move in `moves`.
///
/// Uses a strictly-greater comparison, so among equal scores the earliest
/// move in `moves` wins.
pub fn best_scored(
    board: &mut Board,
    moves: &[Pos],
    ai: Stone,
    opponent: Stone,
    weights: &ScoringWeights,
) -> Option<Choice> {
    let mut best: Option<(Pos, f64)> = None;
    for &pos in moves {
        let score = score_candidate(board, pos, ai, opponent, weights);
        log::trace!("candidate {pos}: {score:.1}");
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    best.map(|(pos, score)| Choice {
        pos,
        search_type: SearchType::Heuristic,
        score,
        candidates: moves.len(),
    })
}
