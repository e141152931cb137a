//! Heuristic evaluation of single moves and whole positions
//!
//! Moves are scored one ply deep: the stone is probed onto the board, each
//! of the four axes through it is classified by [`get_line_info`] and
//! priced by [`pattern_score`], and the probe is reverted.

use crate::board::{Board, Pos, Stone, DIRECTIONS};

use super::line::get_line_info;
use super::patterns::pattern_score;

/// Score placing `color` at `pos`: the sum of the four axis pattern scores.
///
/// The board is restored before returning, so repeated calls with the same
/// inputs give the same result. Used for both offense (own color) and
/// defense (opponent's color at the same cell). Off-board and occupied
/// cells score 0.
#[must_use]
pub fn evaluate_move_score(board: &mut Board, pos: Pos, color: Stone) -> i32 {
    if color == Stone::Empty || !board.is_empty(pos) {
        return 0;
    }
    let probe = board.probe(pos, color);
    DIRECTIONS
        .iter()
        .map(|&dir| {
            let info = get_line_info(&probe, pos, dir, color);
            pattern_score(info.count, info.open_ends)
        })
        .sum()
}

/// Number of occupied cells among the 8 neighbors of `pos`
#[must_use]
pub fn count_neighbors(board: &Board, pos: Pos) -> u32 {
    let (x, y) = (pos.x as i32, pos.y as i32);
    let mut count = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            if matches!(board.get_at(x + dx, y + dy), Some(s) if s != Stone::Empty) {
                count += 1;
            }
        }
    }
    count
}

/// Manhattan distance from the geometric center of the board.
///
/// The center is `N / 2` in floating point, so on even-indexed boards (N=15)
/// no cell sits exactly on it.
#[must_use]
pub fn center_distance(board: &Board, pos: Pos) -> f64 {
    let half = board.size() as f64 / 2.0;
    (pos.x as f64 - half).abs() + (pos.y as f64 - half).abs()
}

/// Center bias: `base - (|x - N/2| + |y - N/2|)`
#[must_use]
pub fn center_bias(board: &Board, pos: Pos, base: f64) -> f64 {
    base - center_distance(board, pos)
}

/// Evaluate the stones already on the board for `color`.
///
/// Sums the pattern score of every axis through every `color` stone. A run
/// is counted once per stone it contains, so long shapes weigh more than
/// the single-move table suggests.
#[must_use]
pub fn evaluate_board(board: &Board, color: Stone) -> i32 {
    board
        .positions(color)
        .flat_map(|pos| DIRECTIONS.iter().map(move |&dir| (pos, dir)))
        .map(|(pos, dir)| {
            let info = get_line_info(board, pos, dir, color);
            pattern_score(info.count, info.open_ends)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::patterns::PatternScore;

    #[test]
    fn test_isolated_move_scores_open_ones() {
        let mut board = Board::new();
        let score = evaluate_move_score(&mut board, Pos::new(7, 7), Stone::Black);
        assert_eq!(score, 4 * PatternScore::OPEN_ONE);
        assert!(board.is_board_empty());
    }

    #[test]
    fn test_move_score_is_pure() {
        let mut board = Board::new();
        for x in 5..8 {
            board.place_stone(Pos::new(x, 7), Stone::Black);
        }
        board.place_stone(Pos::new(6, 8), Stone::White);
        let before = board.clone();

        let first = evaluate_move_score(&mut board, Pos::new(8, 7), Stone::Black);
        let second = evaluate_move_score(&mut board, Pos::new(8, 7), Stone::Black);
        assert_eq!(first, second);
        assert_eq!(board, before);
    }

    #[test]
    fn test_off_board_and_occupied_cells_score_zero() {
        let mut board = Board::new();
        board.place_stone(Pos::new(5, 1), Stone::White);
        let before = board.clone();

        // (20, 0) would alias (5, 1) in a row-major index on a 15-wide board
        assert_eq!(evaluate_move_score(&mut board, Pos::new(20, 0), Stone::Black), 0);
        assert_eq!(evaluate_move_score(&mut board, Pos::new(5, 1), Stone::Black), 0);
        assert_eq!(board, before);
        assert_eq!(board.get(Pos::new(5, 1)), Stone::White);
    }

    #[test]
    fn test_extending_three_to_open_four() {
        let mut board = Board::new();
        for x in 5..8 {
            board.place_stone(Pos::new(x, 7), Stone::Black);
        }
        // Horizontal four (open both ends) + three lone open axes
        let score = evaluate_move_score(&mut board, Pos::new(8, 7), Stone::Black);
        assert_eq!(score, PatternScore::FOUR + 3 * PatternScore::OPEN_ONE);
    }

    #[test]
    fn test_defense_sees_opponent_threat() {
        let mut board = Board::new();
        for x in 5..8 {
            board.place_stone(Pos::new(x, 7), Stone::White);
        }
        let block = evaluate_move_score(&mut board, Pos::new(8, 7), Stone::White);
        let elsewhere = evaluate_move_score(&mut board, Pos::new(0, 0), Stone::White);
        assert!(block > elsewhere);
    }

    #[test]
    fn test_count_neighbors() {
        let mut board = Board::new();
        assert_eq!(count_neighbors(&board, Pos::new(7, 7)), 0);

        board.place_stone(Pos::new(6, 6), Stone::Black);
        board.place_stone(Pos::new(8, 7), Stone::White);
        board.place_stone(Pos::new(7, 9), Stone::White); // two away, not a neighbor
        assert_eq!(count_neighbors(&board, Pos::new(7, 7)), 2);

        // Corner: only three neighbors exist
        board.place_stone(Pos::new(1, 0), Stone::Black);
        board.place_stone(Pos::new(0, 1), Stone::Black);
        board.place_stone(Pos::new(1, 1), Stone::Black);
        assert_eq!(count_neighbors(&board, Pos::new(0, 0)), 3);
    }

    #[test]
    fn test_center_bias() {
        let board = Board::new();
        // |7 - 7.5| + |7 - 7.5| = 1
        assert_eq!(center_distance(&board, Pos::new(7, 7)), 1.0);
        assert_eq!(center_bias(&board, Pos::new(7, 7), 12.0), 11.0);
        assert_eq!(center_bias(&board, Pos::new(0, 0), 12.0), -3.0);
        assert_eq!(center_bias(&board, Pos::new(8, 8), 15.0), 14.0);
    }

    #[test]
    fn test_evaluate_board() {
        let mut board = Board::new();
        assert_eq!(evaluate_board(&board, Stone::Black), 0);

        board.place_stone(Pos::new(7, 7), Stone::Black);
        assert_eq!(evaluate_board(&board, Stone::Black), 4 * PatternScore::OPEN_ONE);
        assert_eq!(evaluate_board(&board, Stone::White), 0);

        board.place_stone(Pos::new(8, 7), Stone::Black);
        // Each stone sees an open two horizontally and three open ones
        assert_eq!(
            evaluate_board(&board, Stone::Black),
            2 * (PatternScore::OPEN_TWO + 3 * PatternScore::OPEN_ONE)
        );
    }
}
