//! Win condition checking
//!
//! A game is won by five or more stones of one color in a contiguous line
//! (horizontal, vertical or diagonal). Overlines count as wins.

use crate::board::{Board, Pos, Stone, DIRECTIONS};

/// Number of stones in a row required to win
pub const WIN_LENGTH: usize = 5;

/// Count consecutive `color` stones starting one step from `pos` along `(dx, dy)`.
/// The cell at `pos` itself is not inspected.
#[inline]
pub(crate) fn run_length(board: &Board, pos: Pos, dx: i32, dy: i32, color: Stone) -> usize {
    let mut count = 0;
    let mut x = pos.x as i32 + dx;
    let mut y = pos.y as i32 + dy;
    while board.get_at(x, y) == Some(color) {
        count += 1;
        x += dx;
        y += dy;
    }
    count
}

/// Five-in-a-row check through a just-placed stone.
///
/// Counts the pivot plus consecutive `color` stones on both sides for each
/// of the four axes. No allocation.
#[inline]
pub fn check_win(board: &Board, pos: Pos, color: Stone) -> bool {
    if color == Stone::Empty {
        return false;
    }
    DIRECTIONS.iter().any(|&(dx, dy)| {
        1 + run_length(board, pos, dx, dy, color) + run_length(board, pos, -dx, -dy, color)
            >= WIN_LENGTH
    })
}

/// Find the winning line through `pos`, if any.
///
/// Returns every stone of the contiguous run (at least five), ordered from
/// the negative end of the axis to the positive end.
pub fn find_winning_line(board: &Board, pos: Pos, color: Stone) -> Option<Vec<Pos>> {
    if color == Stone::Empty || board.get(pos) != color {
        return None;
    }

    for &(dx, dy) in &DIRECTIONS {
        let back = run_length(board, pos, -dx, -dy, color) as i32;
        let forward = run_length(board, pos, dx, dy, color) as i32;
        if (back + forward + 1) as usize >= WIN_LENGTH {
            let line = (-back..=forward)
                .filter_map(|i| board.pos_at(pos.x as i32 + dx * i, pos.y as i32 + dy * i))
                .collect();
            return Some(line);
        }
    }
    None
}

/// Find a cell where `color` would complete five in a row.
///
/// Probes every empty cell in row-major order (`y` outer, `x` inner) and
/// returns the first hit, so the scan order is the tie-break. The board is
/// unchanged on return.
pub fn find_immediate_win(board: &mut Board, color: Stone) -> Option<Pos> {
    if color == Stone::Empty {
        return None;
    }
    board.empty_cells().into_iter().find(|&pos| {
        let probe = board.probe(pos, color);
        check_win(&probe, pos, color)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        for x in 0..5 {
            board.place_stone(Pos::new(x, 9), Stone::Black);
        }
        assert!(check_win(&board, Pos::new(4, 9), Stone::Black));
        assert!(check_win(&board, Pos::new(2, 9), Stone::Black));
        assert!(!check_win(&board, Pos::new(2, 9), Stone::White));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new();
        for y in 0..5 {
            board.place_stone(Pos::new(9, y), Stone::Black);
        }
        assert!(check_win(&board, Pos::new(9, 0), Stone::Black));
    }

    #[test]
    fn test_five_in_row_diagonal_down() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(i, i), Stone::White);
        }
        assert!(check_win(&board, Pos::new(2, 2), Stone::White));
    }

    #[test]
    fn test_five_in_row_diagonal_up() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(4 + i, 8 - i), Stone::White);
        }
        assert!(check_win(&board, Pos::new(6, 6), Stone::White));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let mut board = Board::new();
        for x in 0..6 {
            board.place_stone(Pos::new(x, 9), Stone::Black);
        }
        assert!(check_win(&board, Pos::new(5, 9), Stone::Black));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = Board::new();
        for x in 0..4 {
            board.place_stone(Pos::new(x, 9), Stone::Black);
        }
        assert!(!check_win(&board, Pos::new(3, 9), Stone::Black));
    }

    #[test]
    fn test_gap_breaks_line() {
        let mut board = Board::new();
        for x in [0, 1, 2, 4, 5] {
            board.place_stone(Pos::new(x, 0), Stone::Black);
        }
        assert!(!check_win(&board, Pos::new(2, 0), Stone::Black));
        assert!(!check_win(&board, Pos::new(4, 0), Stone::Black));
    }

    #[test]
    fn test_unrelated_stone_does_not_report_win() {
        let mut board = Board::new();
        for x in 3..8 {
            board.place_stone(Pos::new(x, 5), Stone::Black);
        }
        assert!(check_win(&board, Pos::new(7, 5), Stone::Black));

        // Sixth stone of the same color, not touching the five
        let far = Pos::new(12, 12);
        board.place_stone(far, Stone::Black);
        assert!(!check_win(&board, far, Stone::Black));
    }

    #[test]
    fn test_five_at_board_edge_and_corner() {
        let mut board = Board::new();
        for x in 0..5 {
            board.place_stone(Pos::new(x, 14), Stone::Black);
        }
        assert!(check_win(&board, Pos::new(0, 14), Stone::Black));

        let mut board = Board::new();
        for i in 10..15 {
            board.place_stone(Pos::new(i, i), Stone::White);
        }
        assert!(check_win(&board, Pos::new(14, 14), Stone::White));
    }

    #[test]
    fn test_run_length_is_symmetric_per_axis() {
        let board = Board::from_rows(&[
            ".......",
            ".X.....",
            "..X....",
            "...X...",
            "....X..",
            ".......",
            ".......",
        ]);
        let pivot = Pos::new(3, 3);
        for &(dx, dy) in &DIRECTIONS {
            let total = run_length(&board, pivot, dx, dy, Stone::Black)
                + run_length(&board, pivot, -dx, -dy, Stone::Black);
            let flipped = run_length(&board, pivot, -dx, -dy, Stone::Black)
                + run_length(&board, pivot, dx, dy, Stone::Black);
            assert_eq!(total, flipped);
        }
        assert_eq!(run_length(&board, pivot, 1, 1, Stone::Black), 1);
        assert_eq!(run_length(&board, pivot, -1, -1, Stone::Black), 2);
    }

    #[test]
    fn test_find_winning_line() {
        let mut board = Board::new();
        for x in 5..10 {
            board.place_stone(Pos::new(x, 9), Stone::Black);
        }
        let line = find_winning_line(&board, Pos::new(7, 9), Stone::Black).unwrap();
        assert_eq!(line.len(), 5);
        assert_eq!(line[0], Pos::new(5, 9));
        assert_eq!(line[4], Pos::new(9, 9));

        assert!(find_winning_line(&board, Pos::new(7, 9), Stone::White).is_none());
        assert!(find_winning_line(&board, Pos::new(0, 0), Stone::Black).is_none());
    }

    #[test]
    fn test_find_immediate_win_completes_four() {
        let mut board = Board::new();
        for x in 3..7 {
            board.place_stone(Pos::new(x, 7), Stone::Black);
        }
        let before = board.clone();

        // Both ends complete the five; row-major scan finds (2, 7) first
        assert_eq!(find_immediate_win(&mut board, Stone::Black), Some(Pos::new(2, 7)));
        assert_eq!(find_immediate_win(&mut board, Stone::White), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_find_immediate_win_row_major_tie_break() {
        let mut board = Board::new();
        // Vertical four at x=10 (rows 1..=4) blocked above: only (10, 5) wins
        board.place_stone(Pos::new(10, 0), Stone::White);
        for y in 1..5 {
            board.place_stone(Pos::new(10, y), Stone::Black);
        }
        // Horizontal four on row 12: (0,12) and (5,12) win
        for x in 1..5 {
            board.place_stone(Pos::new(x, 12), Stone::Black);
        }
        assert_eq!(find_immediate_win(&mut board, Stone::Black), Some(Pos::new(10, 5)));
    }

    #[test]
    fn test_find_immediate_win_fills_gap() {
        let mut board = Board::new();
        for x in [2, 3, 5, 6] {
            board.place_stone(Pos::new(x, 0), Stone::White);
        }
        assert_eq!(find_immediate_win(&mut board, Stone::White), Some(Pos::new(4, 0)));
    }

    #[test]
    fn test_empty_stone_never_wins() {
        let mut board = Board::new();
        assert!(!check_win(&board, Pos::new(0, 0), Stone::Empty));
        assert_eq!(find_immediate_win(&mut board, Stone::Empty), None);
    }
}
