use super::*;
use crate::error::GameError;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center
    assert_eq!(pos.to_index(BOARD_SIZE), 7 * 15 + 7);
    assert_eq!(pos.to_index(BOARD_SIZE), 112);

    let pos2 = Pos::from_index(112, BOARD_SIZE);
    assert_eq!(pos2, Pos::new(7, 7));

    // x is the column, y the row
    assert_eq!(Pos::from_index(16, BOARD_SIZE), Pos::new(1, 1));
    assert_eq!(Pos::from_index(14, BOARD_SIZE), Pos::new(14, 0));
}

#[test]
fn test_pos_ordering_is_row_major() {
    let a = Pos::new(0, 0);
    let b = Pos::new(14, 0);
    let c = Pos::new(0, 1);

    assert!(a < b);
    assert!(b < c);
    assert!(a < c);
}

#[test]
fn test_chebyshev_distance() {
    let p = Pos::new(5, 5);
    assert_eq!(p.chebyshev(p), 0);
    assert_eq!(p.chebyshev(Pos::new(6, 6)), 1);
    assert_eq!(p.chebyshev(Pos::new(7, 4)), 2);
    assert_eq!(p.chebyshev(Pos::new(5, 0)), 5);
}

#[test]
fn test_in_bounds() {
    let board = Board::new();
    assert!(board.in_bounds(0, 0));
    assert!(board.in_bounds(14, 14));
    assert!(board.in_bounds(7, 7));
    assert!(!board.in_bounds(-1, 0));
    assert!(!board.in_bounds(0, -1));
    assert!(!board.in_bounds(15, 0));
    assert!(!board.in_bounds(0, 15));
}

#[test]
fn test_board_size_validation() {
    assert_eq!(Board::new().size(), 15);
    assert_eq!(Board::with_size(9).map(|b| b.size()), Ok(9));
    assert_eq!(Board::with_size(4), Err(GameError::InvalidBoardSize(4)));
    assert_eq!(Board::with_size(26), Err(GameError::InvalidBoardSize(26)));
}

#[test]
fn test_center() {
    assert_eq!(Board::new().center(), Pos::new(7, 7));
    assert_eq!(Board::with_size(10).unwrap().center(), Pos::new(5, 5));
}

#[test]
fn test_place_rejects_occupied() {
    let mut board = Board::new();
    let pos = Pos::new(3, 4);
    board.place(pos, Stone::Black).unwrap();

    let before = board.clone();
    assert_eq!(
        board.place(pos, Stone::White),
        Err(GameError::Occupied { x: 3, y: 4 })
    );
    assert_eq!(board, before);
    assert_eq!(board.get(pos), Stone::Black);
}

#[test]
fn test_place_rejects_out_of_bounds() {
    let mut board = Board::with_size(9).unwrap();
    assert_eq!(
        board.place(Pos::new(9, 0), Stone::Black),
        Err(GameError::OutOfBounds { x: 9, y: 0, size: 9 })
    );
    assert!(board.is_board_empty());
}

#[test]
fn test_place_rejects_empty_stone() {
    let mut board = Board::new();
    assert_eq!(
        board.place(Pos::new(0, 0), Stone::Empty),
        Err(GameError::EmptyStone)
    );
}

#[test]
fn test_probe_restores_board() {
    let mut board = Board::new();
    board.place_stone(Pos::new(1, 1), Stone::White);
    let before = board.clone();

    {
        let probe = board.probe(Pos::new(2, 2), Stone::Black);
        assert_eq!(probe.get(Pos::new(2, 2)), Stone::Black);
        assert_eq!(probe.stone_count(), 2);
    }

    assert_eq!(board, before);
}

#[test]
fn test_probe_over_occupied_cell_restores_previous() {
    let mut board = Board::new();
    let pos = Pos::new(4, 4);
    board.place_stone(pos, Stone::White);

    {
        let probe = board.probe(pos, Stone::Black);
        assert_eq!(probe.get(pos), Stone::Black);
    }

    assert_eq!(board.get(pos), Stone::White);
}

#[test]
fn test_off_board_primitives_leave_board_untouched() {
    let mut board = Board::new();
    board.place_stone(Pos::new(5, 1), Stone::White);
    let before = board.clone();

    board.place_stone(Pos::new(20, 0), Stone::Black);
    board.remove_stone(Pos::new(20, 0));
    {
        let probe = board.probe(Pos::new(20, 0), Stone::Black);
        assert_eq!(probe.stone_count(), 1);
    }

    assert_eq!(board, before);
}

#[test]
fn test_empty_cells_and_full() {
    let mut board = Board::with_size(5).unwrap();
    assert_eq!(board.empty_cells().len(), 25);
    assert_eq!(board.empty_cells()[0], Pos::new(0, 0));
    assert_eq!(board.empty_cells()[1], Pos::new(1, 0));

    for pos in board.empty_cells() {
        board.place_stone(pos, Stone::Black);
    }
    assert!(board.is_full());
    assert!(board.empty_cells().is_empty());
}

#[test]
fn test_occupied_row_major() {
    let mut board = Board::new();
    board.place_stone(Pos::new(9, 3), Stone::White);
    board.place_stone(Pos::new(2, 8), Stone::Black);
    board.place_stone(Pos::new(1, 3), Stone::Black);

    let occupied: Vec<Pos> = board.occupied().collect();
    assert_eq!(
        occupied,
        vec![Pos::new(1, 3), Pos::new(9, 3), Pos::new(2, 8)]
    );

    let black: Vec<Pos> = board.positions(Stone::Black).collect();
    assert_eq!(black, vec![Pos::new(1, 3), Pos::new(2, 8)]);
    assert_eq!(board.positions(Stone::Empty).count(), 0);
}

#[test]
fn test_display() {
    let board = Board::from_rows(&["X....", ".O...", ".....", ".....", "....X"]);
    assert_eq!(
        board.to_string(),
        "X....\n.O...\n.....\n.....\n....X\n"
    );
}
