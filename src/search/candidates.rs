//! Candidate move generation
//!
//! Only empty cells near existing stones are worth scoring; everything
//! else is pruned.

use crate::board::{Bitboard, Board, Pos};

/// Empty cells within Chebyshev distance `radius` of any stone.
///
/// Deduplicated, in first-seen order: stones are visited row-major and
/// each neighborhood with `dy` outer and `dx` inner. The order is stable
/// for a given board and acts as the tie-break for scored strategies.
/// Empty for an empty board.
pub fn candidate_moves(board: &Board, radius: u8) -> Vec<Pos> {
    let size = board.size();
    let r = radius as i32;
    let mut seen = Bitboard::new(size * size);
    let mut moves = Vec::new();

    for stone in board.occupied() {
        for dy in -r..=r {
            for dx in -r..=r {
                let Some(pos) = board.pos_at(stone.x as i32 + dx, stone.y as i32 + dy) else {
                    continue;
                };
                let idx = pos.to_index(size);
                if board.is_empty(pos) && !seen.get(idx) {
                    seen.set(idx);
                    moves.push(pos);
                }
            }
        }
    }

    moves
}

/// Candidates at `radius`, or every empty cell (row-major) when none exist
pub fn candidate_moves_or_all(board: &Board, radius: u8) -> Vec<Pos> {
    let moves = candidate_moves(board, radius);
    if moves.is_empty() {
        board.empty_cells()
    } else {
        moves
    }
}
