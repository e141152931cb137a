//! Line scanning through a single cell

use crate::board::{Board, Pos, Stone};
use crate::rules::win::run_length;

/// Contiguous run through a cell along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineInfo {
    /// Stones in the run, pivot included
    pub count: usize,
    /// Empty on-board cells directly beyond each end of the run (0..=2)
    pub open_ends: u8,
}

/// Scan the axis `(dx, dy)` through `pos` for `color`.
///
/// The pivot counts as one stone whatever it holds; callers probe the
/// stone first. Walks `+dir` then `-dir`, recording whether the cell just
/// past each run is on the board and empty.
pub fn get_line_info(board: &Board, pos: Pos, (dx, dy): (i32, i32), color: Stone) -> LineInfo {
    let forward = run_length(board, pos, dx, dy, color) as i32;
    let backward = run_length(board, pos, -dx, -dy, color) as i32;

    let (x, y) = (pos.x as i32, pos.y as i32);
    let is_open = |step: i32| board.get_at(x + dx * step, y + dy * step) == Some(Stone::Empty);
    let open_ends = u8::from(is_open(forward + 1)) + u8::from(is_open(-(backward + 1)));

    LineInfo {
        count: 1 + (forward + backward) as usize,
        open_ends,
    }
}
