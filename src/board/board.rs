//! Board structure with checked placement and speculative probes

use std::fmt;
use std::ops::Deref;

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::GameError;

/// Game board: one bitboard per color over an N×N grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Black stones bitboard
    black: Bitboard,
    /// White stones bitboard
    white: Bitboard,
}

impl Board {
    /// Standard 15x15 board
    pub fn new() -> Self {
        Self::empty(BOARD_SIZE)
    }

    /// Board of a custom size, validated to `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`
    pub fn with_size(size: usize) -> Result<Self, GameError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GameError::InvalidBoardSize(size));
        }
        Ok(Self::empty(size))
    }

    fn empty(size: usize) -> Self {
        Self {
            size,
            black: Bitboard::new(size * size),
            white: Bitboard::new(size * size),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// True iff `0 <= x < N` and `0 <= y < N`
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        let n = self.size as i32;
        x >= 0 && x < n && y >= 0 && y < n
    }

    /// Convert signed coordinates to a position if they lie on the board
    #[inline]
    pub fn pos_at(&self, x: i32, y: i32) -> Option<Pos> {
        self.in_bounds(x, y).then(|| Pos::new(x as u8, y as u8))
    }

    /// Center cell, `(⌊N/2⌋, ⌊N/2⌋)`
    #[inline]
    pub fn center(&self) -> Pos {
        let c = (self.size / 2) as u8;
        Pos::new(c, c)
    }

    #[inline]
    fn contains(&self, pos: Pos) -> bool {
        (pos.x as usize) < self.size && (pos.y as usize) < self.size
    }

    /// Get stone at position (`Empty` for off-board positions)
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if !self.contains(pos) {
            return Stone::Empty;
        }
        let idx = pos.to_index(self.size);
        if self.black.get(idx) {
            Stone::Black
        } else if self.white.get(idx) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Stone at signed coordinates, `None` when off the board
    #[inline]
    pub fn get_at(&self, x: i32, y: i32) -> Option<Stone> {
        self.pos_at(x, y).map(|pos| self.get(pos))
    }

    /// Check if position is on the board and empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.contains(pos) && self.get(pos) == Stone::Empty
    }

    /// Place a stone after validating the target cell.
    ///
    /// Rejects off-board cells, occupied cells and `Stone::Empty`; the board
    /// is left untouched on error.
    pub fn place(&mut self, pos: Pos, stone: Stone) -> Result<(), GameError> {
        if !self.contains(pos) {
            return Err(GameError::OutOfBounds {
                x: pos.x as i32,
                y: pos.y as i32,
                size: self.size,
            });
        }
        if stone == Stone::Empty {
            return Err(GameError::EmptyStone);
        }
        if self.get(pos) != Stone::Empty {
            return Err(GameError::Occupied { x: pos.x, y: pos.y });
        }
        self.place_stone(pos, stone);
        Ok(())
    }

    /// Place a stone without the occupancy check; off-board cells are ignored.
    /// Use `place` for game moves.
    #[inline]
    pub(crate) fn place_stone(&mut self, pos: Pos, stone: Stone) {
        if !self.contains(pos) {
            return;
        }
        let idx = pos.to_index(self.size);
        match stone {
            Stone::Black => {
                self.white.clear(idx);
                self.black.set(idx);
            }
            Stone::White => {
                self.black.clear(idx);
                self.white.set(idx);
            }
            Stone::Empty => self.remove_stone(pos),
        }
    }

    /// Remove a stone; off-board cells are ignored
    #[inline]
    pub(crate) fn remove_stone(&mut self, pos: Pos) {
        if !self.contains(pos) {
            return;
        }
        let idx = pos.to_index(self.size);
        self.black.clear(idx);
        self.white.clear(idx);
    }

    /// Speculatively place `stone` at `pos`.
    ///
    /// The returned guard derefs to the board and restores the previous
    /// content of the cell when dropped. Off-board cells leave the board
    /// untouched.
    pub(crate) fn probe(&mut self, pos: Pos, stone: Stone) -> Probe<'_> {
        let previous = self.get(pos);
        self.place_stone(pos, stone);
        Probe {
            board: self,
            pos,
            previous,
        }
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// Positions holding `stone`, row-major
    pub fn positions(&self, stone: Stone) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        self.stones(stone)
            .into_iter()
            .flat_map(|bb| bb.iter_ones())
            .map(move |idx| Pos::from_index(idx, size))
    }

    /// Occupied positions of either color, row-major
    pub fn occupied(&self) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        (0..size * size)
            .filter(|&idx| self.black.get(idx) || self.white.get(idx))
            .map(move |idx| Pos::from_index(idx, size))
    }

    /// Empty positions, row-major (`y` outer, `x` inner)
    pub fn empty_cells(&self) -> Vec<Pos> {
        let size = self.size;
        (0..size * size)
            .filter(|&idx| !self.black.get(idx) && !self.white.get(idx))
            .map(|idx| Pos::from_index(idx, size))
            .collect()
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board has no stones
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == self.size * self.size
    }

    /// Build a board from text rows: `X` black, `O` white, anything else empty
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::empty(rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let stone = match ch {
                    'X' => Stone::Black,
                    'O' => Stone::White,
                    _ => continue,
                };
                board.place_stone(Pos::new(x as u8, y as u8), stone);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// `X` black, `O` white, `.` empty; one line per row
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                let ch = match self.get(Pos::new(x as u8, y as u8)) {
                    Stone::Black => 'X',
                    Stone::White => 'O',
                    Stone::Empty => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Scoped speculative placement created by [`Board::probe`]
pub struct Probe<'a> {
    board: &'a mut Board,
    pos: Pos,
    previous: Stone,
}

impl Deref for Probe<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.board.place_stone(self.pos, self.previous);
    }
}
