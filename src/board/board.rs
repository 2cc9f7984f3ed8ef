//! Board structure: an N x N grid backed by one bitboard per color

use std::fmt;

use super::bitboard::Bitboard;
use super::{Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
use crate::error::BoardError;

/// Game board
///
/// A cell is Black iff its bit is set in `black`, White iff set in `white`,
/// Empty otherwise. The two bitboards never overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Black stones bitboard
    black: Bitboard,
    /// White stones bitboard
    white: Bitboard,
}

impl Board {
    /// Create an empty `size x size` board.
    ///
    /// Fails with [`BoardError::InvalidSize`] when `size` is 0 or above
    /// [`MAX_BOARD_SIZE`].
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidSize {
                size,
                max: MAX_BOARD_SIZE,
            });
        }
        let cells = size * size;
        Ok(Self {
            size,
            black: Bitboard::new(cells),
            white: Bitboard::new(cells),
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn contains(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Get stone at position. Off-board positions read as Empty.
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

    /// Check if an on-board position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.contains(pos) && self.get(pos) == Stone::Empty
    }

    /// Place a stone on a position already known to be on the board.
    /// Overwrites whatever was there; `Stone::Empty` clears the cell.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(self.contains(pos));
        let idx = pos.to_index(self.size);
        self.black.clear(idx);
        self.white.clear(idx);
        match stone {
            Stone::Black => self.black.set(idx),
            Stone::White => self.white.set(idx),
            Stone::Empty => {}
        }
    }

    /// Checked single-cell write
    pub fn set(&mut self, pos: Pos, stone: Stone) -> Result<(), BoardError> {
        if !self.contains(pos) {
            return Err(self.out_of_bounds(pos.row as i64, pos.col as i64));
        }
        self.place_stone(pos, stone);
        Ok(())
    }

    /// Place `length` stones starting at `start`, stepping by `(dr, dc)`.
    ///
    /// Every target cell is checked before anything is written, so a run that
    /// would leave the board fails with [`BoardError::OutOfBounds`] and leaves
    /// the board untouched. Occupied cells are overwritten. A zero step writes
    /// `start` once.
    pub fn put_seq(
        &mut self,
        start: Pos,
        dr: i32,
        dc: i32,
        length: usize,
        stone: Stone,
    ) -> Result<(), BoardError> {
        if length == 0 {
            return Ok(());
        }
        if (dr, dc) == (0, 0) {
            return self.set(start, stone);
        }

        // A nonzero step leaves the board within `size` steps
        let mut cells = Vec::with_capacity(length.min(self.size));
        for step in (0i64..).take(length) {
            match start.offset(dr, dc, step, self.size) {
                Some(pos) => cells.push(pos),
                None => {
                    let (r, c) = start.offset_signed(dr, dc, step);
                    return Err(self.out_of_bounds(r, c));
                }
            }
        }
        for pos in cells {
            self.place_stone(pos, stone);
        }
        Ok(())
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

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        (0..size * size)
            .map(move |idx| Pos::from_index(idx, size))
            .filter(move |&pos| self.get(pos) == Stone::Empty)
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Check if every cell holds a stone
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == self.size * self.size
    }

    /// Same board with every stone recolored
    pub fn swap_colors(&self) -> Board {
        Board {
            size: self.size,
            black: self.white.clone(),
            white: self.black.clone(),
        }
    }

    /// Text rendering: one row per line, cells separated by `|`, framed by `*`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn out_of_bounds(&self, row: i64, col: i64) -> BoardError {
        BoardError::OutOfBounds {
            row,
            col,
            size: self.size,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        let cells = DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE;
        Self {
            size: DEFAULT_BOARD_SIZE,
            black: Bitboard::new(cells),
            white: Bitboard::new(cells),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Column header, e.g. "*0|1|2*"
        write!(f, "*")?;
        for col in 0..self.size {
            if col > 0 {
                write!(f, "|")?;
            }
            write!(f, "{}", col % 10)?;
        }
        writeln!(f, "*")?;

        for row in 0..self.size {
            write!(f, "{}", row % 10)?;
            for col in 0..self.size {
                if col > 0 {
                    write!(f, "|")?;
                }
                write!(f, "{}", self.get(Pos::new(row, col)).symbol())?;
            }
            writeln!(f, "*")?;
        }

        write!(f, "*")?;
        for _ in 0..self.size * 2 - 1 {
            write!(f, "*")?;
        }
        writeln!(f, "*")
    }
}

/// Free-function form of [`Board::new`]
pub fn make_empty_board(size: usize) -> Result<Board, BoardError> {
    Board::new(size)
}

/// Free-function form of [`Board::put_seq`]
pub fn put_seq_on_board(
    board: &mut Board,
    start: Pos,
    dr: i32,
    dc: i32,
    length: usize,
    stone: Stone,
) -> Result<(), BoardError> {
    board.put_seq(start, dr, dc, length, stone)
}

/// Rendered board text, as printed by the scenario runner
pub fn print_board(board: &Board) -> String {
    board.render()
}
