//! Boundary classification of a sequence's two end cells
//!
//! A sequence of `length` stones ending at `end` along `(dr, dc)` has two
//! neighbors: one step before its first stone and one step after `end`.
//! A neighbor counts as open only when it is on the board and empty.

use std::fmt;

use crate::board::{Board, Pos, Stone};
use crate::error::BoardError;

/// Openness of a sequence's two neighbors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Both neighbors empty and on-board
    Open,
    /// Exactly one neighbor open
    SemiOpen,
    /// Both neighbors occupied or off-board
    Closed,
}

impl Boundary {
    #[inline]
    fn from_open_ends(open_ends: u8) -> Self {
        match open_ends {
            2 => Boundary::Open,
            1 => Boundary::SemiOpen,
            _ => Boundary::Closed,
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Boundary::Open => "OPEN",
            Boundary::SemiOpen => "SEMIOPEN",
            Boundary::Closed => "CLOSED",
        };
        f.write_str(s)
    }
}

/// Classify the sequence of `length` stones ending at `end` along `(dr, dc)`.
///
/// Fails with [`BoardError::OutOfBounds`] if `end` or the sequence's first
/// stone is off the board, and [`BoardError::InvalidLength`] for `length == 0`.
pub fn is_bounded(
    board: &Board,
    end: Pos,
    length: usize,
    dr: i32,
    dc: i32,
) -> Result<Boundary, BoardError> {
    if length == 0 {
        return Err(BoardError::InvalidLength);
    }
    let size = board.size();
    if end.offset(0, 0, 0, size).is_none() {
        return Err(BoardError::OutOfBounds {
            row: end.row as i64,
            col: end.col as i64,
            size,
        });
    }
    let back = i64::try_from(length - 1).unwrap_or(i64::MAX);
    if end.offset(dr, dc, -back, size).is_none() {
        let (row, col) = end.offset_signed(dr, dc, -back);
        return Err(BoardError::OutOfBounds { row, col, size });
    }

    let before = end.offset(dr, dc, -(back.saturating_add(1)), size);
    let after = end.offset(dr, dc, 1, size);
    Ok(classify(board, before, after))
}

/// Count open neighbors among two optional cells (`None` = off-board).
#[inline]
pub(crate) fn classify(board: &Board, before: Option<Pos>, after: Option<Pos>) -> Boundary {
    let is_open = |cell: Option<Pos>| cell.is_some_and(|p| board.get(p) == Stone::Empty);
    let open_ends = u8::from(is_open(before)) + u8::from(is_open(after));
    Boundary::from_open_ends(open_ends)
}
