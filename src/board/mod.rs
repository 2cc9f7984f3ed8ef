//! Board representation for Gomoku

pub mod bitboard;
pub mod board;


// Re-exports
pub use bitboard::Bitboard;
pub use board::{make_empty_board, print_board, put_seq_on_board, Board};

/// Board size used when none is given (8x8)
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Largest board the engine accepts
pub const MAX_BOARD_SIZE: usize = 64;

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Single-character form used by the board renderer
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Stone::Black => 'b',
            Stone::White => 'w',
            Stone::Empty => ' ',
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board of the given size
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: idx / size,
            col: idx % size,
        }
    }

    /// Step `steps` times along `(dr, dc)`; `None` if the result leaves `[0, size)`.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, steps: i64, size: usize) -> Option<Pos> {
        let (r, c) = self.offset_signed(dr, dc, steps);
        if r >= 0 && c >= 0 && (r as usize) < size && (c as usize) < size {
            Some(Pos::new(r as usize, c as usize))
        } else {
            None
        }
    }

    /// Signed coordinates of `self + steps * (dr, dc)`, saturating at the
    /// `i64` range
    #[inline]
    pub fn offset_signed(self, dr: i32, dc: i32, steps: i64) -> (i64, i64) {
        (
            (self.row as i64).saturating_add(i64::from(dr).saturating_mul(steps)),
            (self.col as i64).saturating_add(i64::from(dc).saturating_mul(steps)),
        )
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four axes along which sequences are evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// (0, 1)
    Horizontal,
    /// (1, 0)
    Vertical,
    /// (1, 1)
    DiagonalDown,
    /// (1, -1)
    DiagonalUp,
}

impl Direction {
    /// All directions in scan order
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// `(d_row, d_col)` step for this axis
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (1, -1),
        }
    }
}
