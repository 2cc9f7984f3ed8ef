//! Win condition checking
//!
//! Five or more stones in a row wins; overlines count. A board where both
//! colors hold a five cannot arise in play, but it is reported as a Black win
//! so the answer stays deterministic.

use std::fmt;

use crate::board::{Board, Stone};

use super::sequence::detect_rows;

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Game state as seen by the harness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    BlackWon,
    WhiteWon,
    /// Board full, nobody has five
    Draw,
    ContinuePlaying,
}

impl Outcome {
    /// True once the game can no longer continue
    pub fn is_over(self) -> bool {
        self != Outcome::ContinuePlaying
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::BlackWon => "Black won",
            Outcome::WhiteWon => "White won",
            Outcome::Draw => "Draw",
            Outcome::ContinuePlaying => "Continue playing",
        };
        f.write_str(s)
    }
}

/// Check if there's 5+ in a row for the given color
pub fn has_five_in_row(board: &Board, stone: Stone) -> bool {
    !detect_rows(board, stone, WIN_LENGTH).is_empty()
}

/// Check for a winner
///
/// Returns `Some(Stone)` if there's a winner, `None` otherwise.
/// Black is checked first.
pub fn check_winner(board: &Board) -> Option<Stone> {
    [Stone::Black, Stone::White]
        .into_iter()
        .find(|&stone| has_five_in_row(board, stone))
}

/// Classify the board: a win for either color, a draw on a full board, or
/// a game still in progress.
pub fn is_win(board: &Board) -> Outcome {
    match check_winner(board) {
        Some(Stone::Black) => Outcome::BlackWon,
        Some(_) => Outcome::WhiteWon,
        None if board.is_full() => Outcome::Draw,
        None => Outcome::ContinuePlaying,
    }
}
