//! One-ply move selection
//!
//! Every empty cell is tried in row-major order: the mover's stone is placed
//! on a copy of the board and the copy is ranked. Candidates compare by, in
//! order:
//! 1. Whether the move completes five for the mover
//! 2. How many winning threats the opponent keeps (fewer is better). The
//!    opponent moves next, so an open four counts twice and a semi-open four
//!    once, whatever the mover builds elsewhere.
//! 3. The heuristic score from the mover's side
//!
//! Ties keep the earliest cell.
//!
//! The running maximum starts empty rather than at zero. When every move
//! leaves the mover behind (say, the opponent holds an open four and the
//! best we can do is block one end) all candidate scores are negative, and
//! the least-bad move must still be returned.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::search::search_max;
//!
//! let mut board = Board::new(8).unwrap();
//! board.put_seq(Pos::new(0, 0), 1, 1, 4, Stone::Black).unwrap();
//! assert_eq!(search_max(&board), Some(Pos::new(4, 4)));
//! ```

use std::cmp::Reverse;

use tracing::debug;

use crate::board::{Board, Pos, Stone};
use crate::eval::{evaluate, ScoreWeights};
use crate::rules::{has_five_in_row, maximal_runs, Boundary, WIN_LENGTH};

/// Outcome of a move search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found; `None` when the board has no empty cell
    pub best_move: Option<Pos>,
    /// Score of the position after `best_move`, from the mover's side
    pub score: i32,
    /// Number of candidate moves evaluated
    pub candidates: u32,
}

impl SearchResult {
    #[inline]
    fn no_move() -> Self {
        Self {
            best_move: None,
            score: 0,
            candidates: 0,
        }
    }
}

/// Ordering key for a candidate; larger is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Rank {
    wins: bool,
    threats: Reverse<u32>,
    value: i32,
}

/// Finishing cells the opponent still has after a move: two per open four,
/// one per semi-open four.
fn opponent_threats(board: &Board, opponent: Stone) -> u32 {
    let four = WIN_LENGTH - 1;
    maximal_runs(board, opponent, four)
        .iter()
        .filter(|run| run.length == four)
        .map(|run| match run.boundary {
            Boundary::Open => 2,
            Boundary::SemiOpen => 1,
            Boundary::Closed => 0,
        })
        .sum()
}

/// Best move for Black with the default weights.
#[must_use]
pub fn search_max(board: &Board) -> Option<Pos> {
    search_max_for(board, Stone::Black)
}

/// Best move for `color` with the default weights.
#[must_use]
pub fn search_max_for(board: &Board, color: Stone) -> Option<Pos> {
    search_max_with(board, color, &ScoreWeights::default()).best_move
}

/// Try every empty cell for `color` and keep the best-ranked one.
///
/// Returns a result with `best_move: None` on a full board, or when `color`
/// is `Stone::Empty`.
pub fn search_max_with(board: &Board, color: Stone, weights: &ScoreWeights) -> SearchResult {
    if color == Stone::Empty {
        return SearchResult::no_move();
    }

    let opponent = color.opponent();
    let mut best: Option<(Pos, Rank)> = None;
    let mut candidates = 0u32;

    for pos in board.empty_cells() {
        candidates += 1;

        let mut next = board.clone();
        next.place_stone(pos, color);
        let rank = Rank {
            wins: has_five_in_row(&next, color),
            threats: Reverse(opponent_threats(&next, opponent)),
            value: evaluate(&next, color, weights),
        };

        // Strict comparison keeps the first cell on ties
        if best.map_or(true, |(_, best_rank)| rank > best_rank) {
            best = Some((pos, rank));
        }
    }

    let result = match best {
        Some((pos, rank)) => SearchResult {
            best_move: Some(pos),
            score: rank.value,
            candidates,
        },
        None => SearchResult::no_move(),
    };

    debug!(
        ?color,
        candidates = result.candidates,
        score = result.score,
        best_move = ?result.best_move,
        "search_max finished"
    );
    result
}
