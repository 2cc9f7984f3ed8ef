//! Game rules for Gomoku
//!
//! This module implements the rule-level primitives the evaluator and search
//! build on:
//! - Boundary classification (open / semi-open / closed)
//! - Sequence detection along the four axes
//! - Win conditions (five or more in a row)

pub mod boundary;
pub mod sequence;
pub mod win;

// Re-exports for convenient access
pub use boundary::{is_bounded, Boundary};
pub use sequence::{
    count_line, count_rows, detect_row, detect_rows, maximal_runs, RowCounts, SequenceRecord,
};
pub use win::{check_winner, has_five_in_row, is_win, Outcome, WIN_LENGTH};
