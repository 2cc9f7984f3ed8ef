//! Gomoku move engine for square boards
//!
//! A small Gomoku engine for boards from 1x1 up to 64x64:
//! - Five or more in a row wins (overlines count)
//! - No captures, no forbidden moves
//! - One-ply move selection over a pattern heuristic
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Run boundaries, sequence detection, and win detection
//! - [`eval`]: Pattern weights and position scoring
//! - [`search`]: The `search_max` move selector
//! - [`engine`]: Configured engine reporting moves with statistics
//! - [`error`]: Error types
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{is_win, score, Board, Engine, Outcome, Pos, Stone};
//!
//! let mut board = Board::new(8).unwrap();
//! board.put_seq(Pos::new(0, 0), 1, 1, 4, Stone::Black).unwrap();
//! assert!(score(&board) > 0);
//!
//! // Black completes the diagonal
//! let engine = Engine::new();
//! let pos = engine.get_move(&board).unwrap();
//! board.place_stone(pos, Stone::Black);
//! assert_eq!(is_win(&board), Outcome::BlackWon);
//! ```
//!
//! # Scoring
//!
//! Scores are from Black's point of view. A completed five is worth
//! exactly `ScoreWeights::five`; every other position stays strictly
//! inside that bound.

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{
    make_empty_board, print_board, put_seq_on_board, Board, Direction, Pos, Stone,
    DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE,
};
pub use engine::{Engine, EngineConfig, MoveResult, SearchType};
pub use error::{BoardError, ConfigError};
pub use eval::{evaluate, score, score_with, PatternScore, ScoreWeights};
pub use rules::{
    count_line, count_rows, detect_row, detect_rows, is_bounded, is_win, Boundary, Outcome,
    RowCounts, SequenceRecord, WIN_LENGTH,
};
pub use search::{search_max, search_max_for, search_max_with, SearchResult};
