//! Main AI Engine wrapping the move selector
//!
//! The engine holds a validated configuration (which color it plays and the
//! pattern weights) and reports each move with basic statistics.
//!
//! # Example
//!
//! ```
//! use gomoku::{Board, Engine, Pos, SearchType, Stone};
//!
//! let engine = Engine::new();
//! let mut board = Board::new(8).unwrap();
//! board.put_seq(Pos::new(3, 1), 0, 1, 4, Stone::White).unwrap();
//!
//! let result = engine.get_move_with_stats(&board);
//! assert_eq!(result.best_move, Some(Pos::new(3, 0)));
//! assert_eq!(result.search_type, SearchType::Heuristic);
//! ```

use std::time::Instant;

use tracing::info;

use crate::board::{Board, Pos, Stone};
use crate::error::ConfigError;
use crate::eval::ScoreWeights;
use crate::rules::has_five_in_row;
use crate::search::search_max_with;

/// How the engine arrived at its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// The chosen move completes five in a row
    ImmediateWin,
    /// Best heuristic score
    Heuristic,
    /// Board is full
    NoMove,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Evaluation of the position after the move, from the engine's side
    pub score: i32,
    pub search_type: SearchType,
    /// Candidate moves evaluated
    pub candidates: u32,
    /// Time taken in microseconds
    pub time_us: u64,
}

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Color the engine moves for
    pub color: Stone,
    pub weights: ScoreWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            color: Stone::Black,
            weights: ScoreWeights::default(),
        }
    }
}

impl EngineConfig {
    /// Reject an empty color or a weight table that breaks the scoring order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.color == Stone::Empty {
            return Err(ConfigError::InvalidColor);
        }
        self.weights.validate()
    }
}

/// Gomoku move selector with a fixed color and weight table.
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Engine playing Black with the default weights.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Engine with a custom configuration.
    ///
    /// ```
    /// use gomoku::{Engine, EngineConfig, Stone};
    ///
    /// let config = EngineConfig { color: Stone::White, ..EngineConfig::default() };
    /// let engine = Engine::with_config(config).unwrap();
    /// assert_eq!(engine.color(), Stone::White);
    /// ```
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn color(&self) -> Stone {
        self.config.color
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Best move for the engine's color, or `None` on a full board.
    #[must_use]
    pub fn get_move(&self, board: &Board) -> Option<Pos> {
        self.get_move_with_stats(board).best_move
    }

    /// Best move with search statistics.
    #[must_use]
    pub fn get_move_with_stats(&self, board: &Board) -> MoveResult {
        let start = Instant::now();
        let color = self.config.color;
        let result = search_max_with(board, color, &self.config.weights);

        let search_type = match result.best_move {
            None => SearchType::NoMove,
            Some(pos) if self.completes_five(board, pos) => SearchType::ImmediateWin,
            Some(_) => SearchType::Heuristic,
        };
        let time_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);

        info!(
            ?color,
            best_move = ?result.best_move,
            score = result.score,
            ?search_type,
            candidates = result.candidates,
            time_us,
            "engine move"
        );

        MoveResult {
            best_move: result.best_move,
            score: result.score,
            search_type,
            candidates: result.candidates,
            time_us,
        }
    }

    /// Whether playing `pos` gives the engine five in a row
    fn completes_five(&self, board: &Board, pos: Pos) -> bool {
        let color = self.config.color;
        if has_five_in_row(board, color) {
            return false;
        }
        let mut next = board.clone();
        next.place_stone(pos, color);
        has_five_in_row(&next, color)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_immediate_win() {
        let engine = Engine::new();
        let mut board = Board::new(8).unwrap();
        board.put_seq(Pos::new(0, 0), 1, 1, 4, Stone::Black).unwrap();

        let result = engine.get_move_with_stats(&board);
        assert_eq!(result.best_move, Some(Pos::new(4, 4)));
        assert_eq!(result.search_type, SearchType::ImmediateWin);
        assert_eq!(result.candidates, 60);
    }

    #[test]
    fn test_engine_full_board() {
        let engine = Engine::new();
        let mut board = Board::new(2).unwrap();
        board.put_seq(Pos::new(0, 0), 0, 1, 2, Stone::Black).unwrap();
        board.put_seq(Pos::new(1, 0), 0, 1, 2, Stone::White).unwrap();

        let result = engine.get_move_with_stats(&board);
        assert_eq!(result.best_move, None);
        assert_eq!(result.search_type, SearchType::NoMove);
        assert_eq!(engine.get_move(&board), None);
    }

    #[test]
    fn test_engine_white_blocks() {
        let config = EngineConfig {
            color: Stone::White,
            ..EngineConfig::default()
        };
        let engine = Engine::with_config(config).unwrap();
        let mut board = Board::new(8).unwrap();
        board.put_seq(Pos::new(6, 2), 0, 1, 4, Stone::Black).unwrap();

        let result = engine.get_move_with_stats(&board);
        assert_eq!(result.best_move, Some(Pos::new(6, 1)));
        assert!(result.score < 0);
        assert_eq!(result.search_type, SearchType::Heuristic);
    }

    #[test]
    fn test_config_rejects_empty_color() {
        let config = EngineConfig {
            color: Stone::Empty,
            ..EngineConfig::default()
        };
        assert_eq!(
            Engine::with_config(config).err(),
            Some(ConfigError::InvalidColor)
        );
    }

    #[test]
    fn test_config_rejects_bad_weights() {
        let mut config = EngineConfig::default();
        config.weights.two = [1, 10, 50];
        assert!(matches!(
            Engine::with_config(config),
            Err(ConfigError::InvalidWeights(_))
        ));
    }
}
