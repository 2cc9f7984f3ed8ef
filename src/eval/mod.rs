//! Evaluation module for Gomoku positions
//!
//! This module provides pattern weights and scoring for board positions.
//! The evaluation considers:
//! - Completed fives (decisive)
//! - Fours, threes and twos, weighted by how open their ends are

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, score, score_with};
pub use patterns::{PatternScore, ScoreWeights};
