//! Search module for Gomoku AI
//!
//! Contains the one-ply `search_max` move selector.

pub mod max;

pub use max::{search_max, search_max_for, search_max_with, SearchResult};
