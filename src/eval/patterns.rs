//! Pattern scores for Gomoku evaluation
//!
//! Weights are indexed by run length (2, 3, 4) and boundary. A run of five or
//! more is a win and is not weighted here; the evaluator returns `five`
//! for it directly.

use crate::error::ConfigError;
use crate::rules::Boundary;

/// Default pattern scores
pub struct PatternScore;

impl PatternScore {
    /// Five in a row - immediate win
    pub const FIVE: i32 = 100_000;

    /// Open four: _OOOO_ (unstoppable)
    pub const OPEN_FOUR: i32 = 10_000;
    /// Semi-open four: XOOOO_ or _OOOOX (wins next move unless blocked)
    pub const SEMI_OPEN_FOUR: i32 = 1_000;

    /// Open three: _OOO_
    pub const OPEN_THREE: i32 = 500;
    /// Semi-open three: XOOO_
    pub const SEMI_OPEN_THREE: i32 = 100;

    /// Open two: _OO_
    pub const OPEN_TWO: i32 = 50;
    /// Semi-open two: XOO_
    pub const SEMI_OPEN_TWO: i32 = 10;

    // Closed runs can never reach five along their axis. They keep a token
    // weight so longer still outranks shorter.
    pub const CLOSED_TWO: i32 = 1;
    pub const CLOSED_THREE: i32 = 2;
    pub const CLOSED_FOUR: i32 = 3;
}

/// Weight table used by the evaluator.
///
/// Rows are run lengths 2, 3 and 4; each row holds `[open, semi_open, closed]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreWeights {
    /// Value of a completed five (or longer)
    pub five: i32,
    pub two: [i32; 3],
    pub three: [i32; 3],
    pub four: [i32; 3],
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            five: PatternScore::FIVE,
            two: [
                PatternScore::OPEN_TWO,
                PatternScore::SEMI_OPEN_TWO,
                PatternScore::CLOSED_TWO,
            ],
            three: [
                PatternScore::OPEN_THREE,
                PatternScore::SEMI_OPEN_THREE,
                PatternScore::CLOSED_THREE,
            ],
            four: [
                PatternScore::OPEN_FOUR,
                PatternScore::SEMI_OPEN_FOUR,
                PatternScore::CLOSED_FOUR,
            ],
        }
    }
}

impl ScoreWeights {
    /// Weight of one run. Lengths below 2 score nothing; five and above
    /// score `five`.
    #[inline]
    pub fn weight(&self, length: usize, boundary: Boundary) -> i32 {
        let column = match boundary {
            Boundary::Open => 0,
            Boundary::SemiOpen => 1,
            Boundary::Closed => 2,
        };
        match length {
            0 | 1 => 0,
            2 => self.two[column],
            3 => self.three[column],
            4 => self.four[column],
            _ => self.five,
        }
    }

    /// Check the ordering the evaluator relies on: within a length,
    /// open > semi-open > closed >= 0; within a boundary, longer > shorter;
    /// and `five` above every other entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rows = [("two", self.two), ("three", self.three), ("four", self.four)];

        for (name, [open, semi, closed]) in rows {
            if !(open > semi && semi > closed && closed >= 0) {
                return Err(ConfigError::InvalidWeights(format!(
                    "{name} weights must satisfy open > semi-open > closed >= 0"
                )));
            }
        }
        for column in 0..3 {
            if !(self.four[column] > self.three[column] && self.three[column] > self.two[column]) {
                return Err(ConfigError::InvalidWeights(
                    "longer runs must outweigh shorter runs with the same boundary".to_string(),
                ));
            }
        }
        if self.five <= self.four[0] {
            return Err(ConfigError::InvalidWeights(
                "five must exceed the open four weight".to_string(),
            ));
        }
        Ok(())
    }
}
