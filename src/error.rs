//! Error types for board construction, placement and engine configuration

/// Errors raised by board construction, placement and boundary checks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board size {size} (must be between 1 and {max})")]
    InvalidSize { size: usize, max: usize },

    #[error("coordinate ({row}, {col}) is outside a {size}x{size} board")]
    OutOfBounds { row: i64, col: i64, size: usize },

    #[error("sequence length must be at least 1")]
    InvalidLength,
}

/// Errors raised when an engine configuration is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid score weights: {0}")]
    InvalidWeights(String),

    #[error("engine color must be Black or White")]
    InvalidColor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::OutOfBounds {
            row: -1,
            col: 3,
            size: 8,
        };
        assert_eq!(err.to_string(), "coordinate (-1, 3) is outside a 8x8 board");

        let err = BoardError::InvalidSize { size: 0, max: 64 };
        assert_eq!(
            err.to_string(),
            "invalid board size 0 (must be between 1 and 64)"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidWeights("open four must exceed open three".to_string());
        assert_eq!(
            err.to_string(),
            "invalid score weights: open four must exceed open three"
        );
    }
}
