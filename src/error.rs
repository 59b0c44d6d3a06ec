//! Error types for board and session operations.
//!
//! Every failure here is synchronous and local to the call that produced it;
//! nothing is retried. `OutOfRange` and `InvalidMove` are recoverable rule
//! violations the driving loop reports to the user. The remaining kinds are
//! configuration-time failures that abort match assembly.

/// Errors produced by the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Coordinate outside the board bounds.
    #[error("coordinate ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfRange { row: u8, col: u8, rows: u8, cols: u8 },

    /// Move rejected: occupied cell, out-of-range coordinates, or a move
    /// submitted while the match is not in progress.
    #[error("invalid move at ({row}, {col})")]
    InvalidMove { row: u8, col: u8 },

    /// Fewer than two players at setup.
    #[error("at least 2 players are required, found {found}")]
    InsufficientPlayers { found: usize },

    /// Roster larger than the configured maximum.
    #[error("{found} players exceed the configured maximum of {max}")]
    PlayerLimitExceeded { found: usize, max: usize },

    /// Position swap requested for a roster that is not exactly two players.
    #[error("player positions can only be swapped with exactly 2 players, found {found}")]
    UnsupportedPlayerCount { found: usize },

    /// Two roster entries share a name.
    #[error("duplicate player name '{name}'")]
    DuplicatePlayerName { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GameError::OutOfRange {
            row: 9,
            col: 2,
            rows: 3,
            cols: 3,
        };
        assert_eq!(err.to_string(), "coordinate (9, 2) is outside the 3x3 board");

        let err = GameError::InvalidMove { row: 0, col: 0 };
        assert_eq!(err.to_string(), "invalid move at (0, 0)");

        let err = GameError::InsufficientPlayers { found: 1 };
        assert!(err.to_string().contains("found 1"));

        let err = GameError::PlayerLimitExceeded { found: 3, max: 2 };
        assert!(err.to_string().contains('3'));
        assert!(err.to_string().contains('2'));

        let err = GameError::DuplicatePlayerName {
            name: "Ada".to_string(),
        };
        assert!(err.to_string().contains("Ada"));
    }

    #[test]
    fn test_errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GameError>();
    }

    #[test]
    fn test_error_equality() {
        let a = GameError::UnsupportedPlayerCount { found: 3 };
        let b = GameError::UnsupportedPlayerCount { found: 3 };
        assert_eq!(a, b);
    }
}
