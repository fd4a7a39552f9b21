//! Error types.
//!
//! Rule rejections (illegal move, empty stock, bad column) are not errors:
//! `GameState` reports them as `false`. The types here cover the two cases
//! that indicate a caller bug or an unusable setup.

use thiserror::Error;

/// Contract violation on a low-level `Pile` primitive.
///
/// `GameState` validates every request before touching a pile, so seeing
/// one of these from the engine means a bug in the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PileError {
    /// Count outside `[1, len]`.
    #[error("invalid count {count} for pile of {len} cards")]
    InvalidCount { count: usize, len: usize },

    /// The top `count` cards are not a face-up, same-suit descending run.
    #[error("top {count} cards are not a face-up descending run of one suit")]
    InvalidRun { count: usize },
}

/// Problems detected while setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A tableau needs at least one column.
    #[error("a game needs at least one column")]
    NoColumns,

    /// A game needs at least one deck.
    #[error("a game needs at least one deck")]
    NoDecks,

    /// The deck cannot cover the initial deal.
    #[error("initial deal needs {needed} cards but the deck has {available}")]
    NotEnoughCards { needed: usize, available: usize },

    /// A supplied tableau does not match the configured column count.
    #[error("expected {expected} columns, got {actual}")]
    ColumnMismatch { expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pile_error_messages() {
        let err = PileError::InvalidCount { count: 4, len: 3 };
        assert_eq!(err.to_string(), "invalid count 4 for pile of 3 cards");

        let err = PileError::InvalidRun { count: 2 };
        assert!(err.to_string().contains("top 2 cards"));
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::NotEnoughCards { needed: 54, available: 52 };
        assert_eq!(err.to_string(), "initial deal needs 54 cards but the deck has 52");
        assert_eq!(
            ConfigError::ColumnMismatch { expected: 10, actual: 9 }.to_string(),
            "expected 10 columns, got 9"
        );
    }
}
