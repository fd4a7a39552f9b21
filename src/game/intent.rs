//! Player intents accepted by the engine.
//!
//! The input layer turns keystrokes into one of these and hands it to
//! `GameState::apply`. Nothing else writes to a game.

use serde::{Deserialize, Serialize};

/// One of the four things a player can ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Deal one stock card onto every column.
    Deal,
    /// Move the top `count` cards of column `from` onto column `to`.
    Move { from: usize, count: usize, to: usize },
    /// Reverse the latest action.
    Undo,
    /// Re-apply the latest undone action.
    Redo,
}

impl Intent {
    /// Shorthand for `Intent::Move`.
    #[must_use]
    pub const fn move_stack(from: usize, count: usize, to: usize) -> Self {
        Self::Move { from, count, to }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::Deal => write!(f, "deal"),
            Intent::Move { from, count, to } => write!(f, "move {count} from {from} to {to}"),
            Intent::Undo => write!(f, "undo"),
            Intent::Redo => write!(f, "redo"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_shorthand() {
        assert_eq!(
            Intent::move_stack(1, 3, 4),
            Intent::Move { from: 1, count: 3, to: 4 }
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Intent::Deal.to_string(), "deal");
        assert_eq!(Intent::move_stack(0, 2, 5).to_string(), "move 2 from 0 to 5");
        assert_eq!(Intent::Undo.to_string(), "undo");
        assert_eq!(Intent::Redo.to_string(), "redo");
    }
}
