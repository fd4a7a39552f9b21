//! Playing card value type.
//!
//! Cards are immutable `Copy` values. Turning a card over produces a new
//! value; nothing mutates a card through a shared reference.

use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// Rank of an Ace.
pub const ACE: u8 = 1;

/// Rank of a King.
pub const KING: u8 = 13;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Heart,
    Diamond,
    Club,
}

impl Suit {
    /// All suits in canonical order. Reduced-suit games use a prefix.
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

    /// Single-letter code.
    #[must_use]
    pub fn short(self) -> &'static str {
        match self {
            Suit::Spade => "S",
            Suit::Heart => "H",
            Suit::Diamond => "D",
            Suit::Club => "C",
        }
    }

    #[must_use]
    pub fn is_red(self) -> bool {
        matches!(self, Suit::Heart | Suit::Diamond)
    }
}

/// Display label for a rank: `A`, `2`..`10`, `J`, `Q`, `K`.
///
/// Out-of-range ranks render as `?`.
#[must_use]
pub fn rank_label(rank: u8) -> &'static str {
    match rank {
        1 => "A",
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        6 => "6",
        7 => "7",
        8 => "8",
        9 => "9",
        10 => "10",
        11 => "J",
        12 => "Q",
        13 => "K",
        _ => "?",
    }
}

/// A playing card.
///
/// Identity is by `id`; rank and suit may repeat across decks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    suit: Suit,
    rank: u8,
    face_up: bool,
}

impl Card {
    /// Create a card. `rank` must be in `1..=13`.
    #[must_use]
    pub fn new(id: CardId, suit: Suit, rank: u8, face_up: bool) -> Self {
        debug_assert!((ACE..=KING).contains(&rank), "rank out of range: {rank}");
        Self {
            id,
            suit,
            rank,
            face_up,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub fn rank(&self) -> u8 {
        self.rank
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Copy of this card turned face-up.
    #[must_use]
    pub fn face_up(self) -> Self {
        Self {
            face_up: true,
            ..self
        }
    }

    /// Copy of this card turned face-down.
    #[must_use]
    pub fn face_down(self) -> Self {
        Self {
            face_up: false,
            ..self
        }
    }

    /// Rank label (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub fn label(&self) -> &'static str {
        rank_label(self.rank)
    }

    /// True if `self` sits directly under `above` in a same-suit run.
    #[must_use]
    pub fn is_run_parent_of(&self, above: &Card) -> bool {
        self.suit == above.suit && self.rank == above.rank + 1
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.label(), self.suit.short())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_labels() {
        assert_eq!(rank_label(1), "A");
        assert_eq!(rank_label(7), "7");
        assert_eq!(rank_label(10), "10");
        assert_eq!(rank_label(11), "J");
        assert_eq!(rank_label(12), "Q");
        assert_eq!(rank_label(13), "K");
        assert_eq!(rank_label(0), "?");
    }

    #[test]
    fn test_flip_returns_copy() {
        let card = Card::new(CardId::new(3), Suit::Heart, 12, false);
        let up = card.face_up();

        assert!(!card.is_face_up());
        assert!(up.is_face_up());
        assert_eq!(up.id(), card.id());
        assert_eq!(up.rank(), 12);
        assert_eq!(up.suit(), Suit::Heart);
        assert!(!up.face_down().is_face_up());
    }

    #[test]
    fn test_run_parent() {
        let queen = Card::new(CardId::new(0), Suit::Spade, 12, true);
        let jack = Card::new(CardId::new(1), Suit::Spade, 11, true);
        let red_jack = Card::new(CardId::new(2), Suit::Heart, 11, true);

        assert!(queen.is_run_parent_of(&jack));
        assert!(!jack.is_run_parent_of(&queen));
        assert!(!queen.is_run_parent_of(&red_jack));
    }

    #[test]
    fn test_display() {
        let card = Card::new(CardId::new(0), Suit::Club, 1, true);
        assert_eq!(card.to_string(), "AC");
    }

    #[test]
    fn test_suit_colors() {
        assert!(Suit::Heart.is_red());
        assert!(Suit::Diamond.is_red());
        assert!(!Suit::Spade.is_red());
        assert!(!Suit::Club.is_red());
    }
}
