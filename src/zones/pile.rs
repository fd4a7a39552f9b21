//! Tableau pile with run detection.
//!
//! A `Pile` is an ordered stack of cards, index 0 at the bottom and the
//! last index on top. The backing vector is private: callers only get the
//! operations below, so run contiguity and face-state queries cannot be
//! bypassed.
//!
//! ## Runs
//!
//! A *run* is a contiguous group ending at the top of the pile whose cards
//! are all face-up, share one suit, and descend by exactly one rank from the
//! bottom of the run to the top.
//!
//! ```
//! use spider_engine::zones::Pile;
//! use spider_engine::cards::{Card, Suit};
//! use spider_engine::core::CardId;
//!
//! let mut pile = Pile::new();
//! pile.push(Card::new(CardId::new(0), Suit::Spade, 13, false));
//! pile.push(Card::new(CardId::new(1), Suit::Spade, 12, true));
//! pile.push(Card::new(CardId::new(2), Suit::Spade, 11, true));
//!
//! assert_eq!(pile.max_movable_run_length(), 2);
//! assert!(pile.can_take_descending_run(2));
//! assert!(!pile.can_take_descending_run(3));
//! ```

use crate::cards::{Card, ACE, KING};
use crate::core::{PileError, RUN_LENGTH};

/// True if `cards` is a face-up, same-suit run descending by one rank.
///
/// An empty slice is trivially a run.
#[must_use]
pub fn is_descending_run(cards: &[Card]) -> bool {
    cards.iter().all(Card::is_face_up)
        && cards.windows(2).all(|pair| pair[0].is_run_parent_of(&pair[1]))
}

/// True if `cards` is exactly one King-to-Ace run.
#[must_use]
pub fn is_complete_sequence(cards: &[Card]) -> bool {
    cards.len() == RUN_LENGTH
        && cards.first().is_some_and(|c| c.rank() == KING)
        && cards.last().is_some_and(|c| c.rank() == ACE)
        && is_descending_run(cards)
}

/// An ordered stack of cards, bottom to top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pile {
    cards: Vec<Card>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pile from cards listed bottom to top.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Top card, if any.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Read-only view of all cards, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Append cards in the given order; the last one ends up on top.
    pub fn push_many(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Remove the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    fn check_count(&self, count: usize) -> Result<usize, PileError> {
        if count == 0 || count > self.cards.len() {
            return Err(PileError::InvalidCount {
                count,
                len: self.cards.len(),
            });
        }
        Ok(self.cards.len() - count)
    }

    /// Remove the top `count` cards, returned bottom to top.
    pub fn pop_many(&mut self, count: usize) -> Result<Vec<Card>, PileError> {
        let start = self.check_count(count)?;
        Ok(self.cards.split_off(start))
    }

    /// The top `count` cards without removing them.
    pub fn peek_run(&self, count: usize) -> Result<&[Card], PileError> {
        let start = self.check_count(count)?;
        Ok(&self.cards[start..])
    }

    /// True if `count` is in bounds and the top `count` cards form a run.
    #[must_use]
    pub fn can_take_descending_run(&self, count: usize) -> bool {
        self.peek_run(count).is_ok_and(is_descending_run)
    }

    /// Remove the top `count` cards, which must form a run.
    pub fn take_descending_run(&mut self, count: usize) -> Result<Vec<Card>, PileError> {
        if !is_descending_run(self.peek_run(count)?) {
            return Err(PileError::InvalidRun { count });
        }
        self.pop_many(count)
    }

    /// Length of the longest run ending at the top card.
    ///
    /// Zero if the pile is empty or the top card is face-down.
    #[must_use]
    pub fn max_movable_run_length(&self) -> usize {
        let mut length = 0;
        let mut above: Option<&Card> = None;

        for card in self.cards.iter().rev() {
            if !card.is_face_up() {
                break;
            }
            if let Some(above) = above {
                if !card.is_run_parent_of(above) {
                    break;
                }
            }
            length += 1;
            above = Some(card);
        }

        length
    }

    /// Remove and return a completed King-to-Ace run sitting on top.
    ///
    /// Leaves the pile untouched and returns `None` unless the top 13 cards
    /// are one suit, face-up, King at the bottom and Ace on top.
    pub fn collect_complete_sequence(&mut self) -> Option<Vec<Card>> {
        if self.max_movable_run_length() < RUN_LENGTH {
            return None;
        }
        if !is_complete_sequence(self.peek_run(RUN_LENGTH).ok()?) {
            return None;
        }
        self.pop_many(RUN_LENGTH).ok()
    }

    /// Turn a face-down top card face-up in place.
    ///
    /// Returns the card as it now sits, or `None` if there was nothing to
    /// flip.
    pub fn flip_top(&mut self) -> Option<Card> {
        let top = self.cards.last_mut()?;
        if top.is_face_up() {
            return None;
        }
        *top = top.face_up();
        Some(*top)
    }

    /// Turn a face-up top card face-down in place. Inverse of `flip_top`.
    pub fn conceal_top(&mut self) -> Option<Card> {
        let top = self.cards.last_mut()?;
        if !top.is_face_up() {
            return None;
        }
        *top = top.face_down();
        Some(*top)
    }
}
