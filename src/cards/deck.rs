//! Deck construction and shuffling.
//!
//! ## Reduced-suit padding
//!
//! Every virtual deck holds 52 cards regardless of suit count. With fewer
//! than four suits, each deck copy first contains the real suits in
//! canonical order, then is padded with extra cards of the first suit whose
//! ranks cycle `1..=13`.
//!
//! ```
//! use spider_engine::cards::{build_deck, shuffle};
//! use spider_engine::core::{GameRng, SuitCount};
//!
//! let deck = build_deck(SuitCount::Two, 2);
//! assert_eq!(deck.len(), 104);
//!
//! let mut rng = GameRng::new(7);
//! let shuffled = shuffle(deck, &mut rng);
//! assert_eq!(shuffled.len(), 104);
//! ```

use super::card::{Card, KING};
use crate::core::{CardId, RandomSource, SuitCount, CARDS_PER_DECK};

/// Build `52 * decks` face-down cards with sequential ids.
#[must_use]
pub fn build_deck(suits: SuitCount, decks: usize) -> Vec<Card> {
    let real_suits = suits.suits();
    let per_suit = usize::from(KING);
    let mut deck = Vec::with_capacity(CARDS_PER_DECK * decks);
    let mut next_id = CardId::new(0);

    let mut push = |deck: &mut Vec<Card>, suit, rank| {
        deck.push(Card::new(next_id, suit, rank, false));
        next_id = next_id.next();
    };

    for _ in 0..decks {
        for &suit in real_suits {
            for rank in 1..=KING {
                push(&mut deck, suit, rank);
            }
        }

        let padding = CARDS_PER_DECK - real_suits.len() * per_suit;
        for i in 0..padding {
            // i % 13 < 13, so the narrowing is exact
            let rank = (i % per_suit) as u8 + 1;
            push(&mut deck, real_suits[0], rank);
        }
    }

    deck
}

/// Fisher-Yates shuffle driven by a unit-interval source.
///
/// Walks from the last index down to 1, swapping index `i` with
/// `floor(next_unit() * (i + 1))`. Exactly `len - 1` values are drawn, so a
/// scripted source always yields the same permutation.
#[must_use]
pub fn shuffle<T, R>(mut items: Vec<T>, rng: &mut R) -> Vec<T>
where
    R: RandomSource + ?Sized,
{
    for i in (1..items.len()).rev() {
        let scaled = (rng.next_unit() * (i + 1) as f64).floor();
        let j = (scaled as usize).min(i);
        items.swap(i, j);
    }
    items
}
