//! Property-based tests for piles, decks, and shuffling.
//!
//! Piles are generated either from arbitrary cards or as a face-down base
//! topped by a descending run, so run detection sees both noise and long
//! legal runs.

use proptest::prelude::*;
use rustc_hash::FxHashSet;
use spider_engine::cards::{build_deck, shuffle, Card, Suit};
use spider_engine::core::{CardId, GameRng, PileError, SuitCount};
use spider_engine::zones::{is_descending_run, Pile};

fn suit_strategy() -> impl Strategy<Value = Suit> {
    (0usize..4).prop_map(|index| Suit::ALL[index])
}

// Arbitrary cards; ids are assigned by position so they stay unique
fn card_specs() -> impl Strategy<Value = Vec<(Suit, u8, bool)>> {
    prop::collection::vec((suit_strategy(), 1u8..=13, any::<bool>()), 0..30)
}

fn pile_from_specs(specs: &[(Suit, u8, bool)]) -> Pile {
    Pile::from_cards(
        specs
            .iter()
            .enumerate()
            .map(|(id, &(suit, rank, face_up))| Card::new(CardId::new(id as u32), suit, rank, face_up)),
    )
}

// Face-down base plus a same-suit descending run starting at `top_rank`
fn run_pile_strategy() -> impl Strategy<Value = Pile> {
    (0usize..6, suit_strategy(), 1u8..=13, 1usize..=13).prop_map(|(base, suit, top_rank, run)| {
        let run = run.min(usize::from(14 - top_rank));
        let mut cards = Vec::new();
        for i in 0..base {
            cards.push(Card::new(CardId::new(i as u32), Suit::Club, 5, false));
        }
        for offset in (0..run).rev() {
            let id = (base + run - offset) as u32 + 100;
            cards.push(Card::new(CardId::new(id), suit, top_rank + offset as u8, true));
        }
        Pile::from_cards(cards)
    })
}

fn any_pile() -> impl Strategy<Value = Pile> {
    prop_oneof![
        card_specs().prop_map(|specs| pile_from_specs(&specs)),
        run_pile_strategy(),
    ]
}

fn suit_count_strategy() -> impl Strategy<Value = SuitCount> {
    prop_oneof![Just(SuitCount::One), Just(SuitCount::Two), Just(SuitCount::Four)]
}

proptest! {
    /// `can_take_descending_run(k)` holds exactly for `1..=max_movable_run_length`.
    #[test]
    fn test_movable_runs_match_max_length(pile in any_pile()) {
        let max = pile.max_movable_run_length();
        prop_assert!(max <= pile.len());

        for k in 0..=pile.len() + 1 {
            let expected = k >= 1 && k <= max;
            prop_assert_eq!(pile.can_take_descending_run(k), expected, "k = {}", k);
        }
    }

    /// A generated run is fully movable.
    #[test]
    fn test_generated_run_is_movable(pile in run_pile_strategy()) {
        let face_up = pile.cards().iter().filter(|c| c.is_face_up()).count();
        prop_assert_eq!(pile.max_movable_run_length(), face_up);
    }

    /// `peek_run` and `pop_many` see the same cards.
    #[test]
    fn test_peek_then_pop_agree(pile in any_pile(), pick in 1usize..40) {
        prop_assume!(!pile.is_empty());
        let count = (pick - 1) % pile.len() + 1;

        let peeked = pile.peek_run(count).unwrap().to_vec();
        let mut popped_from = pile.clone();
        let popped = popped_from.pop_many(count).unwrap();

        prop_assert_eq!(&peeked, &popped);
        prop_assert_eq!(popped_from.len(), pile.len() - count);

        popped_from.push_many(popped);
        prop_assert_eq!(popped_from, pile);
    }

    /// Zero and overlong counts are rejected without change.
    #[test]
    fn test_out_of_range_counts_fail(pile in any_pile()) {
        let mut working = pile.clone();
        let len = pile.len();

        prop_assert_eq!(
            working.pop_many(0),
            Err(PileError::InvalidCount { count: 0, len })
        );
        prop_assert_eq!(
            working.pop_many(len + 1),
            Err(PileError::InvalidCount { count: len + 1, len })
        );
        prop_assert_eq!(working, pile);
    }

    /// Taking a run either removes exactly a descending run or nothing.
    #[test]
    fn test_take_run_is_all_or_nothing(pile in any_pile(), count in 0usize..16) {
        let mut working = pile.clone();
        match working.take_descending_run(count) {
            Ok(run) => {
                prop_assert_eq!(run.len(), count);
                prop_assert!(is_descending_run(&run));
                prop_assert_eq!(working.len() + count, pile.len());
            }
            Err(_) => prop_assert_eq!(working, pile),
        }
    }

    /// Collection leaves the pile alone or removes exactly thirteen cards.
    #[test]
    fn test_collection_removes_thirteen_or_nothing(pile in any_pile()) {
        let mut working = pile.clone();
        match working.collect_complete_sequence() {
            Some(run) => {
                prop_assert_eq!(run.len(), 13);
                prop_assert_eq!(run[0].rank(), 13);
                prop_assert_eq!(run[12].rank(), 1);
                prop_assert_eq!(working.len(), pile.len() - 13);
                prop_assert_eq!(working.cards(), &pile.cards()[..pile.len() - 13]);
            }
            None => prop_assert_eq!(working, pile),
        }
    }

    /// Decks hold 52 cards per copy with unique sequential ids.
    #[test]
    fn test_deck_size_and_ids(suits in suit_count_strategy(), decks in 1usize..5) {
        let deck = build_deck(suits, decks);
        prop_assert_eq!(deck.len(), 52 * decks);

        for (index, card) in deck.iter().enumerate() {
            prop_assert_eq!(card.id().raw(), index as u32);
            prop_assert!(!card.is_face_up());
            prop_assert!(suits.suits().contains(&card.suit()));
        }
    }

    /// Shuffling permutes the deck and is reproducible per seed.
    #[test]
    fn test_shuffle_is_seeded_permutation(seed in any::<u64>(), suits in suit_count_strategy()) {
        let deck = build_deck(suits, 2);

        let a = shuffle(deck.clone(), &mut GameRng::new(seed));
        let b = shuffle(deck.clone(), &mut GameRng::new(seed));
        prop_assert_eq!(&a, &b);

        let before: FxHashSet<_> = deck.iter().map(Card::id).collect();
        let after: FxHashSet<_> = a.iter().map(Card::id).collect();
        prop_assert_eq!(a.len(), deck.len());
        prop_assert_eq!(before, after);
    }
}
