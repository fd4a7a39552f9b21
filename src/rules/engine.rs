//! Spider placement and movement rules.
//!
//! Pure predicates over cards and piles. Nothing here mutates state:
//! `GameState` asks these questions before committing any change.
//!
//! ## Building vs. moving
//!
//! - A run *moves* only as one suit, face-up, descending by one.
//! - A run *lands* on any face-up card exactly one rank higher, regardless
//!   of suit, or on an empty column.

use crate::cards::Card;
use crate::zones::Pile;

/// Can `moving` be placed on `target`?
///
/// `None` means an empty column, which accepts anything.
#[must_use]
pub fn can_place_on(moving: &Card, target: Option<&Card>) -> bool {
    match target {
        None => true,
        Some(target) => target.is_face_up() && moving.rank() + 1 == target.rank(),
    }
}

/// Can the top `count` cards of `from` move onto `to`?
///
/// The deepest card of the run is the one that lands on `to`'s top card.
#[must_use]
pub fn can_move_stack(from: &Pile, count: usize, to: &Pile) -> bool {
    if count == 0 || count > from.len() {
        return false;
    }
    if !from.can_take_descending_run(count) {
        return false;
    }

    match from.peek_run(count).ok().and_then(|run| run.first()) {
        Some(bottom) => can_place_on(bottom, to.peek()),
        None => false,
    }
}

/// Should the pile's top card be turned face-up?
#[must_use]
pub fn should_flip_top_card(pile: &Pile) -> bool {
    pile.peek().is_some_and(|top| !top.is_face_up())
}

/// Face-up copy of `card`. The input is left as it was.
#[must_use]
pub fn flip_card(card: Card) -> Card {
    card.face_up()
}
