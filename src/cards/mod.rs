//! Card system: the card value type and deck construction.
//!
//! ## Key Types
//!
//! - `Card`: Immutable card value (id, suit, rank, face state)
//! - `Suit`: The four suits in canonical order
//! - `build_deck`: Deterministic multi-deck builder with reduced-suit padding
//! - `shuffle`: Fisher-Yates over an injected `RandomSource`

pub mod card;
pub mod deck;

pub use card::{rank_label, Card, Suit, ACE, KING};
pub use deck::{build_deck, shuffle};
