//! Spider rules as pure functions.
//!
//! `GameState` consults these predicates before every mutation. They never
//! change a pile or card themselves.

pub mod engine;

pub use engine::{can_move_stack, can_place_on, flip_card, should_flip_top_card};
