//! # spider-engine
//!
//! A deterministic Spider Solitaire rules and state engine.
//!
//! ## Design Principles
//!
//! 1. **Injected randomness**: Shuffles take a `RandomSource` from the
//!    caller. The same source always produces the same deal.
//!
//! 2. **Rejections are values**: Illegal moves, empty stock, and bad column
//!    indices return `false` and leave the game untouched. Only misuse of
//!    low-level `Pile` primitives produces a `PileError`.
//!
//! 3. **Reversible history**: Every committed action is logged with enough
//!    data to undo it exactly, including runs retired as a side effect.
//!
//! ## Modules
//!
//! - `core`: Card ids, RNG, configuration, errors
//! - `cards`: Card value type, deck builder, shuffle
//! - `zones`: Tableau piles with run detection
//! - `rules`: Pure placement and movement predicates
//! - `history`: Move records and the undo/redo log
//! - `game`: The authoritative `GameState` and player intents
//! - `snapshot`: Read-only board projection for renderers

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod history;
pub mod game;
pub mod snapshot;

// Re-export commonly used types
pub use crate::core::{
    CardId, GameRng, RandomSource,
    SpiderConfig, SuitCount,
    ConfigError, PileError,
};

pub use crate::cards::{build_deck, shuffle, Card, Suit};

pub use crate::zones::Pile;

pub use crate::rules::{can_move_stack, can_place_on, flip_card, should_flip_top_card};

pub use crate::history::{CollectedRun, MoveLog, MoveRecord};

pub use crate::game::{GameState, Intent};

pub use crate::snapshot::{BoardCard, BoardColumn, BoardSnapshot, SelectionState, StockInfo};
