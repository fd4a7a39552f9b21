//! Core engine types: card ids, RNG, configuration, errors.
//!
//! This module holds the building blocks every other module depends on.
//! Nothing here knows about piles or rules.

pub mod entity;
pub mod rng;
pub mod config;
pub mod error;

pub use entity::CardId;
pub use rng::{GameRng, RandomSource};
pub use config::{SpiderConfig, SuitCount, CARDS_PER_DECK, RUN_LENGTH, STANDARD_COLUMNS};
pub use error::{ConfigError, PileError};
