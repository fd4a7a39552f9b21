//! Game configuration.
//!
//! A session is configured once at construction:
//! - `columns`: tableau width (10 for standard Spider)
//! - `suits`: how many distinct suits the deck uses (1, 2 or 4)
//! - `decks`: how many 52-card virtual decks are shuffled together
//!
//! The engine derives the deal layout and win target from these values.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::Suit;

/// Cards in one virtual deck.
pub const CARDS_PER_DECK: usize = 52;

/// Cards in a complete King to Ace run.
pub const RUN_LENGTH: usize = 13;

/// Column count that gets the standard 6/5 deal.
pub const STANDARD_COLUMNS: usize = 10;

/// Number of distinct suits in play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuitCount {
    #[default]
    One,
    Two,
    Four,
}

impl SuitCount {
    /// Numeric suit count.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Four => 4,
        }
    }

    /// Parse from a numeric count. Only 1, 2 and 4 are playable.
    #[must_use]
    pub const fn from_count(count: usize) -> Option<Self> {
        match count {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            4 => Some(Self::Four),
            _ => None,
        }
    }

    /// The suits physically present, in canonical order.
    #[must_use]
    pub fn suits(self) -> &'static [Suit] {
        &Suit::ALL[..self.count()]
    }
}

/// Complete game configuration.
///
/// ```
/// use spider_engine::core::{SpiderConfig, SuitCount};
///
/// let config = SpiderConfig::new().with_suits(SuitCount::Two);
/// assert_eq!(config.columns, 10);
/// assert_eq!(config.total_cards(), 104);
/// assert_eq!(config.sequences_to_win(), 8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpiderConfig {
    /// Number of tableau columns.
    pub columns: usize,

    /// Distinct suits in the deck.
    pub suits: SuitCount,

    /// Number of 52-card virtual decks.
    pub decks: usize,
}

impl Default for SpiderConfig {
    fn default() -> Self {
        Self {
            columns: STANDARD_COLUMNS,
            suits: SuitCount::One,
            decks: 2,
        }
    }
}

impl SpiderConfig {
    /// Standard layout: 10 columns, one suit, two decks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column count.
    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Set the suit count.
    #[must_use]
    pub fn with_suits(mut self, suits: SuitCount) -> Self {
        self.suits = suits;
        self
    }

    /// Set the deck count.
    #[must_use]
    pub fn with_decks(mut self, decks: usize) -> Self {
        self.decks = decks;
        self
    }

    /// Total cards across all virtual decks.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        CARDS_PER_DECK * self.decks
    }

    /// Completed runs needed to win.
    #[must_use]
    pub fn sequences_to_win(&self) -> usize {
        self.total_cards() / RUN_LENGTH
    }

    /// Cards dealt to each column at setup.
    ///
    /// The standard 10-column layout deals 6 to the first four columns and
    /// 5 to the rest; any other width gets 5 per column.
    #[must_use]
    pub fn initial_deal_counts(&self) -> Vec<usize> {
        (0..self.columns)
            .map(|col| {
                if self.columns == STANDARD_COLUMNS && col < 4 {
                    6
                } else {
                    5
                }
            })
            .collect()
    }

    /// Cards consumed by the initial deal.
    #[must_use]
    pub fn initial_deal_size(&self) -> usize {
        self.initial_deal_counts().iter().sum()
    }

    /// Check that a game can be dealt from this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::NoColumns);
        }
        if self.decks == 0 {
            return Err(ConfigError::NoDecks);
        }
        let needed = self.initial_deal_size();
        let available = self.total_cards();
        if needed > available {
            return Err(ConfigError::NotEnoughCards { needed, available });
        }
        Ok(())
    }
}
