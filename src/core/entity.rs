//! Card identification.
//!
//! Every physical card in a session has a unique `CardId`. Two cards may
//! share rank and suit (multi-deck play) but never an id.
//!
//! ## ID Layout
//!
//! IDs are allocated sequentially by the deck builder, starting at 0 in
//! build order. A standard two-deck game uses ids `0..104`.
//!
//! ```
//! use spider_engine::core::CardId;
//!
//! let first = CardId::new(0);
//! assert_eq!(first.raw(), 0);
//! assert_eq!(first.next(), CardId::new(1));
//! ```

use serde::{Deserialize, Serialize};

/// Opaque unique identifier for a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id allocated after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
