//! Move records.
//!
//! Every committed action produces one `MoveRecord`. A record carries
//! enough data to reverse the action exactly, without re-deriving any
//! randomness:
//! - `Deal`: the cards dealt, in column order
//! - `Move`: the run moved, the card flipped on the source column, and any
//!   run that the move retired from the destination column
//! - `Collect`: a run retired on request rather than by a move

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

/// A retired King-to-Ace run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectedRun {
    /// The 13 retired cards, King first.
    pub cards: Vec<Card>,

    /// Card turned face-up on the destination column after retirement.
    pub revealed: Option<Card>,
}

/// A committed action.
///
/// A closed sum type: every consumer handles every case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRecord {
    /// One stock card dealt face-up onto each column.
    Deal {
        /// Dealt cards, index = column.
        /// SmallVec holds a standard 10-column deal without heap allocation.
        cards: SmallVec<[Card; 10]>,
    },

    /// A run moved between two columns.
    Move {
        from: usize,
        to: usize,
        count: usize,
        /// Moved cards, bottom to top.
        cards: Vec<Card>,
        /// Card flipped face-up on `from` after the run left.
        flipped: Option<Card>,
        /// Run retired from `to` after the move landed.
        collected: Option<CollectedRun>,
    },

    /// A run retired from the top of `column` by
    /// `GameState::try_collect_complete_sequence`.
    Collect { column: usize, run: CollectedRun },
}

impl MoveRecord {
    /// Create a deal record.
    #[must_use]
    pub fn deal(cards: impl IntoIterator<Item = Card>) -> Self {
        Self::Deal {
            cards: cards.into_iter().collect(),
        }
    }

    /// Create a move record with no side effects attached yet.
    #[must_use]
    pub fn stack_move(from: usize, to: usize, cards: Vec<Card>, flipped: Option<Card>) -> Self {
        Self::Move {
            from,
            to,
            count: cards.len(),
            cards,
            flipped,
            collected: None,
        }
    }

    /// Attach the run a move retired from its destination.
    #[must_use]
    pub fn with_collected(mut self, run: Option<CollectedRun>) -> Self {
        if let Self::Move { collected, .. } = &mut self {
            *collected = run;
        }
        self
    }

    #[must_use]
    pub fn is_deal(&self) -> bool {
        matches!(self, Self::Deal { .. })
    }

    #[must_use]
    pub fn is_move(&self) -> bool {
        matches!(self, Self::Move { .. })
    }

    #[must_use]
    pub fn is_collect(&self) -> bool {
        matches!(self, Self::Collect { .. })
    }

    /// Cards that changed location in this action.
    ///
    /// For `Move` this excludes a run retired as a side effect; for
    /// `Collect` it is the retired run.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        match self {
            Self::Deal { cards } => cards.as_slice(),
            Self::Move { cards, .. } => cards.as_slice(),
            Self::Collect { run, .. } => run.cards.as_slice(),
        }
    }

    /// The run retired by this action, if any.
    #[must_use]
    pub fn collected(&self) -> Option<&CollectedRun> {
        match self {
            Self::Deal { .. } => None,
            Self::Move { collected, .. } => collected.as_ref(),
            Self::Collect { run, .. } => Some(run),
        }
    }
}
