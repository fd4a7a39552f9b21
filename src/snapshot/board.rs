//! Read-only board projection for the presentation layer.
//!
//! A `BoardSnapshot` is a plain value built from `&GameState`. Renderers
//! consume it instead of touching the game, so drawing can never change
//! the position.
//!
//! ```
//! use spider_engine::core::{GameRng, SpiderConfig};
//! use spider_engine::game::GameState;
//! use spider_engine::snapshot::{BoardSnapshot, SelectionState};
//!
//! let game = GameState::new(SpiderConfig::new(), &mut GameRng::new(1)).unwrap();
//! let selection = SelectionState::at(3).with_source(3, 1);
//! let board = BoardSnapshot::capture(&game, Some(&selection));
//!
//! assert_eq!(board.columns.len(), 10);
//! assert!(board.columns[3].selected);
//! assert_eq!(board.stock.count, 50);
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::core::CardId;
use crate::game::GameState;
use crate::zones::Pile;

/// Label shown for a face-down card.
pub const HIDDEN_LABEL: &str = "###";

/// Input-layer selection context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    /// Column the selected run comes from.
    pub source_column: Option<usize>,
    /// How many cards from the top of the source are selected.
    pub selected_count: Option<usize>,
    /// Destination column, once chosen.
    pub target_column: Option<usize>,
    /// Column under the cursor.
    pub cursor_column: usize,
}

impl SelectionState {
    /// Cursor on `column`, nothing selected.
    #[must_use]
    pub fn at(column: usize) -> Self {
        Self {
            cursor_column: column,
            ..Self::default()
        }
    }

    /// Select the top `count` cards of `column`.
    #[must_use]
    pub fn with_source(mut self, column: usize, count: usize) -> Self {
        self.source_column = Some(column);
        self.selected_count = Some(count);
        self
    }

    /// Set the destination column.
    #[must_use]
    pub fn with_target(mut self, column: usize) -> Self {
        self.target_column = Some(column);
        self
    }
}

/// One card as the renderer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardCard {
    pub id: CardId,
    pub suit: Suit,
    /// Rank label when face-up, `###` when face-down.
    pub label: String,
    pub face_up: bool,
    /// Draw in the red suit color. Never set for face-down cards.
    pub red: bool,
    /// Part of the selected run.
    pub selected: bool,
    /// Top card of the column under the cursor.
    pub highlighted: bool,
}

/// One tableau column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardColumn {
    pub index: usize,
    /// Bottom to top.
    pub cards: Vec<BoardCard>,
    /// Cursor is on this column.
    pub focused: bool,
    /// This column is the selection source.
    pub selected: bool,
}

/// Stock counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockInfo {
    pub count: usize,
    pub can_deal: bool,
}

/// Complete read-only view of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub columns: Vec<BoardColumn>,
    pub stock: StockInfo,
    /// Retired runs.
    pub completed: usize,
    /// Applied actions in the move log.
    pub moves: usize,
    pub selection: Option<SelectionState>,
}

impl BoardSnapshot {
    /// Project `game` with an optional selection overlay.
    #[must_use]
    pub fn capture(game: &GameState, selection: Option<&SelectionState>) -> Self {
        let columns = game
            .tableau()
            .iter()
            .enumerate()
            .map(|(index, pile)| build_column(pile, index, selection))
            .collect();

        Self {
            columns,
            stock: StockInfo {
                count: game.stock().len(),
                can_deal: game.can_deal_row(),
            },
            completed: game.completed().len(),
            moves: game.moves().len(),
            selection: selection.copied(),
        }
    }
}

impl GameState {
    /// Read-only projection for rendering.
    #[must_use]
    pub fn snapshot(&self, selection: Option<&SelectionState>) -> BoardSnapshot {
        BoardSnapshot::capture(self, selection)
    }
}

fn build_column(pile: &Pile, index: usize, selection: Option<&SelectionState>) -> BoardColumn {
    let is_source = selection.is_some_and(|s| s.source_column == Some(index));
    let focused = selection.is_some_and(|s| s.cursor_column == index);
    let selected_count = selection
        .filter(|_| is_source)
        .and_then(|s| s.selected_count)
        .unwrap_or(0);

    let len = pile.len();
    let first_selected = len.saturating_sub(selected_count);

    let cards = pile
        .cards()
        .iter()
        .enumerate()
        .map(|(position, card)| {
            let selected = selected_count > 0 && position >= first_selected;
            let highlighted = focused && position + 1 == len;
            board_card(card, selected, highlighted)
        })
        .collect();

    BoardColumn {
        index,
        cards,
        focused,
        selected: is_source,
    }
}

fn board_card(card: &Card, selected: bool, highlighted: bool) -> BoardCard {
    let label = if card.is_face_up() {
        card.label()
    } else {
        HIDDEN_LABEL
    };

    BoardCard {
        id: card.id(),
        suit: card.suit(),
        label: label.to_string(),
        face_up: card.is_face_up(),
        red: card.is_face_up() && card.suit().is_red(),
        selected,
        highlighted,
    }
}
