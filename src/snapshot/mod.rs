//! Read-only projections of a game for rendering.
//!
//! ## Key Types
//!
//! - `BoardSnapshot`: Columns, stock counters, completed/move counts
//! - `SelectionState`: Cursor and selected-run overlay from the input layer

pub mod board;

pub use board::{BoardCard, BoardColumn, BoardSnapshot, SelectionState, StockInfo, HIDDEN_LABEL};
