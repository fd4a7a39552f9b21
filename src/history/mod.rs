//! Move history for undo/redo.
//!
//! ## Key Types
//!
//! - `MoveRecord`: Closed `Deal | Move` sum type with full reversal data
//! - `CollectedRun`: A run retired as a side effect of a move
//! - `MoveLog`: Applied records plus a redo tail

pub mod record;
pub mod move_log;

pub use record::{CollectedRun, MoveRecord};
pub use move_log::MoveLog;
