//! Card zones.
//!
//! Spider has three kinds of zones: tableau columns, the stock, and the
//! completed-run area. Only tableau columns carry rules of their own, so
//! they get a dedicated type; the stock and completed runs are plain
//! sequences owned by `GameState`.
//!
//! ## Key Types
//!
//! - `Pile`: One tableau column with run detection and bulk take/give

pub mod pile;

pub use pile::{is_complete_sequence, is_descending_run, Pile};
