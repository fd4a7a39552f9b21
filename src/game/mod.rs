//! The Spider session: state, intents, and move enumeration.
//!
//! ## Key Types
//!
//! - `GameState`: Tableau, stock, completed runs, and move log
//! - `Intent`: The four requests the input layer may make

pub mod intent;
pub mod state;

pub use intent::Intent;
pub use state::GameState;
