//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The board
//! engine itself never sees key events; everything funnels through the
//! action enum.

pub mod handler;

pub use handler::{handle_key_event, should_quit};
