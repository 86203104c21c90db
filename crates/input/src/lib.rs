//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Terminals
//! deliver auto-repeated presses on their own, so every press is one action
//! and there is no key-release tracking.

pub mod map;

pub use tui_blockfall_types as types;

pub use map::{handle_key_event, should_quit};
