//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Auto-repeat is
//! left to the terminal: every press or repeat becomes one action, the same way
//! a key binding fires once per key event.

pub mod map;

pub use blockfall_types as types;

pub use map::{action_for_event, handle_key_event, should_quit};
