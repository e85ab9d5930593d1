//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. Every press is one
//! discrete command; terminal auto-repeat is accepted for movement so holding
//! an arrow key keeps sliding the block.

pub mod map;

pub use tui_cascade_types as types;

pub use map::{handle_key_event, should_quit};
