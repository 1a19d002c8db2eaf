//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] values; the run loop
//! decides what each action does.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
