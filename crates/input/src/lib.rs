//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::PuzzleAction`] and
//! [`crate::types::SnakeAction`]. Named on-screen button actions parse through
//! `from_str` on the action types themselves.

pub mod map;

pub use arcade_types as types;

pub use map::{puzzle_action, should_quit, snake_action};
