//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids ratatui widgets/layout and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! - [`PuzzleView`] and [`SnakeView`] paint core snapshots into a
//!   [`FrameBuffer`] (pure, unit-tested)
//! - [`TerminalRenderer`] diffs frames and writes crossterm commands
//! - [`Frontend`] is the seam the app loop drives; [`TerminalFrontend`] is
//!   the real terminal behind it

pub mod fb;
pub mod frontend;
pub mod puzzle_view;
pub mod renderer;
pub mod snake_view;
pub mod view;

pub use arcade_core as core;
pub use arcade_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use frontend::{Frontend, TerminalFrontend};
pub use puzzle_view::PuzzleView;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use snake_view::SnakeView;
pub use view::{AnchorY, FieldRect, Viewport};
