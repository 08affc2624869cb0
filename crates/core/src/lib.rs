//! Core game logic - pure, deterministic, and testable
//!
//! Both games live here with no UI, terminal or file I/O:
//!
//! - **Deterministic**: randomness comes through [`RandomSource`], so a seed
//!   (or a scripted source) replays a game exactly
//! - **Headless**: each game owns a [`FixedTimestep`] and advances from plain
//!   `f64` timestamps
//! - **Portable**: state leaves the core as [`PuzzleSnapshot`] /
//!   [`SnakeSnapshot`] values for whatever presentation layer draws them
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with collision checks and full-row compaction
//! - [`pieces`]: base shapes, the corner-pivot rotation and horizontal kicks
//! - [`scoring`]: line-clear and hard-drop points, level and gravity curve
//! - [`puzzle`]: the falling-block state machine
//! - [`snake`]: grid movement engine and snake lifecycle
//! - [`timestep`]: fixed-step accumulator shared by both games
//! - [`rng`]: random-source port and the seedable LCG
//! - [`highscore`]: high-score storage port
//! - [`snapshot`]: drawable state for the presentation layer
//!
//! # Example
//!
//! ```
//! use arcade_core::{PuzzleGame, SimpleRng};
//! use arcade_core::types::{Phase, PuzzleAction};
//!
//! let mut game = PuzzleGame::new(SimpleRng::new(12345));
//! game.start();
//! assert_eq!(game.phase(), Phase::Running);
//!
//! game.apply_action(PuzzleAction::MoveRight);
//! game.apply_action(PuzzleAction::RotateCw);
//! game.apply_action(PuzzleAction::HardDrop);
//!
//! assert!(game.score() > 0); // hard drop awards points
//! ```
//!
//! # Timing
//!
//! Call `advance(now)` once per frame with the current time in seconds.
//! The puzzle drains gravity steps of the current drop interval (0.8 s at
//! level 1, down to 0.15 s); the snake drains `1 / speed` second steps.

pub mod board;
pub mod highscore;
pub mod pieces;
pub mod puzzle;
pub mod rng;
pub mod scoring;
pub mod snake;
pub mod snapshot;
pub mod timestep;

pub use arcade_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use highscore::{HighScoreStore, MemoryHighScore};
pub use pieces::{base_shape, rotate_shape, try_rotate, Piece, PieceShape};
pub use puzzle::{LockEvent, PuzzleGame};
pub use rng::{random_kind, RandomSource, ScriptedRng, SimpleRng};
pub use scoring::{drop_interval_secs, hard_drop_score, level_for_lines, line_clear_score};
pub use snake::{SnakeGame, StepResult};
pub use snapshot::{ActiveSnapshot, PuzzleSnapshot, SnakeOutcome, SnakeSnapshot};
pub use timestep::FixedTimestep;
