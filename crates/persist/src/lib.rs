//! Everything that touches the environment or the filesystem.
//!
//! - [`config`]: `ARCADE_*` environment variables
//! - [`store`]: the snake high score as a small JSON file
//! - [`event_log`]: optional JSON-lines record of game events

pub mod config;
pub mod event_log;
pub mod store;

pub use arcade_core as core;

pub use config::AppConfig;
pub use event_log::{EventLog, LogEvent};
pub use store::{FileHighScoreStore, HighScoreFile};
