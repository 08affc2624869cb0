//! Terminal falling-block puzzle (default binary).
//!
//! Enter starts, arrows or WASD move, Up rotates, Space hard-drops,
//! P pauses, R restarts, Q quits.

use std::time::Duration;

use anyhow::Result;

use arcade::app::PuzzleApp;
use arcade::core::{PuzzleGame, SimpleRng};
use arcade::persist::{AppConfig, EventLog};
use arcade::term::TerminalFrontend;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    let log = EventLog::open("tetris", config.log_path.as_deref())?;
    let game = PuzzleGame::new(SimpleRng::new(config.resolve_seed()));
    let mut app = PuzzleApp::new(game, log, Duration::from_millis(config.frame_ms));

    let mut frontend = TerminalFrontend::enter()?;
    let result = app.run(&mut frontend);

    // Always try to restore terminal state.
    let _ = frontend.exit();
    result?;

    println!("{}", app.summary());
    for e in app.take_errors() {
        eprintln!("[Tetris] {:#}", e);
    }
    Ok(())
}
