//! Terminal snake.
//!
//! Enter starts, arrows or WASD turn, Space or P pauses, R restarts, Q quits.
//! The best score is kept in `ARCADE_HIGHSCORE_PATH`.

use std::time::Duration;

use anyhow::Result;

use arcade::app::SnakeApp;
use arcade::core::{SimpleRng, SnakeGame};
use arcade::persist::{AppConfig, EventLog, FileHighScoreStore};
use arcade::term::TerminalFrontend;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    let log = EventLog::open("snake", config.log_path.as_deref())?;
    let store = FileHighScoreStore::new(&config.highscore_path);
    let game = SnakeGame::new(SimpleRng::new(config.resolve_seed()), store);
    let mut app = SnakeApp::new(game, log, Duration::from_millis(config.frame_ms));

    let mut frontend = TerminalFrontend::enter()?;
    let result = app.run(&mut frontend);

    let _ = frontend.exit();
    result?;

    println!("{}", app.summary());
    for e in app.take_errors() {
        eprintln!("[Snake] {:#}", e);
    }
    Ok(())
}
