//! Per-game frame loops.
//!
//! One frame: advance the simulation to `now`, paint and present the
//! snapshot, then wait up to one frame interval for a key and apply it.
//! [`PuzzleApp::frame`] / [`SnakeApp::frame`] take the time explicitly so the
//! loop can be driven headless; `run` feeds them a monotonic clock.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::core::{
    HighScoreStore, MemoryHighScore, PuzzleGame, RandomSource, SimpleRng, SnakeGame,
};
use crate::input::{puzzle_action, should_quit, snake_action};
use crate::persist::{EventLog, FileHighScoreStore, LogEvent};
use crate::term::{FrameBuffer, Frontend, PuzzleView, SnakeView};
use crate::types::{Phase, PuzzleAction, SnakeAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A high-score store that may have failed behind the game's back.
pub trait ReportingStore: HighScoreStore {
    fn take_error(&mut self) -> Option<anyhow::Error>;
}

impl ReportingStore for FileHighScoreStore {
    fn take_error(&mut self) -> Option<anyhow::Error> {
        FileHighScoreStore::take_error(self)
    }
}

impl ReportingStore for MemoryHighScore {
    fn take_error(&mut self) -> Option<anyhow::Error> {
        None
    }
}

/// Drive `frame` with wall-clock seconds until it asks to quit.
fn run_loop(mut frame: impl FnMut(f64) -> Result<Flow>) -> Result<()> {
    let start = Instant::now();
    while frame(start.elapsed().as_secs_f64())? == Flow::Continue {}
    Ok(())
}

pub struct PuzzleApp<R = SimpleRng> {
    game: PuzzleGame<R>,
    view: PuzzleView,
    fb: FrameBuffer,
    log: EventLog,
    frame_interval: Duration,
}

impl<R: RandomSource> PuzzleApp<R> {
    pub fn new(game: PuzzleGame<R>, log: EventLog, frame_interval: Duration) -> Self {
        Self {
            game,
            view: PuzzleView::default(),
            fb: FrameBuffer::new(0, 0),
            log,
            frame_interval,
        }
    }

    pub fn game(&self) -> &PuzzleGame<R> {
        &self.game
    }

    pub fn run<F: Frontend>(&mut self, frontend: &mut F) -> Result<()> {
        run_loop(|now| self.frame(frontend, now))
    }

    pub fn frame<F: Frontend>(&mut self, frontend: &mut F, now: f64) -> Result<Flow> {
        self.game.advance(now);
        self.log_locks();

        let snap = self.game.snapshot();
        self.view.render_into(&snap, frontend.viewport(), &mut self.fb);
        frontend.present(&mut self.fb)?;

        match frontend.poll_key(self.frame_interval)? {
            Some(key) => Ok(self.handle_key(key)),
            None => Ok(Flow::Continue),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if should_quit(key) {
            return Flow::Quit;
        }
        if let Some(action) = puzzle_action(key) {
            self.apply(action);
        }
        Flow::Continue
    }

    /// Apply an action and log what it caused.
    pub fn apply(&mut self, action: PuzzleAction) -> bool {
        let applied = self.game.apply_action(action);
        if applied && matches!(action, PuzzleAction::Start | PuzzleAction::Restart) {
            self.log.record(&LogEvent::Started);
        }
        self.log_locks();
        applied
    }

    /// Log every lock since the last frame; one delayed frame may hold several.
    fn log_locks(&mut self) {
        // Game over is always the last lock, so the final score applies.
        let score = self.game.score();
        for ev in self.game.take_events() {
            self.log.record(&LogEvent::locked(&ev));
            if ev.game_over {
                self.log.record(&LogEvent::GameOver {
                    score,
                    reason: None,
                });
            }
        }
    }

    /// One-line result for the console after the terminal is restored.
    pub fn summary(&self) -> String {
        format!(
            "[Tetris] score {} level {} lines {}",
            self.game.score(),
            self.game.level(),
            self.game.lines()
        )
    }

    pub fn take_errors(&mut self) -> Vec<anyhow::Error> {
        self.log.take_error().into_iter().collect()
    }
}

pub struct SnakeApp<R = SimpleRng, S = FileHighScoreStore> {
    game: SnakeGame<R, S>,
    view: SnakeView,
    fb: FrameBuffer,
    log: EventLog,
    frame_interval: Duration,
    errors: Vec<anyhow::Error>,
}

impl<R: RandomSource, S: ReportingStore> SnakeApp<R, S> {
    pub fn new(game: SnakeGame<R, S>, log: EventLog, frame_interval: Duration) -> Self {
        let mut app = Self {
            game,
            view: SnakeView::default(),
            fb: FrameBuffer::new(0, 0),
            log,
            frame_interval,
            errors: Vec::new(),
        };
        // The initial load may already have failed.
        app.collect_store_error();
        app
    }

    pub fn game(&self) -> &SnakeGame<R, S> {
        &self.game
    }

    pub fn run<F: Frontend>(&mut self, frontend: &mut F) -> Result<()> {
        run_loop(|now| self.frame(frontend, now))
    }

    pub fn frame<F: Frontend>(&mut self, frontend: &mut F, now: f64) -> Result<Flow> {
        self.observe(|game| {
            game.advance(now);
        });

        let snap = self.game.snapshot();
        self.view.render_into(&snap, frontend.viewport(), &mut self.fb);
        frontend.present(&mut self.fb)?;

        match frontend.poll_key(self.frame_interval)? {
            Some(key) => Ok(self.handle_key(key)),
            None => Ok(Flow::Continue),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if should_quit(key) {
            return Flow::Quit;
        }
        if let Some(action) = snake_action(key) {
            self.apply(action);
        }
        Flow::Continue
    }

    pub fn apply(&mut self, action: SnakeAction) -> bool {
        let applied = self.observe(|game| game.apply_action(action));
        if applied && matches!(action, SnakeAction::Start | SnakeAction::Restart) {
            self.log.record(&LogEvent::Started);
        }
        applied
    }

    /// Run `f` and log the high score and game-over transitions it caused.
    fn observe<T>(&mut self, f: impl FnOnce(&mut SnakeGame<R, S>) -> T) -> T {
        let high_before = self.game.high_score();
        let phase_before = self.game.phase();

        let out = f(&mut self.game);

        if self.game.high_score() > high_before {
            self.log.record(&LogEvent::HighScore {
                score: self.game.high_score(),
            });
        }
        if phase_before != Phase::GameOver && self.game.phase() == Phase::GameOver {
            self.log.record(&LogEvent::snake_over(
                self.game.score(),
                self.game.outcome(),
            ));
        }
        self.collect_store_error();
        out
    }

    fn collect_store_error(&mut self) {
        if let Some(e) = self.game.store_mut().take_error() {
            self.log.record(&LogEvent::StoreError {
                message: format!("{:#}", e),
            });
            self.errors.push(e);
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "[Snake] score {} high {}",
            self.game.score(),
            self.game.high_score()
        )
    }

    pub fn take_errors(&mut self) -> Vec<anyhow::Error> {
        let mut errors = std::mem::take(&mut self.errors);
        errors.extend(self.log.take_error());
        errors
    }
}
