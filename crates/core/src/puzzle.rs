//! Puzzle game state - the falling-block state machine
//!
//! Ties together the board, pieces, scoring and the fixed-timestep driver.
//! Lifecycle: `Idle` → `Running` ↔ `Paused`, and `Running` → `GameOver` when a
//! freshly spawned piece collides. Piece movement is only accepted while
//! running; rejected moves are no-ops that return `false`.

use std::collections::VecDeque;

use crate::board::Board;
use crate::pieces::{try_rotate, Piece};
use crate::rng::{random_kind, RandomSource, SimpleRng};
use crate::scoring::{drop_interval_secs, hard_drop_score, level_for_lines, line_clear_score};
use crate::snapshot::PuzzleSnapshot;
use crate::timestep::FixedTimestep;
use crate::types::{Phase, PieceKind, PuzzleAction};

/// Lock events kept between drains; the oldest is dropped past this.
const MAX_PENDING_EVENTS: usize = 64;

/// What happened on one lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    /// Points from the line clear
    pub clear_score: u32,
    /// Points from the hard drop that caused the lock (0 for gravity/soft drops)
    pub drop_score: u32,
    /// Level after the lock
    pub level: u32,
    pub leveled_up: bool,
    pub game_over: bool,
}

/// Complete puzzle game state
#[derive(Debug, Clone)]
pub struct PuzzleGame<R = SimpleRng> {
    board: Board,
    active: Piece,
    next: PieceKind,
    rng: R,
    phase: Phase,
    score: u32,
    level: u32,
    lines: u32,
    /// Seconds per gravity step; only recomputed on level-up
    drop_interval: f64,
    clock: FixedTimestep,
    /// Locks not yet taken, oldest first
    events: VecDeque<LockEvent>,
}

impl<R: RandomSource> PuzzleGame<R> {
    /// Create an idle game. The first active and next pieces are already drawn
    /// so the idle screen has something to show.
    pub fn new(mut rng: R) -> Self {
        let active = Piece::spawn(random_kind(&mut rng));
        let next = random_kind(&mut rng);

        Self {
            board: Board::new(),
            active,
            next,
            rng,
            phase: Phase::Idle,
            score: 0,
            level: 1,
            lines: 0,
            drop_interval: drop_interval_secs(1),
            clock: FixedTimestep::new(),
            events: VecDeque::with_capacity(MAX_PENDING_EVENTS),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    pub fn drop_interval_secs(&self) -> f64 {
        self.drop_interval
    }

    /// Swap in a prepared board, returning the old one.
    ///
    /// Used to set up positions; the active piece is left as is.
    pub fn replace_board(&mut self, board: Board) -> Board {
        std::mem::replace(&mut self.board, board)
    }

    /// Start a game. Only effective when not already running (idle or game over).
    pub fn start(&mut self) -> bool {
        match self.phase {
            Phase::Idle | Phase::GameOver => {
                self.reset();
                true
            }
            Phase::Running | Phase::Paused => false,
        }
    }

    /// Full reinitialization into `Running`, from any state.
    ///
    /// Unspent gravity time is dropped as well: the first row of a new game
    /// always waits a full interval.
    pub fn reset(&mut self) {
        self.board.clear();
        self.active = Piece::spawn(random_kind(&mut self.rng));
        self.next = random_kind(&mut self.rng);
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.drop_interval = drop_interval_secs(1);
        self.phase = Phase::Running;
        self.events.clear();
        self.clock.reset_accumulator();
    }

    /// Running ↔ Paused. No-op from idle or game over.
    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            _ => return false,
        };
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(1)
    }

    fn try_shift(&mut self, dx: i8) -> bool {
        if !self.phase.is_running() || self.board.collides(&self.active, dx, 0) {
            return false;
        }
        self.active = self.active.shifted(dx, 0);
        true
    }

    /// Move down one row, or lock if the piece is resting.
    ///
    /// Returns `false` only when input is not accepted (not running).
    pub fn soft_drop(&mut self) -> bool {
        if !self.phase.is_running() {
            return false;
        }
        self.step_down();
        true
    }

    /// Drop to the lowest free row, award the hard-drop bonus and lock.
    ///
    /// Returns the distance fallen, or `None` when not running.
    pub fn hard_drop(&mut self) -> Option<u32> {
        if !self.phase.is_running() {
            return None;
        }

        let mut distance: i8 = 0;
        while !self.board.collides(&self.active, 0, distance + 1) {
            distance += 1;
        }
        self.active = self.active.shifted(0, distance);

        let bonus = hard_drop_score(distance as u32, self.level);
        self.score = self.score.saturating_add(bonus);
        self.lock(bonus);

        Some(distance as u32)
    }

    /// Rotate clockwise with horizontal wall kicks; unchanged if every kick is blocked.
    pub fn rotate_cw(&mut self) -> bool {
        if !self.phase.is_running() {
            return false;
        }

        let board = &self.board;
        match try_rotate(&self.active, |p| board.collides(p, 0, 0)) {
            Some((rotated, _kick)) => {
                self.active = rotated;
                true
            }
            None => false,
        }
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: PuzzleAction) -> bool {
        match action {
            PuzzleAction::MoveLeft => self.move_left(),
            PuzzleAction::MoveRight => self.move_right(),
            PuzzleAction::RotateCw => self.rotate_cw(),
            PuzzleAction::SoftDrop => self.soft_drop(),
            PuzzleAction::HardDrop => self.hard_drop().is_some(),
            PuzzleAction::Start => self.start(),
            PuzzleAction::Pause => self.toggle_pause(),
            PuzzleAction::Restart => {
                self.reset();
                true
            }
        }
    }

    /// Run one frame of the fixed-timestep driver.
    ///
    /// `now` is the current time in seconds. Time only accumulates while
    /// running, so pauses never cause a burst of catch-up drops. The drop
    /// interval is re-read after every step because a lock can level up.
    /// [`reset`](Self::reset) clears whatever time is banked.
    /// Returns the number of gravity steps executed.
    pub fn advance(&mut self, now: f64) -> u32 {
        let dt = self.clock.frame_delta(now);
        if !self.phase.is_running() {
            return 0;
        }
        self.clock.accumulate(dt);

        let mut steps = 0;
        while self.phase.is_running() && self.clock.try_step(self.drop_interval) {
            self.step_down();
            steps += 1;
        }
        steps
    }

    /// Gravity: one row down, or lock when blocked.
    fn step_down(&mut self) {
        if self.board.collides(&self.active, 0, 1) {
            self.lock(0);
        } else {
            self.active = self.active.shifted(0, 1);
        }
    }

    /// Merge the active piece, clear rows, score, and spawn the next piece.
    fn lock(&mut self, drop_score: u32) {
        self.board.merge(&self.active);

        let cleared = self.board.clear_full_rows().len();
        let mut clear_score = 0;
        let mut leveled_up = false;

        if cleared > 0 {
            self.lines += cleared as u32;
            // Scored at the level the lines were cleared on.
            clear_score = line_clear_score(cleared, self.level);
            self.score = self.score.saturating_add(clear_score);

            let new_level = level_for_lines(self.lines);
            if new_level > self.level {
                self.level = new_level;
                self.drop_interval = drop_interval_secs(new_level);
                leveled_up = true;
            }
        }

        self.active = Piece::spawn(self.next);
        self.next = random_kind(&mut self.rng);

        let game_over = self.board.collides(&self.active, 0, 0);
        if game_over {
            self.phase = Phase::GameOver;
        }

        if self.events.len() == MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(LockEvent {
            lines_cleared: cleared as u32,
            clear_score,
            drop_score,
            level: self.level,
            leveled_up,
            game_over,
        });
    }

    /// Drain the lock events recorded since the last call, oldest first.
    ///
    /// A delayed frame can lock several pieces inside one `advance`.
    pub fn take_events(&mut self) -> impl Iterator<Item = LockEvent> + '_ {
        self.events.drain(..)
    }

    pub fn snapshot_into(&self, out: &mut PuzzleSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active.into();
        out.next = self.next;
        out.phase = self.phase;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.drop_interval_secs = self.drop_interval;
    }

    pub fn snapshot(&self) -> PuzzleSnapshot {
        let mut s = PuzzleSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for PuzzleGame<SimpleRng> {
    fn default() -> Self {
        Self::new(SimpleRng::default())
    }
}
