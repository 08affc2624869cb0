//! Snake game state - grid movement engine and lifecycle
//!
//! The snake lives on a `SNAKE_GRID` x `SNAKE_GRID` square without wrapping.
//! Turns are buffered in `next_direction` and applied at the start of each
//! step, so several key presses between steps can never fold the snake back
//! onto itself.

use std::collections::VecDeque;

use crate::highscore::{HighScoreStore, MemoryHighScore};
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::{SnakeOutcome, SnakeSnapshot};
use crate::timestep::FixedTimestep;
use crate::types::{
    Direction, Phase, Point, SnakeAction, SNAKE_BASE_SPEED, SNAKE_GRID, SNAKE_INITIAL_LENGTH,
    SNAKE_POINTS_PER_SPEEDUP,
};

/// Total number of cells on the snake grid
const GRID_CELLS: usize = (SNAKE_GRID as usize) * (SNAKE_GRID as usize);

/// Result of a single simulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// Head advanced, tail followed
    Moved,
    /// Head landed on food; the snake grew by one
    Ate,
    /// Game ended on this step
    Ended(SnakeOutcome),
}

#[derive(Debug, Clone)]
pub struct SnakeGame<R = SimpleRng, S = MemoryHighScore> {
    /// Head first
    segments: VecDeque<Point>,
    direction: Direction,
    next_direction: Direction,
    food: Option<Point>,
    score: u32,
    high_score: u32,
    phase: Phase,
    outcome: Option<SnakeOutcome>,
    rng: R,
    store: S,
    clock: FixedTimestep,
}

impl<R: RandomSource, S: HighScoreStore> SnakeGame<R, S> {
    /// Idle game with an empty grid. The high score is loaded from `store` once.
    pub fn new(rng: R, mut store: S) -> Self {
        let high_score = store.load();
        Self {
            segments: VecDeque::with_capacity(GRID_CELLS),
            direction: Direction::Right,
            next_direction: Direction::Right,
            food: None,
            score: 0,
            high_score,
            phase: Phase::Idle,
            outcome: None,
            rng,
            store,
            clock: FixedTimestep::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn next_direction(&self) -> Direction {
        self.next_direction
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    pub fn outcome(&self) -> Option<SnakeOutcome> {
        self.outcome
    }

    pub fn head(&self) -> Option<Point> {
        self.segments.front().copied()
    }

    pub fn segments(&self) -> impl Iterator<Item = &Point> + '_ {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Steps per second at the current score
    pub fn current_speed(&self) -> u32 {
        SNAKE_BASE_SPEED + self.score / SNAKE_POINTS_PER_SPEEDUP
    }

    /// Fresh 3-segment snake heading right from the grid centre, into `Running`.
    ///
    /// Works from any state; the high score is kept.
    pub fn new_game(&mut self) {
        let mid = SNAKE_GRID / 2;
        self.segments.clear();
        for i in 1..=SNAKE_INITIAL_LENGTH {
            self.segments.push_back(Point::new(mid - i, mid));
        }
        self.direction = Direction::Right;
        self.next_direction = Direction::Right;
        self.score = 0;
        self.outcome = None;
        self.phase = Phase::Running;
        self.place_food();
    }

    pub fn restart(&mut self) {
        self.new_game();
    }

    /// Begin a game when none is in progress (idle or game over).
    pub fn start(&mut self) -> bool {
        match self.phase {
            Phase::Idle | Phase::GameOver => {
                self.new_game();
                true
            }
            Phase::Running | Phase::Paused => false,
        }
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            _ => return false,
        };
        true
    }

    /// Buffer a turn for the next step.
    ///
    /// Rejected when it reverses the applied direction, or when no game is
    /// in progress.
    pub fn set_direction(&mut self, dir: Direction) -> bool {
        if !matches!(self.phase, Phase::Running | Phase::Paused) {
            return false;
        }
        if dir.is_opposite(self.direction) {
            return false;
        }
        self.next_direction = dir;
        true
    }

    pub fn apply_action(&mut self, action: SnakeAction) -> bool {
        match action {
            SnakeAction::Turn(dir) => self.set_direction(dir),
            SnakeAction::Start => self.start(),
            SnakeAction::Pause => self.toggle_pause(),
            SnakeAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// One simulation step. Returns `None` when the game is not running.
    pub fn tick(&mut self) -> Option<StepResult> {
        if !self.phase.is_running() {
            return None;
        }
        let head = self.head()?;

        self.direction = self.next_direction;
        let next = head.step(self.direction);

        if !next.in_square(SNAKE_GRID) {
            return Some(self.end(SnakeOutcome::WallCollision));
        }
        // The tail has not moved yet, so stepping into it is a crash.
        if self.segments.contains(&next) {
            return Some(self.end(SnakeOutcome::SelfCollision));
        }

        self.segments.push_front(next);

        if self.food == Some(next) {
            self.score += 1;
            if self.score > self.high_score {
                self.high_score = self.score;
                self.store.save(self.high_score);
            }
            if !self.place_food() {
                return Some(self.end(SnakeOutcome::BoardFilled));
            }
            Some(StepResult::Ate)
        } else {
            self.segments.pop_back();
            Some(StepResult::Moved)
        }
    }

    fn end(&mut self, outcome: SnakeOutcome) -> StepResult {
        self.phase = Phase::GameOver;
        self.outcome = Some(outcome);
        StepResult::Ended(outcome)
    }

    /// Put food on a random free cell. Returns `false` when the snake covers
    /// the whole grid.
    fn place_food(&mut self) -> bool {
        if self.segments.len() >= GRID_CELLS {
            self.food = None;
            return false;
        }

        let size = SNAKE_GRID as u32;
        loop {
            let candidate = Point::new(
                self.rng.next_below(size) as i16,
                self.rng.next_below(size) as i16,
            );
            if !self.segments.contains(&candidate) {
                self.food = Some(candidate);
                return true;
            }
        }
    }

    /// Run one frame of the fixed-timestep driver at time `now` (seconds).
    ///
    /// Time always accumulates, even when idle or paused; the step length is
    /// fixed for the whole frame from the speed at its start. Drained steps
    /// only simulate while running. Returns the number of simulation steps run.
    pub fn advance(&mut self, now: f64) -> u32 {
        let step = 1.0 / self.current_speed() as f64;
        let steps = self.clock.advance(now, step);

        let mut ticks = 0;
        for _ in 0..steps {
            if self.tick().is_some() {
                ticks += 1;
            }
        }
        ticks
    }

    pub fn snapshot(&self) -> SnakeSnapshot {
        SnakeSnapshot {
            segments: self.segments.iter().copied().collect(),
            food: self.food,
            direction: self.direction,
            phase: self.phase,
            outcome: self.outcome,
            score: self.score,
            high_score: self.high_score,
            speed: self.current_speed(),
        }
    }
}

impl Default for SnakeGame<SimpleRng, MemoryHighScore> {
    fn default() -> Self {
        Self::new(SimpleRng::default(), MemoryHighScore::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;

    /// Game whose food lands on the scripted cells, in order.
    fn game_with_food(cells: &[(u32, u32)], high: u32) -> SnakeGame<ScriptedRng, MemoryHighScore> {
        let values: Vec<u32> = cells.iter().flat_map(|&(x, y)| [x, y]).collect();
        SnakeGame::new(ScriptedRng::new(values), MemoryHighScore::new(high))
    }

    fn points(game: &SnakeGame<ScriptedRng, MemoryHighScore>) -> Vec<(i16, i16)> {
        game.segments().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn new_game_layout() {
        let mut game = game_with_food(&[(0, 0)], 7);
        assert_eq!(game.phase(), Phase::Idle);
        assert!(game.is_empty());
        assert_eq!(game.high_score(), 7);

        game.new_game();
        assert_eq!(game.phase(), Phase::Running);
        assert_eq!(points(&game), vec![(9, 10), (8, 10), (7, 10)]);
        assert_eq!(game.direction(), Direction::Right);
        assert_eq!(game.food(), Some(Point::new(0, 0)));
        assert_eq!(game.score(), 0);
        assert_eq!(game.high_score(), 7);
    }

    #[test]
    fn food_rejection_sampling_skips_snake_cells() {
        // First draw hits the body at (8, 10).
        let mut game = game_with_food(&[(8, 10), (3, 4)], 0);
        game.new_game();
        assert_eq!(game.food(), Some(Point::new(3, 4)));
    }

    #[test]
    fn tick_moves_head_and_drops_tail() {
        let mut game = game_with_food(&[(0, 0)], 0);
        game.new_game();

        assert_eq!(game.tick(), Some(StepResult::Moved));
        assert_eq!(points(&game), vec![(10, 10), (9, 10), (8, 10)]);
    }

    #[test]
    fn eating_grows_and_saves_high_score() {
        let mut game = game_with_food(&[(10, 10), (0, 0)], 0);
        game.new_game();

        assert_eq!(game.tick(), Some(StepResult::Ate));
        assert_eq!(game.len(), 4);
        assert_eq!(game.score(), 1);
        assert_eq!(game.high_score(), 1);
        assert_eq!(game.store().saves(), &[1]);
        assert_eq!(game.food(), Some(Point::new(0, 0)));
    }

    #[test]
    fn high_score_only_saved_when_exceeded() {
        let mut game = game_with_food(&[(10, 10), (0, 0)], 5);
        game.new_game();
        game.tick();
        assert_eq!(game.score(), 1);
        assert_eq!(game.high_score(), 5);
        assert!(game.store().saves().is_empty());
    }

    #[test]
    fn reverse_turn_is_ignored() {
        let mut game = game_with_food(&[(0, 0)], 0);
        game.new_game();
        assert!(!game.set_direction(Direction::Left));
        assert_eq!(game.next_direction(), Direction::Right);
        assert!(game.set_direction(Direction::Up));
    }

    #[test]
    fn double_turn_between_steps_cannot_reverse() {
        let mut game = game_with_food(&[(0, 0)], 0);
        game.new_game();
        // Up is buffered, then Left is checked against the applied Right.
        assert!(game.set_direction(Direction::Up));
        assert!(!game.set_direction(Direction::Left));
        game.tick();
        assert_eq!(game.head(), Some(Point::new(9, 9)));
    }

    #[test]
    fn direction_ignored_when_idle_or_over() {
        let mut game = game_with_food(&[(0, 0)], 0);
        assert!(!game.set_direction(Direction::Up));

        game.new_game();
        game.toggle_pause();
        assert!(game.set_direction(Direction::Down));
    }

    #[test]
    fn wall_collision_ends_game() {
        let mut game = game_with_food(&[(0, 0)], 0);
        game.new_game();
        // Head at x=9; ten steps reach x=19, the eleventh leaves the grid.
        for _ in 0..10 {
            assert_eq!(game.tick(), Some(StepResult::Moved));
        }
        let before = points(&game);
        assert_eq!(
            game.tick(),
            Some(StepResult::Ended(SnakeOutcome::WallCollision))
        );
        assert_eq!(game.phase(), Phase::GameOver);
        assert_eq!(game.outcome(), Some(SnakeOutcome::WallCollision));
        assert_eq!(points(&game), before);
        assert_eq!(game.tick(), None);
    }

    #[test]
    fn stepping_into_current_tail_is_a_crash() {
        let mut game = game_with_food(&[(10, 10), (0, 0)], 0);
        game.new_game();
        game.tick();
        // Length 4 body: (10,10) (9,10) (8,10) (7,10). Tail will be (9,10)
        // after two more moves; a 2x2 turn steps onto it.
        game.set_direction(Direction::Down);
        game.tick();
        game.set_direction(Direction::Left);
        game.tick();
        assert_eq!(points(&game), vec![(9, 11), (10, 11), (10, 10), (9, 10)]);
        game.set_direction(Direction::Up);
        assert_eq!(
            game.tick(),
            Some(StepResult::Ended(SnakeOutcome::SelfCollision))
        );
    }

    #[test]
    fn filling_the_grid_is_a_win() {
        let mut game = game_with_food(&[(0, 0)], 0);
        game.new_game();
        // Fill every cell except (10, 10), where the food sits.
        game.segments.clear();
        game.segments.push_back(Point::new(9, 10));
        for y in 0..SNAKE_GRID {
            for x in 0..SNAKE_GRID {
                let p = Point::new(x, y);
                if p != Point::new(9, 10) && p != Point::new(10, 10) {
                    game.segments.push_back(p);
                }
            }
        }
        game.food = Some(Point::new(10, 10));

        assert_eq!(
            game.tick(),
            Some(StepResult::Ended(SnakeOutcome::BoardFilled))
        );
        assert_eq!(game.len(), GRID_CELLS);
        assert_eq!(game.food(), None);
        assert_eq!(game.phase(), Phase::GameOver);
    }

    #[test]
    fn start_and_pause_rules() {
        let mut game = game_with_food(&[(0, 0)], 0);
        assert!(!game.toggle_pause());
        assert!(game.start());
        assert!(!game.start());
        assert!(game.toggle_pause());
        assert_eq!(game.phase(), Phase::Paused);
        assert!(!game.start());
        assert_eq!(game.tick(), None);
        assert!(game.toggle_pause());
        assert_eq!(game.phase(), Phase::Running);
    }

    #[test]
    fn restart_keeps_high_score() {
        let mut game = game_with_food(&[(10, 10), (0, 0)], 0);
        game.new_game();
        game.tick();
        assert!(game.apply_action(SnakeAction::Restart));
        assert_eq!(game.score(), 0);
        assert_eq!(game.high_score(), 1);
        assert_eq!(game.len(), 3);
    }

    #[test]
    fn speed_grows_every_ten_points() {
        let mut game = game_with_food(&[(0, 0)], 0);
        assert_eq!(game.current_speed(), 4);
        game.score = 9;
        assert_eq!(game.current_speed(), 4);
        game.score = 10;
        assert_eq!(game.current_speed(), 5);
        game.score = 25;
        assert_eq!(game.current_speed(), 6);
    }

    #[test]
    fn advance_steps_at_speed() {
        let mut game = game_with_food(&[(0, 0)], 0);
        game.new_game();
        assert_eq!(game.advance(0.0), 0);
        assert_eq!(game.advance(0.25), 1);
        assert_eq!(game.advance(1.0), 3);
        assert_eq!(game.head(), Some(Point::new(13, 10)));
    }

    #[test]
    fn advance_drains_without_ticking_while_paused() {
        let mut game = game_with_food(&[(0, 0)], 0);
        game.new_game();
        game.advance(0.0);
        game.toggle_pause();
        assert_eq!(game.advance(1.0), 0);
        game.toggle_pause();
        // The paused second was drained, not saved up.
        assert_eq!(game.advance(1.125), 0);
        assert_eq!(game.head(), Some(Point::new(9, 10)));
    }

    #[test]
    fn snapshot_is_head_first() {
        let mut game = game_with_food(&[(2, 3)], 4);
        game.new_game();
        let snap = game.snapshot();
        assert_eq!(snap.head(), Some(Point::new(9, 10)));
        assert_eq!(snap.segments.len(), 3);
        assert_eq!(snap.food, Some(Point::new(2, 3)));
        assert_eq!(snap.high_score, 4);
        assert_eq!(snap.speed, 4);
        assert_eq!(snap.outcome, None);
    }
}
