//! Snake game tests - movement, growth, endings and timing through the public API

use arcade::core::{MemoryHighScore, ScriptedRng, SnakeGame, SnakeOutcome, StepResult};
use arcade::types::{Direction, Phase, Point, SnakeAction, SNAKE_GRID};

/// A started game whose food draws come from `food` as x, y pairs.
fn game_with_food(food: Vec<u32>, high: u32) -> SnakeGame<ScriptedRng, MemoryHighScore> {
    let mut game = SnakeGame::new(ScriptedRng::new(food), MemoryHighScore::new(high));
    game.start();
    game
}

#[test]
fn test_idle_until_started() {
    let mut game = SnakeGame::new(ScriptedRng::new(vec![0]), MemoryHighScore::new(7));

    assert_eq!(game.phase(), Phase::Idle);
    assert!(game.is_empty());
    assert_eq!(game.food(), None);
    assert_eq!(game.high_score(), 7);
    assert_eq!(game.tick(), None);
    assert!(!game.set_direction(Direction::Up));

    assert!(game.apply_action(SnakeAction::Start));
    assert_eq!(game.phase(), Phase::Running);
    assert_eq!(game.len(), 3);
    assert_eq!(game.head(), Some(Point::new(9, 10)));
    assert_eq!(game.direction(), Direction::Right);
}

#[test]
fn test_runs_into_right_wall() {
    let mut game = game_with_food(vec![0, 0], 0);

    // Head at x = 9: ten free cells to the right, the eleventh is the wall.
    for _ in 0..10 {
        assert_eq!(game.tick(), Some(StepResult::Moved));
    }
    assert_eq!(
        game.tick(),
        Some(StepResult::Ended(SnakeOutcome::WallCollision))
    );
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.outcome(), Some(SnakeOutcome::WallCollision));
    assert_eq!(game.head(), Some(Point::new(SNAKE_GRID - 1, 10)));
    assert_eq!(game.tick(), None);
}

#[test]
fn test_eats_grows_and_records_high_score() {
    let mut game = game_with_food(vec![12, 10, 0, 0], 0);
    assert_eq!(game.food(), Some(Point::new(12, 10)));

    assert_eq!(game.tick(), Some(StepResult::Moved));
    assert_eq!(game.tick(), Some(StepResult::Moved));
    assert_eq!(game.tick(), Some(StepResult::Ate));

    assert_eq!(game.score(), 1);
    assert_eq!(game.len(), 4);
    assert_eq!(game.high_score(), 1);
    assert_eq!(game.store().saves(), &[1]);
    assert_eq!(game.food(), Some(Point::new(0, 0)));

    // Length stays at 4 on plain moves.
    assert_eq!(game.tick(), Some(StepResult::Moved));
    assert_eq!(game.len(), 4);
}

#[test]
fn test_lower_score_leaves_high_score_alone() {
    let mut game = game_with_food(vec![10, 10, 0, 0], 5);

    assert_eq!(game.tick(), Some(StepResult::Ate));
    assert_eq!(game.score(), 1);
    assert_eq!(game.high_score(), 5);
    assert!(game.store().saves().is_empty());
}

#[test]
fn test_food_skips_snake_cells() {
    // (8, 10) is under the body; the next draw is free.
    let game = game_with_food(vec![8, 10, 3, 4], 0);
    assert_eq!(game.food(), Some(Point::new(3, 4)));
}

#[test]
fn test_reverse_turn_ignored() {
    let mut game = game_with_food(vec![0, 0], 0);

    assert!(!game.set_direction(Direction::Left));
    assert!(game.set_direction(Direction::Up));
    // Still moving right until the next step applies the turn.
    assert!(!game.set_direction(Direction::Left));
    assert_eq!(game.next_direction(), Direction::Up);

    game.tick();
    assert_eq!(game.head(), Some(Point::new(9, 9)));
    assert!(game.set_direction(Direction::Left));
}

#[test]
fn test_turning_into_body_crashes() {
    // Grow to five, then loop back onto the body.
    let mut game = game_with_food(vec![10, 10, 11, 10, 0, 0], 0);
    assert_eq!(game.tick(), Some(StepResult::Ate));
    assert_eq!(game.tick(), Some(StepResult::Ate));
    assert_eq!(game.len(), 5);

    game.set_direction(Direction::Down);
    game.tick();
    game.set_direction(Direction::Left);
    game.tick();
    game.set_direction(Direction::Up);

    assert_eq!(
        game.tick(),
        Some(StepResult::Ended(SnakeOutcome::SelfCollision))
    );
    assert_eq!(game.outcome(), Some(SnakeOutcome::SelfCollision));
}

#[test]
fn test_pause_freezes_ticks_and_keeps_turns() {
    let mut game = game_with_food(vec![0, 0], 0);

    assert!(game.apply_action(SnakeAction::Pause));
    assert_eq!(game.phase(), Phase::Paused);
    assert_eq!(game.tick(), None);
    assert!(game.apply_action(SnakeAction::Turn(Direction::Down)));

    assert!(game.apply_action(SnakeAction::Pause));
    game.tick();
    assert_eq!(game.head(), Some(Point::new(9, 11)));
}

#[test]
fn test_restart_keeps_high_score() {
    let mut game = game_with_food(vec![10, 10, 0, 0], 0);
    game.tick();
    assert_eq!(game.high_score(), 1);

    assert!(game.apply_action(SnakeAction::Restart));
    assert_eq!(game.score(), 0);
    assert_eq!(game.len(), 3);
    assert_eq!(game.high_score(), 1);
    assert_eq!(game.outcome(), None);
}

#[test]
fn test_advance_runs_at_current_speed() {
    let mut game = game_with_food(vec![0, 0], 0);
    game.advance(0.0);

    // 4 steps per second at score 0.
    assert_eq!(game.current_speed(), 4);
    assert_eq!(game.advance(1.1), 4);
    assert_eq!(game.head(), Some(Point::new(13, 10)));
}

#[test]
fn test_snapshot_matches_state() {
    let mut game = game_with_food(vec![15, 3], 2);
    game.tick();

    let snap = game.snapshot();
    assert_eq!(snap.segments.len(), 3);
    assert_eq!(snap.head(), Some(Point::new(10, 10)));
    assert_eq!(snap.food, Some(Point::new(15, 3)));
    assert_eq!(snap.high_score, 2);
    assert_eq!(snap.speed, 4);
    assert!(!snap.paused());
    assert!(!snap.game_over());
}
