//! Key mapping from terminal events to game actions.

use crate::types::{Direction, PuzzleAction, SnakeAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Arrow keys, WASD and vi keys as a direction.
fn direction_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k' | 'K') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j' | 'J') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h' | 'H') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l' | 'L') => Some(Direction::Right),
        _ => None,
    }
}

/// Map keyboard input to puzzle actions.
///
/// Up rotates and Down soft-drops; Space is a hard drop.
pub fn puzzle_action(key: KeyEvent) -> Option<PuzzleAction> {
    if let Some(dir) = direction_key(key.code) {
        return Some(match dir {
            Direction::Up => PuzzleAction::RotateCw,
            Direction::Down => PuzzleAction::SoftDrop,
            Direction::Left => PuzzleAction::MoveLeft,
            Direction::Right => PuzzleAction::MoveRight,
        });
    }

    match key.code {
        KeyCode::Char(' ') => Some(PuzzleAction::HardDrop),
        KeyCode::Char('p' | 'P') => Some(PuzzleAction::Pause),
        KeyCode::Enter => Some(PuzzleAction::Start),
        KeyCode::Char('r' | 'R') => Some(PuzzleAction::Restart),
        _ => None,
    }
}

/// Map keyboard input to snake actions.
///
/// Space pauses, like P.
pub fn snake_action(key: KeyEvent) -> Option<SnakeAction> {
    if let Some(dir) = direction_key(key.code) {
        return Some(SnakeAction::Turn(dir));
    }

    match key.code {
        KeyCode::Char(' ' | 'p' | 'P') => Some(SnakeAction::Pause),
        KeyCode::Enter => Some(SnakeAction::Start),
        KeyCode::Char('r' | 'R') => Some(SnakeAction::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
