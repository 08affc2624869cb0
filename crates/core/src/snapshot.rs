//! Drawable state snapshots handed to the presentation layer once per frame.

use crate::pieces::{base_shape, Piece, PieceShape};
use crate::types::{
    Cell, Direction, Phase, PieceKind, Point, BOARD_HEIGHT, BOARD_WIDTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    pub cells: PieceShape,
}

impl ActiveSnapshot {
    /// Absolute positions of the active piece's cells
    pub fn positions(&self) -> [(i8, i8); 4] {
        self.cells.map(|(dx, dy)| (self.x + dx, self.y + dy))
    }
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            x: value.x,
            y: value.y,
            cells: value.cells,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PuzzleSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: ActiveSnapshot,
    pub next: PieceKind,
    pub phase: Phase,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_secs: f64,
}

impl PuzzleSnapshot {
    /// Base shape of the next piece, for the preview box
    pub fn next_shape(&self) -> PieceShape {
        base_shape(self.next)
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

impl Default for PuzzleSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: Piece::spawn(PieceKind::I).into(),
            next: PieceKind::I,
            phase: Phase::Idle,
            score: 0,
            level: 1,
            lines: 0,
            drop_interval_secs: 0.0,
        }
    }
}

/// How a snake game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnakeOutcome {
    WallCollision,
    SelfCollision,
    /// Every cell is snake; there is nowhere left to place food.
    BoardFilled,
}

impl SnakeOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            SnakeOutcome::WallCollision => "wall",
            SnakeOutcome::SelfCollision => "self",
            SnakeOutcome::BoardFilled => "boardFilled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeSnapshot {
    /// Head first
    pub segments: Vec<Point>,
    pub food: Option<Point>,
    pub direction: Direction,
    pub phase: Phase,
    pub outcome: Option<SnakeOutcome>,
    pub score: u32,
    pub high_score: u32,
    /// Steps per second
    pub speed: u32,
}

impl SnakeSnapshot {
    pub fn head(&self) -> Option<Point> {
        self.segments.first().copied()
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}
