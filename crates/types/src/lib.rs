//! Shared data types and constants for both arcade games.
//!
//! Everything here is plain data with no external dependencies, so it can be
//! used by the simulation core, the terminal views and the input mapping alike.
//!
//! # Puzzle board
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn anchor**: (3, 0)
//!
//! # Puzzle timing
//!
//! Gravity is expressed in seconds per row:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_SECS` | 0.8 | Gravity at level 1 |
//! | `DROP_SECS_PER_LEVEL` | 0.06 | Speed-up per level |
//! | `MIN_DROP_SECS` | 0.15 | Fastest gravity |
//!
//! # Snake grid
//!
//! A square `SNAKE_GRID` x `SNAKE_GRID` field. Speed is measured in steps per
//! second: `SNAKE_BASE_SPEED + score / SNAKE_POINTS_PER_SPEEDUP`.
//!
//! # Examples
//!
//! ```
//! use arcade_types::{Direction, PieceKind, PuzzleAction, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! // On-screen button names parse to the same actions as keys.
//! assert_eq!(PuzzleAction::from_str("hard"), Some(PuzzleAction::HardDrop));
//!
//! assert!(Direction::Left.is_opposite(Direction::Right));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn anchor for every new piece
pub const SPAWN_X: i8 = 3;
pub const SPAWN_Y: i8 = 0;

/// Line clear base points, indexed by rows cleared in one lock (scaled by level)
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Hard drop bonus per row fallen (scaled by level)
pub const HARD_DROP_POINTS_PER_ROW: u32 = 2;

/// Lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Gravity interval at level 1, in seconds
pub const BASE_DROP_SECS: f64 = 0.8;

/// Gravity speed-up per level, in seconds
pub const DROP_SECS_PER_LEVEL: f64 = 0.06;

/// Gravity floor, in seconds
pub const MIN_DROP_SECS: f64 = 0.15;

/// Horizontal wall-kick offsets tried after a rotation, in priority order
pub const KICK_OFFSETS: [i8; 5] = [0, -1, 1, -2, 2];

/// Snake field size (square)
pub const SNAKE_GRID: i16 = 20;

/// Snake length at the start of a game
pub const SNAKE_INITIAL_LENGTH: i16 = 3;

/// Snake steps per second at score 0
pub const SNAKE_BASE_SPEED: u32 = 4;

/// Score needed for each extra step per second
pub const SNAKE_POINTS_PER_SPEEDUP: u32 = 10;

/// The seven piece kinds
///
/// Each kind has a fixed base shape (see `arcade_core::pieces`) and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in draw order for the uniform randomizer.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use arcade_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Uppercase display letter
    pub fn letter(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }

    /// Display color as (r, g, b)
    ///
    /// ```
    /// use arcade_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.rgb(), (0x00, 0xc2, 0xff));
    /// ```
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            PieceKind::I => (0x00, 0xc2, 0xff),
            PieceKind::O => (0xff, 0xd1, 0x66),
            PieceKind::T => (0xb7, 0x94, 0xf4),
            PieceKind::S => (0x06, 0xd6, 0xa0),
            PieceKind::Z => (0xef, 0x47, 0x6f),
            PieceKind::J => (0x4c, 0xc9, 0xf0),
            PieceKind::L => (0xf8, 0x96, 0x1e),
        }
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;

/// Lifecycle phase shared by both games
///
/// `Idle` is the state before the first start. `GameOver` is terminal until a
/// restart or start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    Running,
    Paused,
    GameOver,
}

impl Phase {
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Running)
    }
}

/// Puzzle game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleAction {
    MoveLeft,
    MoveRight,
    RotateCw,
    SoftDrop,
    HardDrop,
    Start,
    Pause,
    Restart,
}

impl PuzzleAction {
    /// Parse an action name.
    ///
    /// Accepts both the camelCase action names and the on-screen control
    /// names (`left`, `right`, `rotate`, `drop`, `hard`).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" | "left" => Some(PuzzleAction::MoveLeft),
            "moveright" | "right" => Some(PuzzleAction::MoveRight),
            "rotatecw" | "rotate" => Some(PuzzleAction::RotateCw),
            "softdrop" | "drop" => Some(PuzzleAction::SoftDrop),
            "harddrop" | "hard" => Some(PuzzleAction::HardDrop),
            "start" => Some(PuzzleAction::Start),
            "pause" => Some(PuzzleAction::Pause),
            "restart" => Some(PuzzleAction::Restart),
            _ => None,
        }
    }
}

/// Snake heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector (dx, dy); y grows downwards.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Parse a direction button name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Snake game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeAction {
    Turn(Direction),
    Start,
    Pause,
    Restart,
}

impl SnakeAction {
    /// Parse an action name; direction names (`up`, `left`, ...) become turns.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(SnakeAction::Start),
            "pause" => Some(SnakeAction::Pause),
            "restart" => Some(SnakeAction::Restart),
            other => Direction::from_str(other).map(SnakeAction::Turn),
        }
    }
}

/// Integer grid coordinate on the snake field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Neighbouring point one step in `dir`.
    pub fn step(&self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Whether the point lies inside a `size` x `size` field.
    pub fn in_square(&self, size: i16) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < size && self.y < size
    }
}
