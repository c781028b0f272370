//! Shared types module - vocabulary common to both arcade games
//!
//! This module defines the grid coordinates, directions, per-game actions,
//! and timing constants used throughout the workspace. Everything here is
//! pure data with no external dependencies, so the engine crates stay
//! deterministic and trivially testable.
//!
//! # Grid Dimensions
//!
//! - **Snake**: 20x20 toroidal grid (moving off one edge re-enters the
//!   opposite edge)
//! - **Tetris**: 10 columns x 20 rows, row 0 at the top, spawn anchor (3, 0)
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds. Both games run off a fixed 16ms shell
//! tick and accumulate elapsed time until their own move interval expires.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `SNAKE_STEP_BASE_MS` | 180 | Snake step interval at score 0 |
//! | `SNAKE_STEP_FLOOR_MS` | 60 | Fastest snake step interval |
//! | `DROP_BASE_MS` | 800 | Tetris gravity interval at score 0 |
//! | `DROP_FLOOR_MS` | 100 | Fastest tetris gravity interval |
//!
//! # Speed Curves
//!
//! Both games speed up in discrete steps as the score grows:
//!
//! - Snake: `max(60, 180 - 10 * (score / 50))`
//! - Tetris: `max(100, 800 - 100 * (score / 500))`
//!
//! # Examples
//!
//! ```
//! use pocket_arcade_types::{Axis, Direction, Vec2, SNAKE_GRID};
//!
//! let dir = Direction::Left;
//! assert_eq!(dir.delta(), Vec2::new(-1, 0));
//! assert_eq!(dir.axis(), Axis::Horizontal);
//!
//! // A reversal shares its axis with the current heading.
//! assert_eq!(Direction::Right.axis(), dir.axis());
//!
//! assert_eq!(SNAKE_GRID, 20);
//! ```

pub mod rng;

pub use rng::SimpleRng;

/// Snake grid side length (20x20 cells, toroidal)
pub const SNAKE_GRID: i8 = 20;

/// Tetris board width in cells (10 columns)
pub const BOARD_COLS: i8 = 10;

/// Tetris board height in cells (20 rows)
pub const BOARD_ROWS: i8 = 20;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Snake step interval at score 0 (180ms per move)
pub const SNAKE_STEP_BASE_MS: u32 = 180;

/// Snake step interval floor (60ms per move)
pub const SNAKE_STEP_FLOOR_MS: u32 = 60;

/// Snake speed-up per tier (10ms faster per 50 points)
pub const SNAKE_STEP_DECAY_MS: u32 = 10;

/// Snake score tier width for the speed curve (50 points)
pub const SNAKE_STEP_TIER_POINTS: u32 = 50;

/// Tetris gravity interval at score 0 (800ms per row)
pub const DROP_BASE_MS: u32 = 800;

/// Tetris gravity interval floor (100ms per row)
pub const DROP_FLOOR_MS: u32 = 100;

/// Tetris speed-up per tier (100ms faster per 500 points)
pub const DROP_DECAY_MS: u32 = 100;

/// Tetris score tier width for the speed curve (500 points)
pub const DROP_TIER_POINTS: u32 = 500;

/// Points per food eaten (Snake)
pub const FOOD_POINTS: u32 = 10;

/// Line clear scoring unit; a lock clearing `n` rows awards `n² × 100`
pub const LINE_SCORE_UNIT: u32 = 100;

/// Flat bonus for a hard-drop-triggered lock (Tetris)
pub const HARD_DROP_POINTS: u32 = 20;

/// A grid cell coordinate or translation delta
///
/// Both games use small signed components: Snake coordinates stay within
/// `[0, 20)` after wrapping, while Tetris piece cells may sit above row 0
/// (negative y) while spawning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vec2 {
    pub x: i8,
    pub y: i8,
}

impl Vec2 {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }
}

/// Movement axis, used by the Snake turn rule
///
/// A turn is accepted only when it changes axis; reversals and repeated
/// presses of the current heading share an axis and are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// The four cardinal headings
///
/// Deltas follow screen coordinates: y grows downward, so `Up` is `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit translation for this heading
    ///
    /// # Examples
    ///
    /// ```
    /// use pocket_arcade_types::{Direction, Vec2};
    ///
    /// assert_eq!(Direction::Up.delta(), Vec2::new(0, -1));
    /// assert_eq!(Direction::Down.delta(), Vec2::new(0, 1));
    /// ```
    pub fn delta(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0, -1),
            Direction::Down => Vec2::new(0, 1),
            Direction::Left => Vec2::new(-1, 0),
            Direction::Right => Vec2::new(1, 0),
        }
    }

    /// Axis this heading moves along
    pub fn axis(&self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }
}

/// Actions the shell can apply to a Snake game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeAction {
    /// Request a new heading (takes effect on the next step)
    Turn(Direction),
    /// Restart from the fixed initial state
    Restart,
}

/// Actions the shell can apply to a Tetris game
///
/// Each action maps 1:1 to one engine operation; there is no input
/// auto-repeat layer between the key event and the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TetrisAction {
    /// Move the active piece one column left
    MoveLeft,
    /// Move the active piece one column right
    MoveRight,
    /// Move the active piece one row down (no lock on failure)
    SoftDrop,
    /// Drop the active piece to its resting row and lock it
    HardDrop,
    /// Rotate the active piece 90° clockwise (no wall kicks)
    Rotate,
    /// Restart with an empty board
    Restart,
}

/// The two games the launcher can open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameId {
    Snake,
    Tetris,
}
