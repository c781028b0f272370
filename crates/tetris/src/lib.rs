//! Tetris game logic.
//!
//! The playfield is 10 columns by 20 rows. Pieces spawn at a fixed anchor,
//! fall on a gravity timer, and lock into the board when a downward move is
//! blocked. Locking clears full rows and scores them superlinearly.
//!
//! # Game Rules
//!
//! - Pieces move and rotate only when the target cells are free; blocked
//!   inputs are dropped without feedback.
//! - Rotation is a matrix quarter-turn with no wall kicks.
//! - Soft drop nudges the piece one row down and never locks it; only the
//!   gravity timer and hard drop commit a piece to the board.
//! - Clearing `n` rows at once scores `n * n * 100`; a hard drop adds a
//!   flat 20.
//! - A spawn is attempted after every lock. If the new piece would overlap
//!   the stack, the game ends with the board frozen as-is.
//!
//! # Example
//!
//! ```
//! use pocket_arcade_tetris::TetrisGame;
//! use pocket_arcade_types::TetrisAction;
//!
//! let mut game = TetrisGame::new(42);
//! game.apply_action(TetrisAction::MoveLeft);
//! game.apply_action(TetrisAction::HardDrop);
//! assert!(game.score() >= 20);
//! ```

pub mod board;
pub mod game;
pub mod pieces;
pub mod scoring;
pub mod snapshot;

pub use pocket_arcade_types as types;

pub use board::Board;
pub use game::{ActivePiece, TetrisGame};
pub use pieces::{PieceKind, Shape, SPAWN_POS};
pub use scoring::line_clear_score;
pub use snapshot::TetrisSnapshot;
