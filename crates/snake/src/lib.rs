//! Snake engine - pure, deterministic, and testable
//!
//! This crate holds the complete Snake simulation with zero I/O. The shell
//! drives it through [`SnakeGame::tick`] with elapsed milliseconds, feeds it
//! [`SnakeAction`]s between ticks, and renders from read-only snapshots.
//!
//! # Game Rules
//!
//! - **Toroidal 20x20 grid**: there are no walls; leaving one edge re-enters
//!   the opposite edge
//! - **Movement**: the snake advances one cell per step; turns are accepted
//!   only onto the other axis, so direct reversals are silently ignored
//! - **Food**: eating grows the snake by one segment, awards 10 points, and
//!   respawns food on a uniformly random free cell (rejection sampling)
//! - **Loss**: running into any part of the body, tail included, ends the
//!   game; the board freezes until a restart
//! - **Speed**: step interval is `max(60, 180 - 10 * (score / 50))` ms
//!
//! # Example
//!
//! ```
//! use pocket_arcade_snake::SnakeGame;
//! use pocket_arcade_types::{Direction, SnakeAction};
//!
//! let mut game = SnakeGame::new(12345);
//! game.apply_action(SnakeAction::Turn(Direction::Left));
//! game.step();
//!
//! assert_eq!(game.body().len(), 3);
//! assert!(!game.game_over());
//! ```

pub mod game;
pub mod snapshot;

pub use pocket_arcade_types as types;

pub use game::{SnakeGame, SNAKE_MAX_LEN};
pub use snapshot::SnakeSnapshot;
