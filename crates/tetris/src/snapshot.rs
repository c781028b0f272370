//! Read-only view of the game for rendering.

use crate::game::ActivePiece;
use crate::types::{BOARD_COLS, BOARD_ROWS};

/// Everything a renderer needs to draw one frame of Tetris.
///
/// The snapshot owns plain arrays and `Copy` data, so refreshing it each
/// frame via [`TetrisGame::snapshot_into`](crate::TetrisGame::snapshot_into)
/// never touches the heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TetrisSnapshot {
    /// Locked cells, row-major; 0 = empty, 1..=7 = piece color.
    pub board: [[u8; BOARD_COLS as usize]; BOARD_ROWS as usize],
    /// The falling piece, absent between a lock-induced game over and restart.
    pub active: Option<ActivePiece>,
    /// Row where the active piece would rest if dropped now.
    pub ghost_y: Option<i8>,
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
}

impl Default for TetrisSnapshot {
    fn default() -> Self {
        Self {
            board: [[0; BOARD_COLS as usize]; BOARD_ROWS as usize],
            active: None,
            ghost_y: None,
            score: 0,
            lines: 0,
            game_over: false,
        }
    }
}
