//! The locked-cell playfield.
//!
//! A 10x20 grid stored as a flat array in row-major order. Each cell holds
//! 0 for empty or a piece color value in `1..=7`, so rendering never needs
//! to look up which piece produced a cell.

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{Vec2, BOARD_COLS, BOARD_ROWS};

/// Total number of cells on the board.
const BOARD_SIZE: usize = (BOARD_COLS as usize) * (BOARD_ROWS as usize);

/// Most rows a single lock can complete.
pub const MAX_CLEARED_ROWS: usize = 4;

/// The locked-cell grid.
///
/// Coordinates are `(x, y)` with `x` in `0..10` running left to right and
/// `y` in `0..20` running top to bottom. Rows above the top edge (`y < 0`)
/// are not stored; pieces passing through them simply have those cells
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [u8; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [0; BOARD_SIZE],
        }
    }

    /// Flat index for `(x, y)`, or `None` when out of bounds.
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_COLS || y < 0 || y >= BOARD_ROWS {
            return None;
        }
        Some((y as usize) * (BOARD_COLS as usize) + (x as usize))
    }

    /// Cell value at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<u8> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Write a cell value. Returns `false` when out of bounds.
    pub fn set(&mut self, x: i8, y: i8, value: u8) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Collision test for a shape placed with its origin at `pos`.
    ///
    /// A nonzero shape cell collides when it leaves the side or bottom
    /// bounds, or overlaps a nonzero board cell. Cells above the top edge
    /// are checked against the side bounds only, so freshly spawned or
    /// rotated pieces may poke out of the top of the well.
    pub fn collides(&self, shape: &Shape, pos: Vec2) -> bool {
        for (dx, dy, _) in shape.cells() {
            let gx = pos.x + dx;
            let gy = pos.y + dy;

            if gx < 0 || gx >= BOARD_COLS || gy >= BOARD_ROWS {
                return true;
            }
            if gy >= 0 && self.get(gx, gy).unwrap_or(0) != 0 {
                return true;
            }
        }
        false
    }

    /// Stamp the nonzero cells of `shape` into the board at `pos`.
    ///
    /// Cells above the top edge are dropped rather than written.
    pub fn write_shape(&mut self, shape: &Shape, pos: Vec2) {
        for (dx, dy, value) in shape.cells() {
            let gy = pos.y + dy;
            if gy >= 0 {
                self.set(pos.x + dx, gy, value);
            }
        }
    }

    /// Whether every cell in row `y` is occupied.
    pub fn is_row_full(&self, y: usize) -> bool {
        let w = BOARD_COLS as usize;
        let start = y * w;
        self.cells[start..start + w].iter().all(|&cell| cell != 0)
    }

    /// Remove all full rows, shifting everything above them down.
    ///
    /// Returns the cleared row indices in top-to-bottom order. Uses a
    /// two-pointer compaction over the flat array so no intermediate
    /// board is allocated.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, MAX_CLEARED_ROWS> {
        let mut cleared = ArrayVec::new();
        let w = BOARD_COLS as usize;

        // Walk rows bottom-up, copying kept rows down over cleared ones.
        let mut dst = BOARD_ROWS as usize;
        for src in (0..BOARD_ROWS as usize).rev() {
            if self.is_row_full(src) {
                cleared.push(src);
                continue;
            }
            dst -= 1;
            if dst != src {
                self.cells.copy_within(src * w..(src + 1) * w, dst * w);
            }
        }

        // Whatever remains above the last kept row is now empty space.
        self.cells[..dst * w].fill(0);

        cleared.reverse();
        cleared
    }

    /// Copy the board into a row-major 2D grid, for snapshots.
    pub fn write_grid(&self, out: &mut [[u8; BOARD_COLS as usize]; BOARD_ROWS as usize]) {
        let w = BOARD_COLS as usize;
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * w;
            row.copy_from_slice(&self.cells[start..start + w]);
        }
    }

    /// Raw cells in row-major order.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
