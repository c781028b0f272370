//! Tetromino definitions and rotation.
//!
//! Shapes are small color matrices: every nonzero entry carries the piece's
//! color value, so locking a piece is a straight copy into the board.
//! Rotation is computed (transpose, then reverse each row) rather than
//! table-driven, and there are no wall kicks.

use crate::types::Vec2;

/// Spawn anchor shared by every piece.
pub const SPAWN_POS: Vec2 = Vec2::new(3, 0);

/// The seven tetromino kinds.
///
/// `cell_value()` doubles as the board color index: 1=I, 2=J, 3=L, 4=O,
/// 5=S, 6=T, 7=Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in color-value order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Board cell value written when this piece locks.
    pub fn cell_value(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Shape matrix in spawn orientation.
    pub fn spawn_shape(self) -> Shape {
        let v = self.cell_value();
        match self {
            PieceKind::I => Shape::from_rows(&[&[v, v, v, v]]),
            PieceKind::J => Shape::from_rows(&[&[v, 0, 0], &[v, v, v]]),
            PieceKind::L => Shape::from_rows(&[&[0, 0, v], &[v, v, v]]),
            PieceKind::O => Shape::from_rows(&[&[v, v], &[v, v]]),
            PieceKind::S => Shape::from_rows(&[&[0, v, v], &[v, v, 0]]),
            PieceKind::T => Shape::from_rows(&[&[0, v, 0], &[v, v, v]]),
            PieceKind::Z => Shape::from_rows(&[&[v, v, 0], &[0, v, v]]),
        }
    }
}

/// A piece footprint held in a fixed 4x4 backing with a live extent.
///
/// The backing never grows, so rotating and copying shapes stays free of
/// heap traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    grid: [[u8; 4]; 4],
    w: u8,
    h: u8,
}

impl Shape {
    /// Build a shape from row slices.
    ///
    /// # Panics
    ///
    /// Panics when the matrix is empty, ragged, or exceeds the 4x4 backing.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(!rows.is_empty() && rows.len() <= 4, "shape must be 1..=4 rows");
        let w = rows[0].len();
        assert!(w > 0 && w <= 4, "shape must be 1..=4 columns");

        let mut grid = [[0u8; 4]; 4];
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), w, "shape rows must share a width");
            grid[y][..w].copy_from_slice(row);
        }

        Self {
            grid,
            w: w as u8,
            h: rows.len() as u8,
        }
    }

    pub fn width(&self) -> i8 {
        self.w as i8
    }

    pub fn height(&self) -> i8 {
        self.h as i8
    }

    /// Quarter-turn clockwise: transpose, then reverse each row.
    ///
    /// Width and height swap, so a flat I becomes a column. The O square
    /// maps onto itself.
    pub fn rotated_cw(&self) -> Shape {
        let (w, h) = (self.w as usize, self.h as usize);
        let mut grid = [[0u8; 4]; 4];
        for y in 0..h {
            for x in 0..w {
                grid[x][h - 1 - y] = self.grid[y][x];
            }
        }

        Shape {
            grid,
            w: self.h,
            h: self.w,
        }
    }

    /// Iterate the nonzero cells as `(dx, dy, value)` offsets from the
    /// shape origin.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8, u8)> + '_ {
        (0..self.h as i8).flat_map(move |y| {
            (0..self.w as i8).filter_map(move |x| {
                let value = self.grid[y as usize][x as usize];
                (value != 0).then_some((x, y, value))
            })
        })
    }
}
