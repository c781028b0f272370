//! Tetris view: maps a `TetrisSnapshot` into a frame.
//!
//! Pure (no I/O). Locked cells, the ghost projection, and the active piece
//! all draw from the snapshot alone.

use pocket_arcade_tetris::TetrisSnapshot;

use crate::fb::{Frame, Rgb, Style};
use crate::types::{BOARD_COLS, BOARD_ROWS};

/// Board cell width in terminal columns; compensates for the typical
/// terminal glyph aspect ratio.
const CELL_W: u16 = 2;

const WELL_BG: Rgb = Rgb::new(30, 30, 40);

/// Render the snapshot centered into `frame` at its current size.
pub fn render_into(snap: &TetrisSnapshot, frame: &mut Frame) {
    frame.clear();

    let board_px_w = (BOARD_COLS as u16) * CELL_W;
    let board_px_h = BOARD_ROWS as u16;
    let frame_w = board_px_w + 2;
    let frame_h = board_px_h + 2;

    let start_x = frame.width().saturating_sub(frame_w) / 2;
    let start_y = frame.height().saturating_sub(frame_h) / 2;

    let well = Style {
        fg: Rgb::new(90, 90, 100),
        bg: WELL_BG,
        bold: false,
        dim: true,
    };
    let border = Style {
        fg: Rgb::new(200, 200, 200),
        ..Style::default()
    };

    frame.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, '·', well);
    frame.draw_border(start_x, start_y, frame_w, frame_h, border);

    // Locked cells.
    for y in 0..BOARD_ROWS {
        for x in 0..BOARD_COLS {
            if let Some(fg) = cell_color(snap.board[y as usize][x as usize]) {
                let style = Style {
                    fg,
                    bg: WELL_BG,
                    bold: false,
                    dim: false,
                };
                fill_cell(frame, start_x, start_y, x, y, '█', style);
            }
        }
    }

    // Ghost before the active piece, so the piece wins shared cells.
    if let (Some(active), Some(ghost_y)) = (snap.active, snap.ghost_y) {
        let ghost = Style {
            fg: Rgb::new(140, 140, 140),
            bg: WELL_BG,
            bold: false,
            dim: true,
        };
        for (dx, dy, _) in active.shape.cells() {
            fill_cell(frame, start_x, start_y, active.pos.x + dx, ghost_y + dy, '░', ghost);
        }
    }

    if let Some(active) = snap.active {
        for (dx, dy, value) in active.shape.cells() {
            if let Some(fg) = cell_color(value) {
                let style = Style {
                    fg,
                    bg: WELL_BG,
                    bold: true,
                    dim: false,
                };
                fill_cell(frame, start_x, start_y, active.pos.x + dx, active.pos.y + dy, '█', style);
            }
        }
    }

    draw_side_panel(frame, snap, start_x, start_y, frame_w);

    if snap.game_over {
        draw_game_over(frame, start_x, start_y, frame_w, frame_h);
    }
}

/// Foreground color for a locked cell value, `None` for empty.
fn cell_color(value: u8) -> Option<Rgb> {
    match value {
        1 => Some(Rgb::new(6, 182, 212)),
        2 => Some(Rgb::new(59, 130, 246)),
        3 => Some(Rgb::new(249, 115, 22)),
        4 => Some(Rgb::new(234, 179, 8)),
        5 => Some(Rgb::new(34, 197, 94)),
        6 => Some(Rgb::new(168, 85, 247)),
        7 => Some(Rgb::new(239, 68, 68)),
        _ => None,
    }
}

fn fill_cell(frame: &mut Frame, start_x: u16, start_y: u16, x: i8, y: i8, ch: char, style: Style) {
    // Cells above the top edge are legal game states; just don't draw them.
    if x < 0 || x >= BOARD_COLS || y < 0 || y >= BOARD_ROWS {
        return;
    }
    let px = start_x + 1 + (x as u16) * CELL_W;
    let py = start_y + 1 + y as u16;
    frame.fill_rect(px, py, CELL_W, 1, ch, style);
}

fn draw_side_panel(
    frame: &mut Frame,
    snap: &TetrisSnapshot,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
) {
    let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
    if panel_x >= frame.width() || frame.width() - panel_x < 8 {
        return;
    }

    let label = Style {
        bold: true,
        ..Style::default()
    };
    let value = Style {
        fg: Rgb::new(200, 200, 200),
        ..Style::default()
    };

    let mut y = start_y;
    frame.put_str(panel_x, y, "SCORE", label);
    y = y.saturating_add(1);
    frame.put_u32(panel_x, y, snap.score, value);
    y = y.saturating_add(2);

    frame.put_str(panel_x, y, "LINES", label);
    y = y.saturating_add(1);
    frame.put_u32(panel_x, y, snap.lines, value);
}

fn draw_game_over(frame: &mut Frame, start_x: u16, start_y: u16, frame_w: u16, frame_h: u16) {
    let title = Style {
        fg: Rgb::new(255, 255, 255),
        bold: true,
        ..Style::default()
    };
    let hint = Style {
        dim: true,
        ..Style::default()
    };

    let mid_y = start_y.saturating_add(frame_h / 2);
    put_centered(frame, start_x, mid_y, frame_w, "GAME OVER", title);
    put_centered(frame, start_x, mid_y + 1, frame_w, "R TO RESTART", hint);
}

fn put_centered(frame: &mut Frame, start_x: u16, y: u16, frame_w: u16, text: &str, style: Style) {
    let text_w = text.chars().count() as u16;
    let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    frame.put_str(x, y, text, style);
}
