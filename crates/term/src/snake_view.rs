//! Snake view: maps a `SnakeSnapshot` into a frame.
//!
//! Pure (no I/O), so it can be unit-tested against cell contents.

use pocket_arcade_snake::SnakeSnapshot;

use crate::fb::{Frame, Rgb, Style};
use crate::types::{Vec2, SNAKE_GRID};

/// Board cell width in terminal columns; compensates for the typical
/// terminal glyph aspect ratio.
const CELL_W: u16 = 2;

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const BODY_FG: Rgb = Rgb::new(34, 197, 94);
const HEAD_FG: Rgb = Rgb::new(74, 222, 128);
const FOOD_FG: Rgb = Rgb::new(239, 68, 68);

/// Render the snapshot centered into `frame` at its current size.
pub fn render_into(snap: &SnakeSnapshot, frame: &mut Frame) {
    frame.clear();

    let grid_px_w = (SNAKE_GRID as u16) * CELL_W;
    let grid_px_h = SNAKE_GRID as u16;
    let frame_w = grid_px_w + 2;
    let frame_h = grid_px_h + 2;

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

    frame.fill_rect(start_x + 1, start_y + 1, grid_px_w, grid_px_h, '·', well);
    frame.draw_border(start_x, start_y, frame_w, frame_h, border);

    // Food first so a head passing over it wins the cell.
    let food = Style {
        fg: FOOD_FG,
        bg: WELL_BG,
        bold: true,
        dim: false,
    };
    fill_cell(frame, start_x, start_y, snap.food, '█', food);

    for (i, &cell) in snap.body.iter().enumerate() {
        let style = Style {
            fg: if i == 0 { HEAD_FG } else { BODY_FG },
            bg: WELL_BG,
            bold: i == 0,
            dim: false,
        };
        fill_cell(frame, start_x, start_y, cell, '█', style);
    }

    draw_side_panel(frame, snap, start_x, start_y, frame_w);

    if snap.game_over {
        draw_game_over(frame, start_x, start_y, frame_w, frame_h);
    }
}

fn fill_cell(frame: &mut Frame, start_x: u16, start_y: u16, cell: Vec2, ch: char, style: Style) {
    if cell.x < 0 || cell.y < 0 {
        return;
    }
    let px = start_x + 1 + (cell.x as u16) * CELL_W;
    let py = start_y + 1 + cell.y as u16;
    frame.fill_rect(px, py, CELL_W, 1, ch, style);
}

fn draw_side_panel(frame: &mut Frame, snap: &SnakeSnapshot, start_x: u16, start_y: u16, frame_w: u16) {
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

    frame.put_str(panel_x, y, "LENGTH", label);
    y = y.saturating_add(1);
    frame.put_u32(panel_x, y, snap.body.len() as u32, value);
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
