//! Launcher menu view.

use crate::fb::{Frame, Rgb, Style};

const MENU_LINES: usize = 7;

/// Render the launcher menu centered into `frame` at its current size.
pub fn render_into(frame: &mut Frame) {
    frame.clear();

    let title = Style {
        fg: Rgb::new(250, 204, 21),
        bold: true,
        ..Style::default()
    };
    let key = Style {
        fg: Rgb::new(134, 239, 172),
        bold: true,
        ..Style::default()
    };
    let entry = Style {
        fg: Rgb::new(220, 220, 220),
        ..Style::default()
    };
    let hint = Style {
        dim: true,
        ..Style::default()
    };

    let start_y = frame.height().saturating_sub(MENU_LINES as u16) / 2;

    put_centered(frame, start_y, "POCKET ARCADE", title);
    put_menu_entry(frame, start_y + 2, "[1]", " SNAKE", key, entry);
    put_menu_entry(frame, start_y + 3, "[2]", " TETRIS", key, entry);
    put_centered(frame, start_y + 5, "ESC LEAVES A GAME", hint);
    put_centered(frame, start_y + 6, "Q QUITS", hint);
}

fn put_centered(frame: &mut Frame, y: u16, text: &str, style: Style) {
    let text_w = text.chars().count() as u16;
    let x = frame.width().saturating_sub(text_w) / 2;
    frame.put_str(x, y, text, style);
}

fn put_menu_entry(frame: &mut Frame, y: u16, keycap: &str, name: &str, key: Style, entry: Style) {
    let text_w = (keycap.chars().count() + name.chars().count()) as u16;
    let x = frame.width().saturating_sub(text_w) / 2;
    frame.put_str(x, y, keycap, key);
    frame.put_str(x + keycap.chars().count() as u16, y, name, entry);
}
