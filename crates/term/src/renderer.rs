//! Terminal: flushes a frame to a real terminal.
//!
//! Drawing is double-buffered. The caller renders into one frame per loop
//! iteration and the terminal diffs it against what is already on screen,
//! emitting only the changed runs.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Frame, Rgb, Style};

pub struct Terminal {
    stdout: io::Stdout,
    prev: Option<Frame>,
    buf: Vec<u8>,
    force_full: bool,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            prev: None,
            buf: Vec::with_capacity(64 * 1024),
            force_full: true,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        self.force_full = true;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to repaint every cell.
    ///
    /// Useful on terminal resize events and when returning from a screen
    /// whose leftovers must not bleed through the diff.
    pub fn invalidate(&mut self) {
        self.force_full = true;
    }

    /// Draw a frame, swapping it into internal state.
    ///
    /// Callers should keep one `Frame` and pass it in every iteration. The
    /// terminal diffs it against the previous frame and then swaps buffers,
    /// so the caller gets the old one back as scratch without cloning.
    pub fn draw_swap(&mut self, frame: &mut Frame) -> Result<()> {
        let mut prev = match self.prev.take() {
            Some(prev) => prev,
            None => Frame::new(frame.width(), frame.height()),
        };

        let needs_full = self.force_full
            || prev.width() != frame.width()
            || prev.height() != frame.height();

        self.buf.clear();
        if needs_full {
            encode_full_into(frame, &mut self.buf)?;
            prev.resize(frame.width(), frame.height());
            self.force_full = false;
        } else {
            encode_diff_into(&prev, frame, &mut self.buf)?;
        }
        self.flush_buf()?;

        std::mem::swap(&mut prev, frame);
        self.prev = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// Builds a sequence of crossterm commands without touching stdout.
pub fn encode_full_into(frame: &Frame, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style: Option<Style> = None;
    for y in 0..frame.height() {
        for x in 0..frame.width() {
            let cell = frame.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        if y + 1 < frame.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed runs only) into `out`.
pub fn encode_diff_into(prev: &Frame, next: &Frame, out: &mut Vec<u8>) -> Result<()> {
    let mut current_style: Option<Style> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: Style) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn for_each_changed_run(
    prev: &Frame,
    next: &Frame,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        // Size changed: treat every row as one dirty run.
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            let a = prev.get(x, y).unwrap_or_default();
            let b = next.get(x, y).unwrap_or_default();
            if a == b {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w {
                let a2 = prev.get(x, y).unwrap_or_default();
                let b2 = next.get(x, y).unwrap_or_default();
                if a2 == b2 {
                    break;
                }
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    #[test]
    fn style_converts_to_rgb_color() {
        let style = Style::default();
        assert_eq!(
            rgb_to_color(style.fg),
            Color::Rgb {
                r: style.fg.r,
                g: style.fg.g,
                b: style.fg.b
            }
        );
    }

    #[test]
    fn changed_run_iterator_coalesces_adjacent_cells() {
        let style = Style::default();
        let a = Frame::new(5, 1);
        let mut b = Frame::new(5, 1);

        // Change cells [1..=3] into X.
        for x in 1..=3 {
            b.set(x, 0, Cell { ch: 'X', style });
        }

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(1, 0, 3)]);
    }

    #[test]
    fn changed_run_iterator_splits_disjoint_edits() {
        let style = Style::default();
        let a = Frame::new(6, 2);
        let mut b = Frame::new(6, 2);

        b.set(0, 0, Cell { ch: 'X', style });
        b.set(4, 0, Cell { ch: 'Y', style });
        b.set(2, 1, Cell { ch: 'Z', style });

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(0, 0, 1), (4, 0, 1), (2, 1, 1)]);
    }

    #[test]
    fn identical_frames_encode_to_less_than_a_full_redraw() {
        let mut frame = Frame::new(10, 4);
        frame.put_str(1, 1, "HELLO", Style::default());
        let same = frame.clone();

        let mut full = Vec::new();
        encode_full_into(&frame, &mut full).unwrap();

        let mut diff = Vec::new();
        encode_diff_into(&same, &frame, &mut diff).unwrap();

        assert!(diff.len() < full.len());
    }
}
