//! Terminal rendering layer.
//!
//! A small, game-oriented renderer: views draw game snapshots into a plain
//! framebuffer, and [`Terminal`] flushes frames to the real terminal with
//! diffed updates. No widget or layout framework.
//!
//! Goals:
//! - Keep the game crates deterministic and free of I/O
//! - One render path shared by both games and the launcher menu
//! - Precise control over aspect ratio (2 columns per board cell)

pub mod fb;
pub mod launcher_view;
pub mod renderer;
pub mod snake_view;
pub mod tetris_view;

pub use pocket_arcade_types as types;

pub use fb::{Cell, Frame, Rgb, Style};
pub use renderer::{encode_diff_into, encode_full_into, Terminal};
