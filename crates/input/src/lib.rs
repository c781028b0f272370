//! Terminal input mapping (shell-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into game actions with pure functions, one event
//! to at most one action. There is no key-repeat shaping; holding a key
//! produces exactly the events the terminal delivers.

pub mod map;

pub use pocket_arcade_types as types;

pub use map::{menu_selection, should_close, should_quit, snake_action, tetris_action};
