//! Pocket Arcade (workspace facade crate).
//!
//! This package re-exports the `pocket_arcade::{snake,tetris,input,term,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use pocket_arcade_input as input;
pub use pocket_arcade_snake as snake;
pub use pocket_arcade_term as term;
pub use pocket_arcade_tetris as tetris;
pub use pocket_arcade_types as types;
