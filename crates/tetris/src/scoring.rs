//! Scoring rules.
//!
//! Line clears pay superlinearly: clearing `n` rows in a single lock is
//! worth `n * n * 100`, so a quadruple clear earns sixteen times a single.
//! Hard drops add a flat bonus on top, applied by the game loop.

use crate::types::LINE_SCORE_UNIT;

/// Points awarded for clearing `cleared` rows in one lock.
pub fn line_clear_score(cleared: usize) -> u32 {
    let n = cleared as u32;
    n * n * LINE_SCORE_UNIT
}
