//! Read-only render view of a Snake game.
//!
//! The shell draws from this struct and never mutates engine state through
//! it. Reusing one snapshot across frames keeps the render path free of
//! allocation.

use arrayvec::ArrayVec;

use crate::game::SNAKE_MAX_LEN;
use crate::types::{Direction, Vec2};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeSnapshot {
    /// Body segments, head first
    pub body: ArrayVec<Vec2, SNAKE_MAX_LEN>,
    pub food: Vec2,
    pub direction: Direction,
    pub score: u32,
    pub game_over: bool,
}

impl SnakeSnapshot {
    pub fn head(&self) -> Option<Vec2> {
        self.body.first().copied()
    }
}

impl Default for SnakeSnapshot {
    fn default() -> Self {
        Self {
            body: ArrayVec::new(),
            food: Vec2::new(0, 0),
            direction: Direction::Up,
            score: 0,
            game_over: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snapshot_is_empty() {
        let snap = SnakeSnapshot::default();
        assert!(snap.body.is_empty());
        assert_eq!(snap.head(), None);
        assert!(!snap.game_over);
    }
}
