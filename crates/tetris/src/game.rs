//! Tetris game state and rules.
//!
//! All mutation goes through the action and timer entry points; blocked
//! inputs are dropped silently and once `game_over` is set only a restart
//! is accepted.

use crate::board::Board;
use crate::pieces::{PieceKind, Shape, SPAWN_POS};
use crate::scoring::line_clear_score;
use crate::snapshot::TetrisSnapshot;
use crate::types::{
    SimpleRng, TetrisAction, Vec2, DROP_BASE_MS, DROP_DECAY_MS, DROP_FLOOR_MS, DROP_TIER_POINTS,
    HARD_DROP_POINTS,
};

/// The currently falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Current orientation; rotation replaces this in place.
    pub shape: Shape,
    /// Board position of the shape's top-left origin.
    pub pos: Vec2,
}

/// Complete Tetris game state.
#[derive(Debug, Clone)]
pub struct TetrisGame {
    board: Board,
    active: Option<ActivePiece>,
    score: u32,
    lines: u32,
    game_over: bool,
    rng: SimpleRng,
    gravity_timer_ms: u32,
}

impl TetrisGame {
    /// New game on an empty board with the first piece already spawned.
    pub fn new(seed: u32) -> Self {
        Self::from_board(Board::new(), seed)
    }

    /// Build a game over an existing board, for scenario construction.
    ///
    /// The first piece spawns immediately, so a board that blocks the spawn
    /// anchor yields a game that is over before any input arrives.
    pub fn from_board(board: Board, seed: u32) -> Self {
        let mut game = Self {
            board,
            active: None,
            score: 0,
            lines: 0,
            game_over: false,
            rng: SimpleRng::new(seed),
            gravity_timer_ms: 0,
        };
        game.spawn();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Translate the active piece by `delta` if the target cells are free.
    ///
    /// Returns whether the piece moved. Used for player movement and as the
    /// probe step of gravity and hard drops.
    pub fn try_move(&mut self, delta: Vec2) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let target = Vec2::new(active.pos.x + delta.x, active.pos.y + delta.y);
        if self.board.collides(&active.shape, target) {
            return false;
        }

        self.active = Some(ActivePiece { pos: target, ..active });
        true
    }

    /// Turn the active piece a quarter clockwise if the turned footprint
    /// fits in place. There are no wall kicks; a blocked turn is dropped.
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let turned = active.shape.rotated_cw();
        if self.board.collides(&turned, active.pos) {
            return false;
        }

        self.active = Some(ActivePiece { shape: turned, ..active });
        true
    }

    /// One gravity advance: descend a row, or lock when already resting.
    pub fn gravity_step(&mut self) {
        if self.game_over || self.active.is_none() {
            return;
        }
        if !self.try_move(Vec2::new(0, 1)) {
            self.lock_active();
        }
    }

    /// Send the active piece straight to its resting row and lock it.
    ///
    /// Awards a flat bonus on top of any line-clear score. Returns whether
    /// a piece was dropped.
    pub fn hard_drop(&mut self) -> bool {
        if self.game_over || self.active.is_none() {
            return false;
        }
        while self.try_move(Vec2::new(0, 1)) {}
        self.score += HARD_DROP_POINTS;
        self.lock_active();
        true
    }

    /// Row where the active piece would rest if dropped now.
    ///
    /// A pure projection off the live state; calling it never moves the
    /// piece, so the ghost can be recomputed every frame.
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        let mut y = active.pos.y;
        while !self.board.collides(&active.shape, Vec2::new(active.pos.x, y + 1)) {
            y += 1;
        }
        Some(y)
    }

    /// Milliseconds between gravity steps at the current score.
    ///
    /// Starts at 800ms and tightens by 100ms per 500 points, floored at
    /// 100ms.
    pub fn gravity_interval_ms(&self) -> u32 {
        let tiers = self.score / DROP_TIER_POINTS;
        DROP_BASE_MS
            .saturating_sub(tiers.saturating_mul(DROP_DECAY_MS))
            .max(DROP_FLOOR_MS)
    }

    /// Advance the gravity timer by `elapsed_ms`, firing at most one
    /// gravity step. Returns whether gravity fired. Inert once the game
    /// is over, so a finished board never drifts.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over {
            return false;
        }

        self.gravity_timer_ms += elapsed_ms;
        if self.gravity_timer_ms < self.gravity_interval_ms() {
            return false;
        }

        self.gravity_timer_ms = 0;
        self.gravity_step();
        true
    }

    /// Commit the active piece into the board, clear and score full rows,
    /// then spawn the next piece.
    fn lock_active(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.write_shape(&active.shape, active.pos);

        let cleared = self.board.clear_full_rows();
        if !cleared.is_empty() {
            self.lines += cleared.len() as u32;
            self.score += line_clear_score(cleared.len());
        }

        self.spawn();
    }

    /// Spawn a uniformly random piece at the fixed anchor.
    ///
    /// A spawn that immediately collides ends the game without installing
    /// the piece; the board and score freeze as they are.
    fn spawn(&mut self) {
        let pick = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        let kind = PieceKind::ALL[pick];
        let shape = kind.spawn_shape();

        if self.board.collides(&shape, SPAWN_POS) {
            self.game_over = true;
            return;
        }

        self.active = Some(ActivePiece {
            kind,
            shape,
            pos: SPAWN_POS,
        });
    }

    /// Write the current state into an existing snapshot without allocating.
    pub fn snapshot_into(&self, out: &mut TetrisSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active;
        out.ghost_y = self.ghost_y();
        out.score = self.score;
        out.lines = self.lines;
        out.game_over = self.game_over;
    }

    /// Convenience wrapper that builds a fresh snapshot.
    pub fn snapshot(&self) -> TetrisSnapshot {
        let mut snap = TetrisSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Return to an empty board with a freshly spawned piece.
    ///
    /// The RNG carries forward so each episode sees a fresh piece sequence;
    /// score, lines, and the gravity accumulator restart from zero.
    pub fn reset(&mut self) {
        let seed = self.rng.state();
        *self = Self::new(seed);
    }

    /// Apply a player action. Returns whether it changed the game.
    pub fn apply_action(&mut self, action: TetrisAction) -> bool {
        match action {
            TetrisAction::MoveLeft => self.try_move(Vec2::new(-1, 0)),
            TetrisAction::MoveRight => self.try_move(Vec2::new(1, 0)),
            TetrisAction::SoftDrop => self.try_move(Vec2::new(0, 1)),
            TetrisAction::HardDrop => self.hard_drop(),
            TetrisAction::Rotate => self.rotate(),
            TetrisAction::Restart => {
                self.reset();
                true
            }
        }
    }
}

impl Default for TetrisGame {
    fn default() -> Self {
        Self::new(1)
    }
}
