//! Snake game state and rules.
//!
//! Head-first body on a toroidal grid, stored in a fixed-capacity vector so
//! the whole game is a single flat value with no heap churn. Coordinates:
//! (x, y) with x growing rightward and y growing downward.

use arrayvec::ArrayVec;

use crate::snapshot::SnakeSnapshot;
use crate::types::{
    Direction, SimpleRng, SnakeAction, Vec2, FOOD_POINTS, SNAKE_GRID, SNAKE_STEP_BASE_MS,
    SNAKE_STEP_DECAY_MS, SNAKE_STEP_FLOOR_MS, SNAKE_STEP_TIER_POINTS,
};

/// Maximum body length (every cell of the 20x20 grid)
pub const SNAKE_MAX_LEN: usize = (SNAKE_GRID as usize) * (SNAKE_GRID as usize);

const INITIAL_BODY: [Vec2; 3] = [Vec2::new(10, 10), Vec2::new(10, 11), Vec2::new(10, 12)];
const INITIAL_FOOD: Vec2 = Vec2::new(5, 5);
const INITIAL_DIRECTION: Direction = Direction::Up;

/// Complete Snake game state
#[derive(Debug, Clone)]
pub struct SnakeGame {
    /// Body segments, head first. Never empty; length ≥ 3 from spawn.
    body: ArrayVec<Vec2, SNAKE_MAX_LEN>,
    food: Vec2,
    direction: Direction,
    score: u32,
    game_over: bool,
    rng: SimpleRng,
    step_timer_ms: u32,
}

impl SnakeGame {
    /// Create a new game in the fixed initial state.
    ///
    /// The seed only affects food placement after the first food is eaten;
    /// the starting body, food, and heading are always the same.
    pub fn new(seed: u32) -> Self {
        let mut body = ArrayVec::new();
        body.extend(INITIAL_BODY);

        Self {
            body,
            food: INITIAL_FOOD,
            direction: INITIAL_DIRECTION,
            score: 0,
            game_over: false,
            rng: SimpleRng::new(seed),
            step_timer_ms: 0,
        }
    }

    /// Build a game from explicit parts, for scenario construction.
    ///
    /// # Panics
    ///
    /// Panics if `body` is empty or longer than the grid can hold.
    pub fn from_parts(body: &[Vec2], food: Vec2, direction: Direction, seed: u32) -> Self {
        assert!(!body.is_empty() && body.len() <= SNAKE_MAX_LEN);

        let mut game = Self::new(seed);
        game.body.clear();
        game.body.extend(body.iter().copied());
        game.food = food;
        game.direction = direction;
        game
    }

    pub fn body(&self) -> &[Vec2] {
        &self.body
    }

    pub fn head(&self) -> Vec2 {
        self.body[0]
    }

    pub fn food(&self) -> Vec2 {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Request a new heading, applied from the next step onward.
    ///
    /// Accepted only when the heading changes axis: 180° reversals and
    /// repeat presses of the current heading are silently rejected, as is
    /// everything once the game is over. Returns whether the heading changed.
    pub fn set_direction(&mut self, dir: Direction) -> bool {
        if self.game_over || dir.axis() == self.direction.axis() {
            return false;
        }
        self.direction = dir;
        true
    }

    /// Advance the snake by one cell.
    ///
    /// The move wraps at the edges. Hitting any body segment ends the game
    /// and leaves the rest of the state untouched; the current tail counts,
    /// since it is only removed after the head lands.
    pub fn step(&mut self) {
        if self.game_over {
            return;
        }

        let delta = self.direction.delta();
        let head = self.body[0];
        let next = Vec2::new(
            (head.x + delta.x + SNAKE_GRID) % SNAKE_GRID,
            (head.y + delta.y + SNAKE_GRID) % SNAKE_GRID,
        );

        if self.body.iter().any(|&cell| cell == next) {
            self.game_over = true;
            return;
        }

        self.body.insert(0, next);

        if next == self.food {
            self.score += FOOD_POINTS;
            self.place_food();
        } else {
            self.body.pop();
        }
    }

    /// Regenerate food on a uniformly random cell off the snake.
    fn place_food(&mut self) {
        // A full grid leaves nowhere to sample; the next step must collide
        // anyway, so the stale food cell is never reachable.
        if self.body.is_full() {
            return;
        }

        loop {
            let spot = Vec2::new(
                self.rng.next_range(SNAKE_GRID as u32) as i8,
                self.rng.next_range(SNAKE_GRID as u32) as i8,
            );
            if !self.body.iter().any(|&cell| cell == spot) {
                self.food = spot;
                return;
            }
        }
    }

    /// Current step interval: `max(60, 180 - 10 * (score / 50))` ms.
    pub fn step_interval_ms(&self) -> u32 {
        let tiers = self.score / SNAKE_STEP_TIER_POINTS;
        SNAKE_STEP_BASE_MS
            .saturating_sub(tiers * SNAKE_STEP_DECAY_MS)
            .max(SNAKE_STEP_FLOOR_MS)
    }

    /// Advance timers; steps the snake when the move interval elapses.
    ///
    /// No-op once the game is over, freezing the board for display.
    /// Returns whether a step fired.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over {
            return false;
        }

        self.step_timer_ms += elapsed_ms;
        if self.step_timer_ms < self.step_interval_ms() {
            return false;
        }

        self.step_timer_ms = 0;
        self.step();
        true
    }

    /// Write the render view for the current state into `out`.
    pub fn snapshot_into(&self, out: &mut SnakeSnapshot) {
        out.body.clear();
        out.body.extend(self.body.iter().copied());
        out.food = self.food;
        out.direction = self.direction;
        out.score = self.score;
        out.game_over = self.game_over;
    }

    /// Convenience wrapper around [`snapshot_into`](Self::snapshot_into).
    pub fn snapshot(&self) -> SnakeSnapshot {
        let mut snap = SnakeSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Return to the fixed initial state.
    ///
    /// The RNG carries forward so each episode sees fresh food placements;
    /// everything else, the step accumulator included, restarts from zero.
    pub fn reset(&mut self) {
        let seed = self.rng.state();
        *self = Self::new(seed);
    }

    /// Apply a shell action. Returns whether it changed anything.
    pub fn apply_action(&mut self, action: SnakeAction) -> bool {
        match action {
            SnakeAction::Turn(dir) => self.set_direction(dir),
            SnakeAction::Restart => {
                self.reset();
                true
            }
        }
    }
}

impl Default for SnakeGame {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_initial_state() {
        let game = SnakeGame::new(12345);

        assert_eq!(game.body(), &INITIAL_BODY);
        assert_eq!(game.head(), Vec2::new(10, 10));
        assert_eq!(game.food(), Vec2::new(5, 5));
        assert_eq!(game.direction(), Direction::Up);
        assert_eq!(game.score(), 0);
        assert!(!game.game_over());
    }

    #[test]
    fn test_step_advances_head_and_drops_tail() {
        let mut game = SnakeGame::new(1);
        game.step();

        assert_eq!(game.head(), Vec2::new(10, 9));
        assert_eq!(game.body().len(), 3);
        // Old tail (10, 12) is gone.
        assert!(!game.body().contains(&Vec2::new(10, 12)));
    }

    #[test]
    fn test_wrap_top_edge() {
        let mut game = SnakeGame::new(1);

        // Head starts at y=10 moving up; 10 steps reach y=0, the 11th wraps.
        for _ in 0..10 {
            game.step();
        }
        assert_eq!(game.head(), Vec2::new(10, 0));

        game.step();
        assert_eq!(game.head(), Vec2::new(10, SNAKE_GRID - 1));
        assert!(!game.game_over());
    }

    #[test]
    fn test_wrap_left_edge() {
        let mut game = SnakeGame::new(1);
        assert!(game.set_direction(Direction::Left));

        for _ in 0..10 {
            game.step();
        }
        assert_eq!(game.head(), Vec2::new(0, 10));

        game.step();
        assert_eq!(game.head(), Vec2::new(SNAKE_GRID - 1, 10));
    }

    #[test]
    fn test_wrap_right_and_bottom_edges() {
        let mut game = SnakeGame::new(1);

        // Head starts at x=10; 9 steps right reach x=19, the 10th wraps.
        assert!(game.set_direction(Direction::Right));
        for _ in 0..9 {
            game.step();
        }
        assert_eq!(game.head(), Vec2::new(SNAKE_GRID - 1, 10));
        game.step();
        assert_eq!(game.head(), Vec2::new(0, 10));

        // Same downward from y=10.
        assert!(game.set_direction(Direction::Down));
        for _ in 0..9 {
            game.step();
        }
        assert_eq!(game.head(), Vec2::new(0, SNAKE_GRID - 1));
        game.step();
        assert_eq!(game.head(), Vec2::new(0, 0));
        assert!(!game.game_over());
    }

    #[test]
    fn test_wrap_keeps_coordinates_in_range() {
        let mut game = SnakeGame::new(7);

        // Up-left staircase: wraps both edges repeatedly, never collides.
        for i in 0..200 {
            let turn = if i % 2 == 0 {
                Direction::Left
            } else {
                Direction::Up
            };
            assert!(game.set_direction(turn));
            game.step();

            assert!(!game.game_over());
            for &cell in game.body() {
                assert!((0..SNAKE_GRID).contains(&cell.x));
                assert!((0..SNAKE_GRID).contains(&cell.y));
            }
        }
    }

    #[test]
    fn test_reversal_rejected_orthogonal_accepted() {
        let mut game = SnakeGame::new(1);

        // Heading up: down is a reversal, up a repeat; both rejected.
        assert!(!game.set_direction(Direction::Down));
        assert_eq!(game.direction(), Direction::Up);
        assert!(!game.set_direction(Direction::Up));

        // Orthogonal turn accepted.
        assert!(game.set_direction(Direction::Right));
        assert_eq!(game.direction(), Direction::Right);

        // Now heading right: left is the reversal.
        assert!(!game.set_direction(Direction::Left));
        assert_eq!(game.direction(), Direction::Right);
        assert!(game.set_direction(Direction::Down));
    }

    #[test]
    fn test_turn_takes_effect_on_next_step_only() {
        let mut game = SnakeGame::new(1);
        let before = game.head();

        game.set_direction(Direction::Left);
        assert_eq!(game.head(), before);

        game.step();
        assert_eq!(game.head(), Vec2::new(before.x - 1, before.y));
    }

    /// Drive the starting snake onto the fixed initial food at (5, 5).
    fn eat_first_food(game: &mut SnakeGame) {
        for _ in 0..5 {
            game.step();
        }
        assert_eq!(game.head(), Vec2::new(10, 5));

        game.set_direction(Direction::Left);
        for _ in 0..5 {
            game.step();
        }
        assert_eq!(game.head(), Vec2::new(5, 5));
    }

    #[test]
    fn test_eating_food_grows_and_scores() {
        let mut game = SnakeGame::new(1);
        eat_first_food(&mut game);

        assert_eq!(game.score(), FOOD_POINTS);
        assert_eq!(game.body().len(), 4);
        assert!(!game.game_over());
    }

    #[test]
    fn test_food_regeneration_follows_seeded_rng_off_the_body() {
        let mut game = SnakeGame::new(42);
        eat_first_food(&mut game);

        // Mirror the rejection sampling against the grown body.
        let body: Vec<Vec2> = game.body().to_vec();
        let mut rng = SimpleRng::new(42);
        let expected = loop {
            let spot = Vec2::new(
                rng.next_range(SNAKE_GRID as u32) as i8,
                rng.next_range(SNAKE_GRID as u32) as i8,
            );
            if !body.contains(&spot) {
                break spot;
            }
        };

        assert_eq!(game.food(), expected);
        assert!(!body.contains(&game.food()));
    }

    #[test]
    fn test_length_constant_without_food() {
        let mut game = SnakeGame::new(1);
        // Move away from the food column so nothing is eaten.
        game.set_direction(Direction::Right);
        for _ in 0..8 {
            game.step();
            assert_eq!(game.body().len(), 3);
        }
    }

    #[test]
    fn test_tail_chase_is_fatal() {
        // Length-4 coil: the head re-enters the cell the tail still holds.
        let body = [
            Vec2::new(6, 6),
            Vec2::new(5, 6),
            Vec2::new(5, 5),
            Vec2::new(6, 5),
        ];
        let mut game = SnakeGame::from_parts(&body, Vec2::new(0, 0), Direction::Up, 1);

        game.step();
        assert!(game.game_over());
        assert_eq!(game.body(), &body);
    }

    #[test]
    fn test_mid_body_collision_freezes_state() {
        // Head at (5,5) moving right into (6,5), the fourth of five segments.
        let body = [
            Vec2::new(5, 5),
            Vec2::new(5, 6),
            Vec2::new(6, 6),
            Vec2::new(6, 5),
            Vec2::new(7, 5),
        ];
        let mut game = SnakeGame::from_parts(&body, Vec2::new(0, 0), Direction::Right, 1);

        game.step();
        assert!(game.game_over());
        assert_eq!(game.body(), &body);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_game_over_rejects_everything_but_restart() {
        let body = [
            Vec2::new(6, 6),
            Vec2::new(5, 6),
            Vec2::new(5, 5),
            Vec2::new(6, 5),
        ];
        let mut game = SnakeGame::from_parts(&body, Vec2::new(0, 0), Direction::Up, 1);
        game.step();
        assert!(game.game_over());

        assert!(!game.set_direction(Direction::Left));
        assert!(!game.apply_action(SnakeAction::Turn(Direction::Right)));
        game.step();
        assert_eq!(game.body(), &body);
        assert!(!game.tick(10_000));

        assert!(game.apply_action(SnakeAction::Restart));
        assert!(!game.game_over());
        assert_eq!(game.body(), &INITIAL_BODY);
    }

    #[test]
    fn test_restart_restores_initial_state() {
        let mut game = SnakeGame::new(9);
        eat_first_food(&mut game);
        assert_ne!(game.score(), 0);

        game.apply_action(SnakeAction::Restart);

        assert_eq!(game.body(), &INITIAL_BODY);
        assert_eq!(game.food(), INITIAL_FOOD);
        assert_eq!(game.direction(), Direction::Up);
        assert_eq!(game.score(), 0);
        assert!(!game.game_over());
    }

    #[test]
    fn test_restart_clears_step_accumulator() {
        let mut game = SnakeGame::new(1);

        // Accumulate almost a full interval, then restart.
        assert!(!game.tick(SNAKE_STEP_BASE_MS - 16));
        game.apply_action(SnakeAction::Restart);

        // A fresh game must not inherit the stale elapsed time.
        assert!(!game.tick(16));
        assert_eq!(game.head(), Vec2::new(10, 10));
    }

    #[test]
    fn test_step_interval_speed_curve() {
        let mut game = SnakeGame::new(1);
        assert_eq!(game.step_interval_ms(), 180);

        game.score = 40;
        assert_eq!(game.step_interval_ms(), 180);
        game.score = 50;
        assert_eq!(game.step_interval_ms(), 170);
        game.score = 149;
        assert_eq!(game.step_interval_ms(), 160);
        game.score = 600;
        assert_eq!(game.step_interval_ms(), 60);
        // Floored past 600 points.
        game.score = 10_000;
        assert_eq!(game.step_interval_ms(), 60);
    }

    #[test]
    fn test_tick_fires_exactly_on_interval() {
        let mut game = SnakeGame::new(1);
        let start = game.head();

        // 11 x 16ms = 176ms < 180ms: no step yet.
        for _ in 0..11 {
            assert!(!game.tick(16));
        }
        assert_eq!(game.head(), start);

        // 192ms crosses the interval: exactly one step.
        assert!(game.tick(16));
        assert_eq!(game.head(), Vec2::new(start.x, start.y - 1));
    }

    #[test]
    fn test_tick_accumulator_resets_after_step() {
        let mut game = SnakeGame::new(1);

        assert!(game.tick(180));
        // Accumulator was cleared, so another full interval is needed.
        assert!(!game.tick(16));
        assert!(game.tick(164));
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut game = SnakeGame::new(1);
        game.step();

        let snap = game.snapshot();
        assert_eq!(snap.body.as_slice(), game.body());
        assert_eq!(snap.food, game.food());
        assert_eq!(snap.direction, game.direction());
        assert_eq!(snap.score, game.score());
        assert_eq!(snap.game_over, game.game_over());
    }
}
