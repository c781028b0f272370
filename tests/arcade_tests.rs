//! Cross-game integration tests: session independence and shared cadence.

use pocket_arcade::snake::SnakeGame;
use pocket_arcade::tetris::TetrisGame;
use pocket_arcade::types::{SnakeAction, TetrisAction, TICK_MS};

#[test]
fn interleaved_sessions_match_isolated_runs() {
    // Drive one Snake and one Tetris game in an interleaved loop, the way
    // the launcher would across sessions, and compare against the same
    // inputs applied to each game alone.
    let mut snake = SnakeGame::new(11);
    let mut tetris = TetrisGame::new(22);

    for i in 0..600 {
        snake.tick(TICK_MS);
        tetris.tick(TICK_MS);
        if i % 37 == 0 {
            tetris.apply_action(TetrisAction::MoveLeft);
        }
    }

    let mut snake_alone = SnakeGame::new(11);
    let mut tetris_alone = TetrisGame::new(22);
    for i in 0..600 {
        snake_alone.tick(TICK_MS);
        tetris_alone.tick(TICK_MS);
        if i % 37 == 0 {
            tetris_alone.apply_action(TetrisAction::MoveLeft);
        }
    }

    assert_eq!(snake.snapshot(), snake_alone.snapshot());
    assert_eq!(tetris.snapshot(), tetris_alone.snapshot());
}

#[test]
fn fresh_sessions_start_from_scratch() {
    // A finished or abandoned session leaves no trace in a new one built
    // from a new seed: the launcher constructs games per session.
    let mut first = SnakeGame::new(303);
    for _ in 0..200 {
        first.step();
    }

    let second = SnakeGame::new(304);
    assert_eq!(second.score(), 0);
    assert_eq!(second.body().len(), 3);
    assert!(!second.game_over());
}

#[test]
fn the_two_timers_fire_on_their_own_curves() {
    let mut snake = SnakeGame::new(5);
    let mut tetris = TetrisGame::new(5);

    // Count 16ms slices until each game first advances.
    let mut snake_slices = 0;
    while !snake.tick(TICK_MS) {
        snake_slices += 1;
        assert!(snake_slices < 100);
    }
    let mut tetris_slices = 0;
    while !tetris.tick(TICK_MS) {
        tetris_slices += 1;
        assert!(tetris_slices < 100);
    }

    // 180ms step vs 800ms gravity, both crossed on 16ms boundaries.
    assert_eq!(snake_slices + 1, 12);
    assert_eq!(tetris_slices + 1, 50);
}

#[test]
fn restart_is_per_game() {
    let mut snake = SnakeGame::new(7);
    let mut tetris = TetrisGame::new(7);

    tetris.apply_action(TetrisAction::HardDrop);
    let tetris_score = tetris.score();

    // Restarting Snake has no bearing on the Tetris session.
    snake.step();
    assert!(snake.apply_action(SnakeAction::Restart));

    assert_eq!(tetris.score(), tetris_score);
    assert!(tetris
        .board()
        .cells()
        .iter()
        .any(|&cell| cell != 0));
}
