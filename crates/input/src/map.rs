//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameId, SnakeAction, TetrisAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a Snake action.
pub fn snake_action(key: KeyEvent) -> Option<SnakeAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(SnakeAction::Turn(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(SnakeAction::Turn(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(SnakeAction::Turn(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(SnakeAction::Turn(Direction::Right))
        }

        KeyCode::Char('r') | KeyCode::Char('R') => Some(SnakeAction::Restart),

        _ => None,
    }
}

/// Map keyboard input to a Tetris action.
pub fn tetris_action(key: KeyEvent) -> Option<TetrisAction> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(TetrisAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(TetrisAction::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(TetrisAction::SoftDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(TetrisAction::Rotate),

        // Actions
        KeyCode::Char(' ') => Some(TetrisAction::HardDrop),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(TetrisAction::Restart),

        _ => None,
    }
}

/// Map keyboard input to a launcher menu selection.
pub fn menu_selection(key: KeyEvent) -> Option<GameId> {
    match key.code {
        KeyCode::Char('1') | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameId::Snake),
        KeyCode::Char('2') | KeyCode::Char('t') | KeyCode::Char('T') => Some(GameId::Tetris),
        _ => None,
    }
}

/// Check if key should close the current game session (back to the menu).
pub fn should_close(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
}

/// Check if key should quit the whole program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_snake_turn_keys() {
        assert_eq!(
            snake_action(KeyEvent::from(KeyCode::Up)),
            Some(SnakeAction::Turn(Direction::Up))
        );
        assert_eq!(
            snake_action(KeyEvent::from(KeyCode::Down)),
            Some(SnakeAction::Turn(Direction::Down))
        );
        assert_eq!(
            snake_action(KeyEvent::from(KeyCode::Char('a'))),
            Some(SnakeAction::Turn(Direction::Left))
        );
        assert_eq!(
            snake_action(KeyEvent::from(KeyCode::Char('D'))),
            Some(SnakeAction::Turn(Direction::Right))
        );
    }

    #[test]
    fn test_snake_restart_and_unmapped_keys() {
        assert_eq!(
            snake_action(KeyEvent::from(KeyCode::Char('r'))),
            Some(SnakeAction::Restart)
        );
        assert_eq!(snake_action(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(snake_action(KeyEvent::from(KeyCode::Char(' '))), None);
    }

    #[test]
    fn test_tetris_movement_keys() {
        assert_eq!(
            tetris_action(KeyEvent::from(KeyCode::Left)),
            Some(TetrisAction::MoveLeft)
        );
        assert_eq!(
            tetris_action(KeyEvent::from(KeyCode::Right)),
            Some(TetrisAction::MoveRight)
        );
        assert_eq!(
            tetris_action(KeyEvent::from(KeyCode::Down)),
            Some(TetrisAction::SoftDrop)
        );

        assert_eq!(
            tetris_action(KeyEvent::from(KeyCode::Char('A'))),
            Some(TetrisAction::MoveLeft)
        );
        assert_eq!(
            tetris_action(KeyEvent::from(KeyCode::Char('d'))),
            Some(TetrisAction::MoveRight)
        );
        assert_eq!(
            tetris_action(KeyEvent::from(KeyCode::Char('s'))),
            Some(TetrisAction::SoftDrop)
        );
    }

    #[test]
    fn test_tetris_rotate_and_drop_keys() {
        assert_eq!(
            tetris_action(KeyEvent::from(KeyCode::Up)),
            Some(TetrisAction::Rotate)
        );
        assert_eq!(
            tetris_action(KeyEvent::from(KeyCode::Char('w'))),
            Some(TetrisAction::Rotate)
        );
        assert_eq!(
            tetris_action(KeyEvent::from(KeyCode::Char(' '))),
            Some(TetrisAction::HardDrop)
        );
        assert_eq!(
            tetris_action(KeyEvent::from(KeyCode::Char('r'))),
            Some(TetrisAction::Restart)
        );
        assert_eq!(tetris_action(KeyEvent::from(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_menu_selection_keys() {
        assert_eq!(
            menu_selection(KeyEvent::from(KeyCode::Char('1'))),
            Some(GameId::Snake)
        );
        assert_eq!(
            menu_selection(KeyEvent::from(KeyCode::Char('s'))),
            Some(GameId::Snake)
        );
        assert_eq!(
            menu_selection(KeyEvent::from(KeyCode::Char('2'))),
            Some(GameId::Tetris)
        );
        assert_eq!(
            menu_selection(KeyEvent::from(KeyCode::Char('T'))),
            Some(GameId::Tetris)
        );
        assert_eq!(menu_selection(KeyEvent::from(KeyCode::Char('3'))), None);
    }

    #[test]
    fn test_close_and_quit_keys() {
        assert!(should_close(KeyEvent::from(KeyCode::Esc)));
        assert!(!should_close(KeyEvent::from(KeyCode::Char('q'))));

        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
