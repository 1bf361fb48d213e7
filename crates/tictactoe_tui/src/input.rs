//! Key translation for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe::Direction;

/// Maps arrow keys to cursor directions.
pub fn direction(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

/// Maps digit keys `1`-`9` to cell indices 0-8.
pub fn cell_index(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize - 1),
        _ => None,
    }
}
