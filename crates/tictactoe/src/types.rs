//! Core domain types for tic-tac-toe.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The symbol a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Marker {
    /// Marker X (always the first player).
    #[display("X")]
    X,
    /// Marker O (always the second player).
    #[display("O")]
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// A single board position: empty or holding a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Marked by X.
    X,
    /// Marked by O.
    O,
}

impl Cell {
    /// Returns the marker occupying this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Marker::X),
            Cell::O => Some(Marker::O),
        }
    }

    /// Returns true if no marker occupies this cell.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Marker> for Cell {
    fn from(marker: Marker) -> Self {
        match marker {
            Marker::X => Cell::X,
            Marker::O => Cell::O,
        }
    }
}

/// A named participant holding one marker for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_new::new, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    name: String,
    /// Marker assigned at session start.
    marker: Marker,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Marker::X.opponent(), Marker::O);
        assert_eq!(Marker::O.opponent(), Marker::X);
    }

    #[test]
    fn test_cell_marker_conversion() {
        assert_eq!(Cell::from(Marker::X), Cell::X);
        assert_eq!(Cell::from(Marker::O).marker(), Some(Marker::O));
        assert_eq!(Cell::Empty.marker(), None);
        assert!(Cell::default().is_empty());
    }

    #[test]
    fn test_player_getters() {
        let player = Player::new("Ada".to_string(), Marker::X);
        assert_eq!(player.name(), "Ada");
        assert_eq!(*player.marker(), Marker::X);
    }
}
