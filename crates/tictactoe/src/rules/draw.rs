//! Tie detection logic for tic-tac-toe.

use super::win::winner;
use crate::board::Board;

/// A full board with no completed triple.
pub fn is_tie(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}
