//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::types::{Cell, Marker};
use tracing::instrument;

/// The eight index sets that win when uniformly marked.
pub const TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Returns the first triple whose cells are equal and non-empty.
#[instrument(skip(board))]
pub fn winning_triple(board: &Board) -> Option<[usize; 3]> {
    let cells = board.cells();
    TRIPLES.into_iter().find(|&[a, b, c]| {
        cells[a] != Cell::Empty && cells[a] == cells[b] && cells[a] == cells[c]
    })
}

/// Returns the marker holding a complete triple, if any.
pub fn winner(board: &Board) -> Option<Marker> {
    winning_triple(board).and_then(|[a, _, _]| board.cells()[a].marker())
}
