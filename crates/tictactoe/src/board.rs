//! The 3x3 grid and the single placement operation.

use crate::error::MoveError;
use crate::types::{Cell, Marker};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Places `marker` at `index` if that cell is empty.
    ///
    /// Returns `Ok(true)` when the mark was placed and `Ok(false)` when the
    /// cell was already occupied, in which case the board is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidIndex`] if `index` is not in `0..9`.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, index: usize, marker: Marker) -> Result<bool, MoveError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(MoveError::InvalidIndex(index))?;

        if !cell.is_empty() {
            debug!(index, occupant = ?cell, "Cell already occupied");
            return Ok(false);
        }

        *cell = Cell::from(marker);
        Ok(true)
    }

    /// Returns all cells as a read-only snapshot.
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Indices of the empty cells, ascending.
    pub fn empty_indices(&self) -> Vec<usize> {
        (0..CELLS).filter(|&index| self.is_empty(index)).collect()
    }

    /// Clears every cell.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELLS];
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index].marker() {
                    Some(marker) => write!(f, "{marker}")?,
                    None => write!(f, "{}", index + 1)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
