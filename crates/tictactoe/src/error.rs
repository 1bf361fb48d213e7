//! Error types for move validation.

/// Error returned when a move cannot be interpreted at all.
///
/// Occupied cells and moves after game over are not errors; the session
/// reports them as [`MoveOutcome::Rejected`](crate::MoveOutcome::Rejected).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name one of the nine cells.
    #[display("Index {} is outside the board (must be 0-8)", _0)]
    InvalidIndex(usize),
}

impl std::error::Error for MoveError {}
