//! Two-player tic-tac-toe rules.
//!
//! The crate owns the game logic only: a 3x3 [`Board`], the win and tie
//! [`rules`], and a [`GameSession`] that sequences turns between two named
//! players. Rendering and input belong to the caller.
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameSession, MoveOutcome};
//!
//! let mut session = GameSession::new();
//! session.start("Ada", "Grace");
//!
//! for index in [0, 3, 1, 4] {
//!     session.make_move(index)?;
//! }
//! assert_eq!(session.make_move(2)?, MoveOutcome::Win("Ada".to_string()));
//! assert_eq!(session.make_move(5)?, MoveOutcome::Rejected);
//! # Ok::<(), tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod position;
pub mod rules;
mod session;
mod types;

pub use board::{Board, CELLS};
pub use error::MoveError;
pub use position::{Direction, Position};
pub use session::{GameSession, MoveOutcome, Phase};
pub use types::{Cell, Marker, Player};
