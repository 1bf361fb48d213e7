//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the session and the front ends can share them.

pub mod draw;
pub mod win;

pub use draw::is_tie;
pub use win::{TRIPLES, winner, winning_triple};
