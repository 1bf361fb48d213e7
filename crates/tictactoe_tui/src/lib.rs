//! Terminal front end for two-player tic-tac-toe.
//!
//! # Architecture
//!
//! - **Cli**: `tui`, `play` and `default-config` subcommands
//! - **Config**: TOML settings with defaults for every field
//! - **App**: name entry and board screens driven by key presses
//! - **Script**: non-interactive play for a list of moves
//!
//! All game rules live in the [`tictactoe`] crate; this crate only renders
//! the session and forwards input to it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod script;
pub mod ui;

pub use app::{App, Screen};
pub use cli::{Cli, Command};
pub use config::{ConfigError, TuiConfig};
