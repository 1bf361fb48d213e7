//! Command-line interface for the `tictactoe` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Hot-seat tic-tac-toe for two players
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui {
        /// Prefill the first player's name (plays X)
        #[arg(long)]
        player_one: Option<String>,

        /// Prefill the second player's name (plays O)
        #[arg(long)]
        player_two: Option<String>,
    },

    /// Play a scripted game and print each outcome
    Play {
        /// First player's name (plays X)
        #[arg(long, default_value = "")]
        player_one: String,

        /// Second player's name (plays O)
        #[arg(long, default_value = "")]
        player_two: String,

        /// Print one JSON object per move instead of text
        #[arg(long)]
        json: bool,

        /// Moves as indices 0-8 or labels such as `center` or `top-left`
        #[arg(required = true)]
        moves: Vec<String>,
    },

    /// Print the default configuration as TOML
    DefaultConfig,
}
