//! Tic Tac Toe - unified CLI.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tictactoe_tui::{App, Cli, Command, TuiConfig, logging, script};
use tracing::{error, info};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Tui {
            player_one,
            player_two,
        } => {
            let config = TuiConfig::load_or_default(&cli.config)?;
            logging::init_file(&config)?;
            run_tui(config, player_one, player_two)
        }
        Command::Play {
            player_one,
            player_two,
            json,
            moves,
        } => {
            let config = TuiConfig::load_or_default(&cli.config)?;
            logging::init_stderr(&config);
            let mut stdout = io::stdout().lock();
            script::play(&config, &player_one, &player_two, &moves, json, &mut stdout)?;
            Ok(())
        }
        Command::DefaultConfig => {
            print!("{}", TuiConfig::default_toml()?);
            Ok(())
        }
    }
}

/// Run the interactive terminal UI
fn run_tui(config: TuiConfig, player_one: Option<String>, player_two: Option<String>) -> Result<()> {
    info!("Starting Tic Tac Toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, player_one, player_two);
    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}
