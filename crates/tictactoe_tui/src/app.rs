//! Application state and key handling.

use crate::config::TuiConfig;
use crate::input;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::Stdout;
use std::time::Duration;
use tictactoe::{GameSession, MoveOutcome, Position};
use tracing::{debug, info, instrument, warn};

/// Which screen the UI is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Two name fields and a start prompt.
    NameEntry,
    /// The board, while a game runs and after it ends.
    Playing,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    config: TuiConfig,
    session: GameSession,
    screen: Screen,
    names: [String; 2],
    focus: usize,
    cursor: Position,
    status: String,
    should_quit: bool,
}

impl App {
    /// Creates the app on the name entry screen, optionally prefilled.
    pub fn new(config: TuiConfig, player_one: Option<String>, player_two: Option<String>) -> Self {
        Self {
            config,
            session: GameSession::new(),
            screen: Screen::NameEntry,
            names: [player_one.unwrap_or_default(), player_two.unwrap_or_default()],
            focus: 0,
            cursor: Position::Center,
            status: String::new(),
            should_quit: false,
        }
    }

    /// Main application loop.
    #[instrument(skip_all)]
    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("Starting terminal UI loop");
        loop {
            terminal.draw(|f| crate::ui::draw(f, self))?;

            if self.should_quit {
                info!("User quit");
                return Ok(());
            }

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.handle_key(key);
            }
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::NameEntry => self.handle_name_key(key.code),
            Screen::Playing => self.handle_game_key(key.code),
        }
    }

    fn handle_name_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = 1 - self.focus;
            }
            KeyCode::Backspace => {
                self.names[self.focus].pop();
            }
            KeyCode::Enter => self.start_game(),
            KeyCode::Char(c) => self.names[self.focus].push(c),
            _ => {}
        }
    }

    fn handle_game_key(&mut self, code: KeyCode) {
        if let Some(direction) = input::direction(code) {
            self.cursor = self.cursor.step(direction);
            return;
        }
        if let Some(index) = input::cell_index(code) {
            if let Some(position) = Position::from_index(index) {
                self.cursor = position;
            }
            self.place(index);
            return;
        }

        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor.index()),
            KeyCode::Char('r') if self.session.is_game_over() => self.restart(),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    /// Starts a game with the typed names, defaulting blank ones.
    #[instrument(skip(self))]
    fn start_game(&mut self) {
        let (first, second) = self.config.player_names(&self.names[0], &self.names[1]);
        self.session.start(&first, &second);
        self.status = self.session.status_line();
        self.cursor = Position::Center;
        self.screen = Screen::Playing;
    }

    #[instrument(skip(self))]
    fn place(&mut self, index: usize) {
        match self.session.make_move(index) {
            Ok(MoveOutcome::Rejected) => debug!("Move ignored"),
            Ok(outcome) => self.status = outcome.to_string(),
            Err(e) => {
                warn!(error = %e, "Invalid move");
                self.status = e.to_string();
            }
        }
    }

    /// Returns to name entry. The next game starts from there.
    fn restart(&mut self) {
        debug!("Restarting game");
        self.screen = Screen::NameEntry;
        self.focus = 0;
        self.status.clear();
    }

    /// Gets the game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the visible screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Gets the typed player names.
    pub fn names(&self) -> &[String; 2] {
        &self.names
    }

    /// Index of the focused name field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
