//! Game session: players, turn order and terminal-state evaluation.

use crate::board::{Board, CELLS};
use crate::error::MoveError;
use crate::rules;
use crate::types::{Marker, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Lifecycle phase of a [`GameSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Phase {
    /// `start` has not been called yet.
    #[default]
    NotStarted,
    /// Moves are accepted.
    InProgress,
    /// The current player completed a triple.
    Won,
    /// The board filled up without a triple.
    Tie,
}

impl Phase {
    /// Won or Tie.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won | Phase::Tie)
    }
}

/// What happened after a call to [`GameSession::make_move`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The mark was placed; the named player moves next.
    Continue(String),
    /// The mark completed a triple for the named player.
    Win(String),
    /// The mark filled the board without a triple.
    Tie,
    /// Nothing changed: the cell was taken or no game is running.
    Rejected,
}

impl MoveOutcome {
    /// Win or Tie.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveOutcome::Win(_) | MoveOutcome::Tie)
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveOutcome::Continue(name) => write!(f, "{name}'s turn"),
            MoveOutcome::Win(name) => write!(f, "{name} wins!"),
            MoveOutcome::Tie => f.write_str("It's a tie!"),
            MoveOutcome::Rejected => f.write_str("Move rejected"),
        }
    }
}

/// A two-player game on one board.
///
/// Sessions are plain values: create as many as needed. [`start`] may be
/// called in any phase and replaces players, turn and board wholesale.
///
/// Serializes as a read-only snapshot; sessions are only built through
/// [`new`] and [`start`].
///
/// [`new`]: GameSession::new
/// [`start`]: GameSession::start
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSession {
    board: Board,
    players: Option<[Player; 2]>,
    turn: Marker,
    phase: Phase,
    moves: Vec<usize>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self {
            board: Board::new(),
            players: None,
            turn: Marker::X,
            phase: Phase::NotStarted,
            moves: Vec::new(),
        }
    }
}

impl GameSession {
    /// Creates a session that has not been started.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh game. The first player always plays X.
    #[instrument(skip(self))]
    pub fn start(&mut self, first: &str, second: &str) {
        self.players = Some([
            Player::new(first.to_string(), Marker::X),
            Player::new(second.to_string(), Marker::O),
        ]);
        self.turn = Marker::X;
        self.phase = Phase::InProgress;
        self.moves.clear();
        self.board.reset();
        info!("Game started");
    }

    /// The player whose turn it is, or `None` before [`start`](Self::start).
    ///
    /// After a win this is the winner; after a tie, the player who filled
    /// the last cell.
    pub fn current_player(&self) -> Option<&Player> {
        self.players
            .as_ref()
            .and_then(|players| players.iter().find(|player| *player.marker() == self.turn))
    }

    /// Places the current player's mark at `index` and evaluates the result.
    ///
    /// Occupied cells, moves after game over and moves before `start` all
    /// yield [`MoveOutcome::Rejected`] and leave the session unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidIndex`] if `index` is not in `0..9`.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn make_move(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        if index >= CELLS {
            debug!("Index out of range");
            return Err(MoveError::InvalidIndex(index));
        }

        if self.phase != Phase::InProgress {
            debug!("No game in progress, move rejected");
            return Ok(MoveOutcome::Rejected);
        }

        let Some(marker) = self.current_player().map(|player| *player.marker()) else {
            return Ok(MoveOutcome::Rejected);
        };

        if !self.board.place_mark(index, marker)? {
            debug!(?marker, "Cell occupied, move rejected");
            return Ok(MoveOutcome::Rejected);
        }
        self.moves.push(index);

        if rules::winner(&self.board).is_some() {
            self.phase = Phase::Won;
            let name = self.current_name();
            info!(winner = %name, ?marker, "Game won");
            return Ok(MoveOutcome::Win(name));
        }

        if rules::is_tie(&self.board) {
            self.phase = Phase::Tie;
            info!("Game tied");
            return Ok(MoveOutcome::Tie);
        }

        self.turn = self.turn.opponent();
        let next = self.current_name();
        debug!(next = %next, "Turn passed");
        Ok(MoveOutcome::Continue(next))
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both players, X first, once started.
    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once a win or tie has been reached.
    pub fn is_game_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// The winning player, if the game ended in a win.
    pub fn winner(&self) -> Option<&Player> {
        match self.phase {
            Phase::Won => self.current_player(),
            _ => None,
        }
    }

    /// The completed triple, if the game ended in a win.
    pub fn winning_triple(&self) -> Option<[usize; 3]> {
        rules::winning_triple(&self.board)
    }

    /// Indices placed so far in this game, in order.
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    /// One-line description of the session for a status bar.
    pub fn status_line(&self) -> String {
        match self.phase {
            Phase::NotStarted => "Enter player names to start".to_string(),
            Phase::InProgress => MoveOutcome::Continue(self.current_name()).to_string(),
            Phase::Won => MoveOutcome::Win(self.current_name()).to_string(),
            Phase::Tie => MoveOutcome::Tie.to_string(),
        }
    }

    fn current_name(&self) -> String {
        self.current_player()
            .map(|player| player.name().clone())
            .unwrap_or_default()
    }
}
