//! Non-interactive play: apply a list of moves and report each outcome.

use crate::config::TuiConfig;
use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use std::io::Write;
use tictactoe::{Board, GameSession, MoveOutcome, Position};
use tracing::{info, instrument};

/// One line of `--json` output.
#[derive(Debug, Serialize)]
struct MoveReport<'a> {
    index: usize,
    outcome: &'a MoveOutcome,
    board: &'a Board,
}

/// Plays `moves` in a fresh session, writing one report per move to `out`.
///
/// Moves after the game has ended are still submitted and reported as
/// rejected.
///
/// # Errors
///
/// Fails on a move that is neither an index 0-8 nor a square label, or if
/// writing to `out` fails.
#[instrument(skip(config, out))]
pub fn play(
    config: &TuiConfig,
    player_one: &str,
    player_two: &str,
    moves: &[String],
    json: bool,
    out: &mut impl Write,
) -> Result<GameSession> {
    let (first, second) = config.player_names(player_one, player_two);
    let mut session = GameSession::new();
    session.start(&first, &second);

    for raw in moves {
        let position =
            Position::parse(raw).ok_or_else(|| anyhow!("Not a board square: {raw:?}"))?;
        let index = position.index();
        let outcome = session.make_move(index)?;

        if json {
            let report = MoveReport {
                index,
                outcome: &outcome,
                board: session.board(),
            };
            serde_json::to_writer(&mut *out, &report).context("Failed to write report")?;
            writeln!(out)?;
        } else {
            writeln!(out, "{position}: {outcome}")?;
        }
    }

    if !json {
        writeln!(out, "\n{}", session.board())?;
    }
    info!(status = %session.status_line(), "Scripted game finished");
    Ok(session)
}
