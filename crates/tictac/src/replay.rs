//! Non-interactive replay of a move list.

use crate::config::Config;
use anyhow::{Context, Result};
use std::io::Write;
use tictac_core::{BoardGame, GameState, Position};
use tracing::{info, instrument};

/// Plays `positions` from a fresh game and writes the result.
///
/// Prints the board and outcome, or the game snapshot as JSON when
/// `json` is set.
#[instrument(skip(output, config))]
pub fn run_replay(
    positions: &[Position],
    json: bool,
    config: &Config,
    mut output: impl Write,
) -> Result<GameState> {
    let game = BoardGame::replay(positions.iter().copied())
        .with_context(|| format!("Replay of {} moves failed", positions.len()))?;
    let state = game.evaluate();
    info!(%state, moves = positions.len(), "Replay finished");

    if json {
        let snapshot = serde_json::to_string_pretty(&game.snapshot())
            .context("Failed to serialize snapshot")?;
        writeln!(output, "{snapshot}")?;
        return Ok(state);
    }

    if *config.show_hints() {
        writeln!(output, "{:#}", game.board())?;
    } else {
        writeln!(output, "{}", game.board())?;
    }
    match state {
        GameState::Won(mark) => {
            let line = game
                .winning_line()
                .map(|line| format!(" on {line}"))
                .unwrap_or_default();
            writeln!(output, "{} wins{}!", config.player_name(mark), line)?;
        }
        GameState::Drawn => writeln!(output, "It's a draw!")?,
        GameState::InProgress => writeln!(output, "{} to move", game.to_move())?,
    }
    Ok(state)
}
