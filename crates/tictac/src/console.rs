//! Interactive console loop.
//!
//! Reads one position per line, re-prompts on bad input or occupied
//! cells, and stops once the game is won or drawn.

use crate::config::Config;
use std::io::{BufRead, Write};
use tictac_core::{BoardGame, GameState, MoveError, Position};
use tracing::{debug, info, instrument};

/// Console loop error.
#[derive(Debug, derive_more::Display)]
pub enum ConsoleError {
    /// Reading input or writing output failed.
    #[display("Console I/O failed: {}", _0)]
    Io(std::io::Error),

    /// Input ended before the game did.
    #[display("Input closed before the game finished")]
    InputClosed,
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        ConsoleError::Io(err)
    }
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConsoleError::Io(e) => Some(e),
            ConsoleError::InputClosed => None,
        }
    }
}

/// Drives a game over a line-oriented reader and writer.
pub struct Console<'a, R, W> {
    input: R,
    output: W,
    config: &'a Config,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W, config: &'a Config) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Plays `game` to the end and returns its final state.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::InputClosed` if input ends first, or
    /// `ConsoleError::Io` if a stream fails.
    #[instrument(skip_all)]
    pub fn run(&mut self, game: &mut BoardGame) -> Result<GameState, ConsoleError> {
        writeln!(self.output, "tic tac toe")?;

        loop {
            let state = game.evaluate();
            if state.is_terminal() {
                self.announce(game, state)?;
                return Ok(state);
            }

            self.render(game)?;
            let position = self.read_position(game)?;

            match game.place_mark(position) {
                Ok(()) => debug!(%position, "Move placed"),
                Err(MoveError::CellOccupied(_)) => {
                    writeln!(self.output, "Error: Tile already taken")?;
                }
                // State is checked at the top of the loop
                Err(MoveError::GameOver(_)) => {}
            }
        }
    }

    /// Prompts until a line parses to a position.
    fn read_position(&mut self, game: &BoardGame) -> Result<Position, ConsoleError> {
        let mark = game.to_move();
        loop {
            write!(
                self.output,
                "{} ({}), pick a square 1 - 9: ",
                self.config.player_name(mark),
                mark
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                info!("Input closed mid-game");
                return Err(ConsoleError::InputClosed);
            }

            match line.parse::<Position>() {
                Ok(position) => return Ok(position),
                Err(e) => {
                    debug!(error = %e, "Rejected input");
                    writeln!(self.output, "Error: value is not between 1 - 9")?;
                }
            }
        }
    }

    fn render(&mut self, game: &BoardGame) -> Result<(), ConsoleError> {
        if *self.config.show_hints() {
            writeln!(self.output, "{:#}", game.board())?;
        } else {
            writeln!(self.output, "{}", game.board())?;
        }
        Ok(())
    }

    fn announce(&mut self, game: &BoardGame, state: GameState) -> Result<(), ConsoleError> {
        match state {
            GameState::Won(mark) => {
                writeln!(self.output, "{} wins!", self.config.player_name(mark))?;
            }
            GameState::Drawn => writeln!(self.output, "It's a draw!")?,
            GameState::InProgress => {}
        }
        writeln!(self.output, "{}", game.board())?;
        Ok(())
    }
}
