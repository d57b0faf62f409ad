//! Game engine for tic-tac-toe.
//!
//! `BoardGame` owns the board, the side to move and the move history.
//! Its state (in progress, won, drawn) is never stored: every query
//! re-derives it from the board.

use crate::action::{Move, MoveError};
use crate::board::Board;
use crate::invariants::assert_invariants;
use crate::position::Position;
use crate::rules::{self, Line};
use crate::types::{Cell, GameState, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A single game of tic-tac-toe.
///
/// Deserializing rebuilds the game by replaying its recorded history;
/// the serialized board and side to move are derived, not trusted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RecordedGame")]
pub struct BoardGame {
    pub(crate) board: Board,
    pub(crate) to_move: Mark,
    pub(crate) history: Vec<Move>,
}

impl BoardGame {
    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Places the current side's mark at `position`.
    ///
    /// On success the move is recorded and, unless it ended the game,
    /// the turn passes to the other side. The side to move stays frozen
    /// once the game is over.
    ///
    /// # Errors
    ///
    /// - `MoveError::GameOver` if the game is won or drawn.
    /// - `MoveError::CellOccupied` if the cell already holds a mark.
    ///
    /// The game is unchanged on error.
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn place_mark(&mut self, position: Position) -> Result<(), MoveError> {
        let state = self.evaluate();
        if state.is_terminal() {
            warn!(%state, "Move rejected: game is over");
            return Err(MoveError::GameOver(state));
        }

        if !self.board.is_empty(position) {
            warn!(%position, "Move rejected: cell occupied");
            return Err(MoveError::CellOccupied(position));
        }

        let mark = self.to_move;
        self.board.set(position, Cell::Marked(mark));
        self.history.push(Move::new(mark, position));
        debug!(%mark, %position, "Move accepted");

        match self.evaluate() {
            GameState::InProgress => self.to_move = mark.opponent(),
            state => info!(%state, moves = self.history.len(), "Game over"),
        }

        assert_invariants(self);
        Ok(())
    }

    /// Derives the game state from the board.
    #[instrument(skip(self))]
    pub fn evaluate(&self) -> GameState {
        rules::evaluate(&self.board)
    }

    /// Returns the line that won the game, if any.
    #[instrument(skip(self))]
    pub fn winning_line(&self) -> Option<Line> {
        rules::winning_line(&self.board).map(|(line, _)| line)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move (the last mover once the game is over).
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the empty positions, or none once the game is over.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.evaluate().is_terminal() {
            return Vec::new();
        }
        self.board.empty_positions().collect()
    }

    /// Captures a read-only view of the game for rendering or export.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            to_move: self.to_move,
            state: self.evaluate(),
            winning_line: self.winning_line(),
            history: self.history.clone(),
        }
    }

    /// Plays `positions` in order from a fresh game, X first.
    ///
    /// # Errors
    ///
    /// Returns the first `MoveError` hit.
    #[instrument(skip(positions))]
    pub fn replay(positions: impl IntoIterator<Item = Position>) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for position in positions {
            game.place_mark(position)?;
        }
        Ok(game)
    }
}

/// Serialized form accepted when deserializing a `BoardGame`.
#[derive(Deserialize)]
struct RecordedGame {
    history: Vec<Move>,
}

/// Why a recorded history could not be replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RecordError {
    /// A recorded move was rejected by the rules.
    #[display("Recorded move rejected: {}", _0)]
    Rejected(MoveError),

    /// A recorded move carries the wrong side's mark.
    #[display("Recorded move {} is out of turn", _0)]
    OutOfTurn(Move),
}

impl std::error::Error for RecordError {}

impl TryFrom<RecordedGame> for BoardGame {
    type Error = RecordError;

    fn try_from(record: RecordedGame) -> Result<Self, Self::Error> {
        let mut game = Self::new();
        for recorded in record.history {
            if recorded.mark != game.to_move {
                return Err(RecordError::OutOfTurn(recorded));
            }
            game.place_mark(recorded.position)
                .map_err(RecordError::Rejected)?;
        }
        Ok(game)
    }
}

/// Read-only view of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Snapshot {
    /// Board contents.
    board: Board,
    /// Side to move.
    to_move: Mark,
    /// State derived from the board.
    state: GameState,
    /// First completed line, if any.
    winning_line: Option<Line>,
    /// Accepted moves in order.
    history: Vec<Move>,
}
