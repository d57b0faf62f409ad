//! Moves and the ways they are rejected.

use crate::position::Position;
use crate::types::{GameState, Mark};
use serde::{Deserialize, Serialize};

/// An accepted move: a side placing its mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The side that moved.
    pub mark: Mark,
    /// Where the mark went.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position)
    }
}

/// Error returned when a move is rejected.
///
/// Neither variant changes the game; the caller re-prompts or stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The targeted cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The game has concluded.
    #[display("Game is already over ({})", _0)]
    GameOver(GameState),
}

impl std::error::Error for MoveError {}
