//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Mark placed by a side.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum Mark {
    /// Side X (goes first).
    #[default]
    X,
    /// Side O (goes second).
    O,
}

impl Mark {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Current state of a game, derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameState {
    /// Moves are still accepted.
    #[display("in progress")]
    InProgress,
    /// A side completed a line.
    #[display("{} wins", _0)]
    Won(Mark),
    /// Board is full with no completed line.
    #[display("draw")]
    Drawn,
}

impl GameState {
    /// Returns true once no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        self != GameState::InProgress
    }

    /// Returns the winning side, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameState::Won(mark) => Some(mark),
            GameState::InProgress | GameState::Drawn => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_cell_mark() {
        assert_eq!(Cell::Empty.mark(), None);
        assert_eq!(Cell::Marked(Mark::O).mark(), Some(Mark::O));
        assert!(Cell::default().is_empty());
    }

    #[test]
    fn test_state_display() {
        assert_eq!(GameState::Won(Mark::X).to_string(), "X wins");
        assert_eq!(GameState::Drawn.to_string(), "draw");
        assert!(!GameState::InProgress.is_terminal());
        assert_eq!(GameState::Drawn.winner(), None);
    }
}
