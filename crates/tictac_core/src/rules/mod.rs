//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are separated from the
//! game engine so they can be checked on any board, including ones that
//! alternating play could never reach.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, LineKind, check_winner, winning_line};

use crate::board::Board;
use crate::types::GameState;
use tracing::instrument;

/// Derives the game state from the board alone.
///
/// A completed line takes precedence over a full board.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameState {
    if let Some(mark) = check_winner(board) {
        GameState::Won(mark)
    } else if is_full(board) {
        GameState::Drawn
    } else {
        GameState::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Mark};

    const X: Cell = Cell::Marked(Mark::X);
    const O: Cell = Cell::Marked(Mark::O);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameState::InProgress);
    }

    #[test]
    fn test_row_major_draw() {
        let board = Board::from_cells([X, O, X, O, X, O, O, X, O]);
        assert_eq!(evaluate(&board), GameState::Drawn);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let board = Board::from_cells([X, X, X, O, O, X, O, X, O]);
        assert_eq!(evaluate(&board), GameState::Won(Mark::X));
    }

    #[test]
    fn test_partial_board_in_progress() {
        let board = Board::from_cells([X, O, E, E, X, E, E, E, O]);
        assert_eq!(evaluate(&board), GameState::InProgress);
    }
}
