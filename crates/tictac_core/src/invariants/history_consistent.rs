//! History consistency invariant: history and board describe the same game.

use super::Invariant;
use crate::game::BoardGame;
use crate::types::Cell;

/// Invariant: every history entry is on the board and nothing else is.
pub struct HistoryConsistentInvariant;

impl Invariant<BoardGame> for HistoryConsistentInvariant {
    fn holds(game: &BoardGame) -> bool {
        let board = game.board();
        game.history().len() == board.filled()
            && game
                .history()
                .iter()
                .all(|mv| board.get(mv.position) == Cell::Marked(mv.mark))
    }

    fn description() -> &'static str {
        "Move history matches the marks on the board"
    }
}
