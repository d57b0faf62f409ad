//! Mark balance invariant: X leads O by at most one mark.

use super::Invariant;
use crate::game::BoardGame;
use crate::types::Mark;

/// Invariant: X-count minus O-count is 0 or 1.
pub struct MarkBalanceInvariant;

impl Invariant<BoardGame> for MarkBalanceInvariant {
    fn holds(game: &BoardGame) -> bool {
        let x = game.board().count(Mark::X);
        let o = game.board().count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Cell;

    #[test]
    fn test_holds_through_a_game() {
        let mut game = BoardGame::new();
        for pos in [Position::Center, Position::TopLeft, Position::BottomLeft] {
            game.place_mark(pos).expect("empty cell");
            assert!(MarkBalanceInvariant::holds(&game));
        }
    }

    #[test]
    fn test_o_ahead_violates() {
        let mut game = BoardGame::new();
        game.board.set(Position::Center, Cell::Marked(Mark::O));
        assert!(!MarkBalanceInvariant::holds(&game));
    }
}
