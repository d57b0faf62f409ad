//! Alternating turn invariant: sides alternate X, O, X, O, ...

use super::Invariant;
use crate::game::BoardGame;
use crate::types::Mark;

/// Invariant: sides alternate turns, X first.
///
/// While the game is in progress the side to move follows from the
/// history length. Once it is over the side to move is the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<BoardGame> for AlternatingTurnInvariant {
    fn holds(game: &BoardGame) -> bool {
        let history = game.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, mv)| mv.mark == if i % 2 == 0 { Mark::X } else { Mark::O });
        if !alternates {
            return false;
        }

        match history.last() {
            Some(last) if game.evaluate().is_terminal() => game.to_move() == last.mark,
            Some(last) => game.to_move() == last.mark.opponent(),
            None => game.to_move() == Mark::X,
        }
    }

    fn description() -> &'static str {
        "Sides alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&BoardGame::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let game = BoardGame::replay([
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
            Position::BottomRight,
        ])
        .expect("legal moves");
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.to_move(), Mark::O);
    }

    #[test]
    fn test_wrong_side_to_move_violates() {
        let mut game = BoardGame::replay([Position::Center]).expect("legal move");
        game.to_move = Mark::X;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
