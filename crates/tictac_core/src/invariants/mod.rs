//! Invariants for tic-tac-toe games.
//!
//! Invariants are logical properties that must hold after every
//! accepted move. They are asserted in debug builds and can be tested
//! independently.

use crate::game::BoardGame;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        collect(violations)
    }
}

pub mod alternating_turn;
pub mod history_consistent;
pub mod mark_balance;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use mark_balance::MarkBalanceInvariant;

/// All game invariants as a composable set.
pub type GameInvariants = (
    MarkBalanceInvariant,
    HistoryConsistentInvariant,
    AlternatingTurnInvariant,
);

/// Asserts that all game invariants hold (panics on violation in debug builds).
pub(crate) fn assert_invariants(game: &BoardGame) {
    if cfg!(debug_assertions)
        && let Err(violations) = GameInvariants::check_all(game)
    {
        for violation in &violations {
            warn!(%violation, "Invariant violated");
        }
        panic!("game invariants violated: {violations:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Cell, Mark};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&BoardGame::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let game = BoardGame::replay([Position::TopLeft, Position::Center, Position::TopRight])
            .expect("legal moves");
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut game = BoardGame::replay([Position::Center]).expect("legal move");
        // Corrupt the board behind the engine's back
        game.board.set(Position::TopLeft, Cell::Marked(Mark::O));
        game.board.set(Position::TopRight, Cell::Marked(Mark::O));

        let violations = GameInvariants::check_all(&game).expect_err("corrupted board");
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MarkBalanceInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&BoardGame::new()).is_ok());
    }
}
