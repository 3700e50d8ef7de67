//! First-class invariants for N×N tic-tac-toe.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are testable independently and are checked in debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
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
/// Implemented for triples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
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
        finish(violations)
    }
}

pub mod alternating_turn;
pub mod board_shape;
pub mod history_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use board_shape::BoardShapeInvariant;
pub use history_consistent::HistoryConsistentInvariant;

/// All game invariants as a composable set.
pub type NtoeInvariants = (
    BoardShapeInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardSize, GameState, Player, Square};

    #[test]
    fn test_invariant_set_holds_for_empty_game() {
        let game = GameState::new(BoardSize::Three);
        assert!(NtoeInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_undo() {
        let game = GameState::replay(BoardSize::Four, &[0, 5, 10]).unwrap();
        assert!(NtoeInvariants::check_all(&game).is_ok());
        let game = game.undo_move();
        assert!(NtoeInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut game = GameState::new(BoardSize::Three);
        game.board_mut().set(4, Square::Occupied(Player::O)).unwrap();

        let violations = NtoeInvariants::check_all(&game).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(
                HistoryConsistentInvariant::description()
            )]
        );
    }
}
