//! First-class invariants for the game history.
//!
//! Invariants are logical properties of a [`GameState`](crate::GameState)
//! that must hold after every transition. The engine checks them in debug
//! builds; they can also be tested on their own.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
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
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not only the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        match (<(I1, I2) as InvariantSet<S>>::check_all(state), I3::holds(state)) {
            (Ok(()), true) => Ok(()),
            (Ok(()), false) => Err(vec![InvariantViolation::new(I3::description())]),
            (Err(mut violations), holds) => {
                if !holds {
                    violations.push(InvariantViolation::new(I3::description()));
                }
                Err(violations)
            }
        }
    }
}

pub mod cursor_in_bounds;
pub mod no_move_after_win;
pub mod single_mark_per_step;

pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use no_move_after_win::NoMoveAfterWinInvariant;
pub use single_mark_per_step::SingleMarkPerStepInvariant;

/// All history invariants as a composable set.
pub type RewindInvariants = (
    CursorInBoundsInvariant,
    SingleMarkPerStepInvariant,
    NoMoveAfterWinInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameEngine, GameState};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(RewindInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_jump_and_branch() {
        let mut engine = GameEngine::replay(&[0, 4, 8, 2]);
        engine.jump_to(2);
        engine.apply_move(6);
        assert!(RewindInvariants::check_all(engine.state()).is_ok());
    }

    #[test]
    fn test_invariant_set_collects_every_violation() {
        let mut state = GameState::new();
        state.history.clear();
        state.cursor = 3;

        let violations = RewindInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            CursorInBoundsInvariant::description()
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (CursorInBoundsInvariant, SingleMarkPerStepInvariant);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }
}
