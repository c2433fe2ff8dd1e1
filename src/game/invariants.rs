//! First-class invariants for game state.
//!
//! Invariants are logical properties that must hold after every transition.
//! [`GameState`] checks the full set in debug builds; tests can check them
//! independently.

use super::{GameState, Mark, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("invariant violated: {description}")]
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

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        check::<S, I4>(state, &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// The invariants every [`GameState`] upholds.
pub type GameInvariants = (InitialBoardEmpty, SingleCellDelta, AlternatingTurn, StepInBounds);

/// History starts from an empty board with no position.
pub struct InitialBoardEmpty;

impl Invariant<GameState> for InitialBoardEmpty {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .first()
            .is_some_and(|start| start.squares().is_clear() && start.position().is_none())
    }

    fn description() -> &'static str {
        "History starts with an empty board and no position"
    }
}

/// Each snapshot fills exactly one empty square: the one it records.
pub struct SingleCellDelta;

impl Invariant<GameState> for SingleCellDelta {
    fn holds(state: &GameState) -> bool {
        state.history().windows(2).all(|pair| {
            let (before, after) = (pair[0].squares(), pair[1].squares());
            match (before.diff(after).as_slice(), pair[1].position()) {
                ([changed], Some(pos)) => {
                    *changed == pos && before.is_empty(pos) && after.get(pos) != Square::Empty
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each move changes exactly the one empty square it records"
    }
}

/// X plays odd-numbered moves, O even-numbered, and the turn flag follows
/// the step.
pub struct AlternatingTurn;

impl Invariant<GameState> for AlternatingTurn {
    fn holds(state: &GameState) -> bool {
        let marks_alternate = state.history().iter().enumerate().skip(1).all(|(k, mv)| {
            let expected = if k % 2 == 1 { Mark::X } else { Mark::O };
            mv.position()
                .is_some_and(|pos| mv.squares().get(pos) == Square::Occupied(expected))
        });
        marks_alternate && state.x_is_next() == (state.step_number() % 2 == 0)
    }

    fn description() -> &'static str {
        "Marks alternate starting with X and x_is_next matches the step parity"
    }
}

/// The step pointer indexes an existing snapshot.
pub struct StepInBounds;

impl Invariant<GameState> for StepInBounds {
    fn holds(state: &GameState) -> bool {
        state.step_number() < state.history().len()
    }

    fn description() -> &'static str {
        "Step number lies within history"
    }
}
