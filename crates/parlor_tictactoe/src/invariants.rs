//! Board invariants.
//!
//! A board reached through legal play satisfies every invariant here. The
//! evaluator trusts its input and never checks them; the match state
//! machine asserts them in debug builds and front ends use [`validate`] to
//! reject hand-written snapshots.

use crate::rules::win::has_line;
use crate::{Board, Player};
use tracing::instrument;

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
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(checks: &[(bool, &'static str)]) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();

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
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ])
    }
}

/// X moves first and turns alternate, so X has as many marks as O or one more.
pub struct AlternatingCount;

impl Invariant<Board> for AlternatingCount {
    fn holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "Mark counts follow alternating turns starting with X"
    }
}

/// Play stops at the first completed line, so both players cannot own one.
pub struct SingleWinner;

impl Invariant<Board> for SingleWinner {
    fn holds(board: &Board) -> bool {
        !(has_line(board, Player::X) && has_line(board, Player::O))
    }

    fn description() -> &'static str {
        "At most one player has three in a row"
    }
}

/// The owner of a completed line made the last move.
pub struct WinnerMovedLast;

impl Invariant<Board> for WinnerMovedLast {
    fn holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        let x_ok = !has_line(board, Player::X) || x == o + 1;
        let o_ok = !has_line(board, Player::O) || x == o;
        x_ok && o_ok
    }

    fn description() -> &'static str {
        "The winning player made the last move"
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (AlternatingCount, SingleWinner, WinnerMovedLast);

/// Checks that a board could have been reached by legal play.
#[instrument(skip(board), fields(board = %board))]
pub fn validate(board: &Board) -> Result<(), Vec<InvariantViolation>> {
    BoardInvariants::check_all(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(snapshot: &str) -> Board {
        snapshot.parse().unwrap()
    }

    #[test]
    fn test_legal_boards_hold() {
        assert!(validate(&Board::new()).is_ok());
        assert!(validate(&board("X../.O./...")).is_ok());
        assert!(validate(&board("XXX/OO./...")).is_ok());
        assert!(validate(&board("XOX/XOO/OXX")).is_ok());
    }

    #[test]
    fn test_too_many_o_marks() {
        let violations = validate(&board("O../.../...")).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            AlternatingCount::description()
        );
    }

    #[test]
    fn test_two_winners_detected() {
        let violations = validate(&board("XXX/OOO/...")).unwrap_err();
        let descriptions: Vec<_> = violations.iter().map(|v| v.description.as_str()).collect();
        assert!(descriptions.contains(&SingleWinner::description()));
        assert!(descriptions.contains(&WinnerMovedLast::description()));
    }

    #[test]
    fn test_x_kept_playing_after_o_won() {
        // O completed the middle row but X has an extra mark.
        let b = board("XX./OOO/X.X");
        assert!(AlternatingCount::holds(&b));
        assert!(!WinnerMovedLast::holds(&b));
    }

    #[test]
    fn test_two_invariants_as_set() {
        type Counts = (AlternatingCount, SingleWinner);
        assert!(Counts::check_all(&board("XO./.../...")).is_ok());
    }
}
