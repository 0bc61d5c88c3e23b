//! Analysis of a single board snapshot.

use derive_more::{Display, Error};
use derive_new::new;
use parlor_tictactoe::{
    Board, InvariantViolation, Mark, Outcome, Position, WinningLine, best_move, check_outcome,
    score_moves, validate, winning_line,
};
use serde::Serialize;
use tracing::{instrument, warn};

/// Minimax score of one candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, new)]
pub struct MoveScore {
    /// Candidate cell.
    pub position: Position,
    /// Row-major index of the cell (0-8).
    pub index: usize,
    /// Score from the mover's side; positive wins, negative loses.
    pub score: i32,
}

/// Everything the evaluator knows about a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Compact snapshot of the board.
    pub board: String,
    /// Classification of the board.
    pub outcome: Outcome,
    /// Completed line, if any.
    pub winning_line: Option<WinningLine>,
    /// Side the move suggestions are for.
    pub side: Mark,
    /// Search-optimal move, when the game is still open.
    pub best_move: Option<Position>,
    /// Score of every legal move, in index order.
    pub scores: Vec<MoveScore>,
}

/// Snapshot could not have arisen from legal play.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Inconsistent board: {}", join_violations(violations))]
pub struct InconsistentBoard {
    /// Every invariant the board breaks.
    pub violations: Vec<InvariantViolation>,
}

fn join_violations(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Evaluates `board` for `side`, defaulting to the side whose turn it is.
///
/// # Errors
///
/// [`InconsistentBoard`] when the snapshot breaks a board invariant.
#[instrument(skip(board), fields(board = %board))]
pub fn evaluate(board: &Board, side: Option<Mark>) -> Result<Evaluation, InconsistentBoard> {
    validate(board).map_err(|violations| {
        warn!(count = violations.len(), "Rejecting inconsistent board");
        InconsistentBoard { violations }
    })?;

    let side = side.unwrap_or_else(|| board.side_to_move());
    let outcome = check_outcome(board);

    let (best, scores) = if outcome.is_terminal() {
        (None, Vec::new())
    } else {
        let scores = score_moves(board, side)
            .into_iter()
            .map(|(pos, score)| MoveScore::new(pos, pos.to_index(), score))
            .collect();
        (best_move(board, side), scores)
    };

    Ok(Evaluation {
        board: board.to_string(),
        outcome,
        winning_line: winning_line(board),
        side,
        best_move: best,
        scores,
    })
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Board:   {}", self.board)?;
        writeln!(f, "Outcome: {}", self.outcome)?;
        if let Some(line) = &self.winning_line {
            let cells: Vec<_> = line.cells.iter().map(|p| p.label()).collect();
            writeln!(f, "Line:    {}", cells.join(", "))?;
        }
        if let Some(best) = self.best_move {
            writeln!(f, "Best move for {}: {} (cell {})", self.side, best, best.to_index() + 1)?;
        }
        for s in &self.scores {
            writeln!(f, "  {:<14} {:>3}", s.position.label(), s.score)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_open_board() {
        let board: Board = "XX./OO./...".parse().unwrap();
        let eval = evaluate(&board, None).unwrap();
        assert_eq!(eval.side, Mark::X);
        assert_eq!(eval.best_move, Some(Position::TopRight));
        assert_eq!(eval.scores.len(), 5);
        assert_eq!(eval.outcome, Outcome::InProgress);
    }

    #[test]
    fn test_evaluate_explicit_side() {
        let board: Board = "XX./OO./...".parse().unwrap();
        let eval = evaluate(&board, Some(Mark::O)).unwrap();
        assert_eq!(eval.best_move.map(Position::to_index), Some(5));
    }

    #[test]
    fn test_evaluate_finished_board() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let eval = evaluate(&board, None).unwrap();
        assert_eq!(eval.outcome, Outcome::Won(Mark::X));
        assert!(eval.best_move.is_none());
        assert!(eval.scores.is_empty());
        assert!(eval.winning_line.is_some());
    }

    #[test]
    fn test_evaluate_rejects_impossible_board() {
        let board: Board = "OO./.../...".parse().unwrap();
        let err = evaluate(&board, None).unwrap_err();
        assert!(!err.violations.is_empty());
        assert!(err.to_string().starts_with("Inconsistent board: "));
        assert!(err.to_string().contains(&err.violations[0].to_string()));
    }
}
