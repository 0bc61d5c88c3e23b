//! Outcome classification of a board snapshot.

use super::win::check_winner;
use crate::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
///
/// `InProgress` is the only non-terminal state; it moves to one of the
/// others exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// At least one empty square and no completed line.
    InProgress,
    /// The player completed a line.
    Won(Player),
    /// Full board with no completed line.
    Draw,
}

impl Outcome {
    /// Returns true once the game can accept no more moves.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Classifies a board. Total and deterministic, never mutates.
#[instrument(skip(board), fields(board = %board))]
pub fn check_outcome(board: &Board) -> Outcome {
    classify(board)
}

/// Uninstrumented classification for the search hot path.
pub(crate) fn classify(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(snapshot: &str) -> Outcome {
        check_outcome(&snapshot.parse().unwrap())
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(outcome("........."), Outcome::InProgress);
    }

    #[test]
    fn test_win_beats_full_board() {
        assert_eq!(outcome("XXX/OOX/OXO"), Outcome::Won(Player::X));
    }

    #[test]
    fn test_full_board_draw() {
        assert_eq!(outcome("XOX/XOO/OXX"), Outcome::Draw);
    }

    #[test]
    fn test_partial_board_in_progress() {
        assert_eq!(outcome("XO./.X./..O"), Outcome::InProgress);
    }

    #[test]
    fn test_terminal_and_winner() {
        assert!(!Outcome::InProgress.is_terminal());
        assert!(Outcome::Draw.is_terminal());
        assert_eq!(Outcome::Won(Player::O).winner(), Some(Player::O));
        assert_eq!(Outcome::Draw.winner(), None);
        assert_eq!(Outcome::Won(Player::O).to_string(), "Player O wins");
    }
}
