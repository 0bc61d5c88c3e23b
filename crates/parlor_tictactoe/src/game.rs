//! A single match with move validation.
//!
//! The evaluator is pure and trusts its caller. `Game` is that caller: it
//! owns the board, enforces turn order and empty squares, and stops
//! accepting moves once the outcome is terminal.

use crate::evaluator::choose_move;
use crate::invariants::validate;
use crate::rules::{Outcome, WinningLine, check_outcome, winning_line};
use crate::{Board, Difficulty, Move, MoveError, Player, Square};
use rand::Rng;
use tracing::{debug, info, instrument};

/// Tic-tac-toe match state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Player,
    outcome: Outcome,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the completed line, once the game is won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        winning_line(&self.board)
    }

    /// Applies a move after checking it is legal.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the outcome is terminal
    /// - [`MoveError::WrongPlayer`] if it is not the mover's turn
    /// - [`MoveError::SquareOccupied`] if the square is taken
    #[instrument(skip(self, mv), fields(mv = %mv))]
    pub fn make_move(&mut self, mv: Move) -> Result<Outcome, MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if mv.player != self.to_move {
            return Err(MoveError::WrongPlayer(mv.player));
        }
        if !self.board.is_empty(mv.position) {
            return Err(MoveError::SquareOccupied(mv.position));
        }

        self.board.set(mv.position, Square::Occupied(mv.player));
        self.history.push(mv);
        self.to_move = mv.player.opponent();
        self.outcome = check_outcome(&self.board);

        debug_assert!(
            validate(&self.board).is_ok(),
            "legal play produced an inconsistent board"
        );

        if self.outcome.is_terminal() {
            info!(outcome = %self.outcome, moves = self.history.len(), "Game finished");
        } else {
            debug!(next = %self.to_move, "Move applied");
        }
        Ok(self.outcome)
    }

    /// Lets the computer play for the side to move.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] if the game has already finished.
    #[instrument(skip(self, rng))]
    pub fn play_computer<R: Rng + ?Sized>(
        &mut self,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<Move, MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let side = self.to_move;
        // An in-progress board always has an empty square.
        let position =
            choose_move(&self.board, side, difficulty, rng).ok_or(MoveError::GameOver)?;
        let mv = Move::new(side, position);
        self.make_move(mv)?;
        Ok(mv)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
