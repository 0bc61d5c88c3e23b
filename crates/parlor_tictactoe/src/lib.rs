//! Pure tic-tac-toe logic for parlor.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Player`], [`Square`], [`Position`], [`Move`]
//! - **Rules**: [`check_outcome`] classifies a board as in progress, won or
//!   drawn, scanning the eight [`LINES`] in a fixed order
//! - **Evaluator**: [`best_move`] (exhaustive minimax with alpha-beta) and
//!   [`choose_move`] (difficulty-scaled blend with random play)
//! - **Game**: [`Game`] validates moves and owns one match
//!
//! Nothing here performs I/O or keeps state between calls.
//!
//! # Example
//!
//! ```
//! use parlor_tictactoe::{Board, Outcome, Player, Position, best_move, check_outcome};
//!
//! let board: Board = "XX./OO./...".parse().unwrap();
//! assert_eq!(check_outcome(&board), Outcome::InProgress);
//! assert_eq!(best_move(&board, Player::O), Some(Position::MiddleRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod difficulty;
mod error;
mod evaluator;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::Move;
pub use difficulty::Difficulty;
pub use error::{BoardParseError, MoveError};
pub use evaluator::{WIN_SCORE, best_move, choose_move, score_moves};
pub use game::Game;
pub use invariants::{InvariantViolation, validate};
pub use position::Position;
pub use rules::{LINES, Outcome, WinningLine, check_outcome, check_winner, winning_line};
pub use types::{Board, Player, Square};

/// Alias for clarity where a player's mark is meant rather than a seat.
pub type Mark = Player;
