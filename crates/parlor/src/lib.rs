//! Parlor - play tic-tac-toe against a computer opponent in the terminal.
//!
//! # Architecture
//!
//! - **Series**: level rules (games needed, wins needed, difficulty) and
//!   the running scoreboard
//! - **Players**: the [`Player`] trait with human and computer seats
//! - **Session**: drives games and level series between two players
//! - **Report**: analysis of a single board snapshot
//! - **Config**: TOML match configuration
//!
//! Game rules and move search live in [`parlor_tictactoe`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod players;
mod report;
mod series;
mod session;

pub use config::{ConfigError, MatchConfig};
pub use players::{ComputerPlayer, HumanPlayer, Player};
pub use report::{Evaluation, InconsistentBoard, MoveScore, evaluate};
pub use series::{MAX_GAMES, Scoreboard, SeriesRules};
pub use session::{GameEnd, duel, play_game, play_series};
