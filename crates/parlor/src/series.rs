//! Level series: how many games a level takes and when it is cleared.

use derive_getters::Getters;
use parlor_tictactoe::{Difficulty, Mark, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Upper bound on the number of games in one level's series.
pub const MAX_GAMES: u32 = 7;

/// Rules for the series played at one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SeriesRules {
    /// Level number (1-based).
    level: u32,
    /// Computer strength for every game of the series.
    difficulty: Difficulty,
    /// Games that must be played before the level can be cleared.
    games_needed: u32,
    /// Wins required to clear the level.
    wins_needed: u32,
}

impl SeriesRules {
    /// Series rules for a level: three games, plus one per ten levels,
    /// capped at [`MAX_GAMES`]; a majority of them must be won.
    #[instrument]
    pub fn for_level(level: u32) -> Self {
        Self::with_difficulty(level, Difficulty::for_level(level))
    }

    /// Same game counts as [`SeriesRules::for_level`] with an explicit
    /// difficulty.
    #[instrument]
    pub fn with_difficulty(level: u32, difficulty: Difficulty) -> Self {
        let games_needed = (3 + level / 10).min(MAX_GAMES);
        Self {
            level,
            difficulty,
            games_needed,
            wins_needed: games_needed.div_ceil(2),
        }
    }
}

/// Running tally of a series from the human player's side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Games the human won.
    player_wins: u32,
    /// Games the computer won.
    computer_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished game. `player` is the mark the human played.
    ///
    /// In-progress outcomes are ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome, player: Mark) {
        match outcome {
            Outcome::Won(winner) if winner == player => self.player_wins += 1,
            Outcome::Won(_) => self.computer_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {
                debug!("Ignoring unfinished game");
                return;
            }
        }
        debug!(
            player_wins = self.player_wins,
            computer_wins = self.computer_wins,
            draws = self.draws,
            "Scoreboard updated"
        );
    }

    /// Games recorded so far.
    pub fn total_games(&self) -> u32 {
        self.player_wins + self.computer_wins + self.draws
    }

    /// The level is cleared once enough games were played and enough of
    /// them won.
    pub fn is_level_complete(&self, rules: &SeriesRules) -> bool {
        self.player_wins >= rules.wins_needed && self.total_games() >= rules.games_needed
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You: {}  Computer: {}  Draws: {}",
            self.player_wins, self.computer_wins, self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_games_needed_grows_and_caps() {
        assert_eq!(*SeriesRules::for_level(1).games_needed(), 3);
        assert_eq!(*SeriesRules::for_level(9).games_needed(), 3);
        assert_eq!(*SeriesRules::for_level(10).games_needed(), 4);
        assert_eq!(*SeriesRules::for_level(25).games_needed(), 5);
        assert_eq!(*SeriesRules::for_level(40).games_needed(), 7);
        assert_eq!(*SeriesRules::for_level(200).games_needed(), 7);
    }

    #[test]
    fn test_wins_needed_is_majority() {
        assert_eq!(*SeriesRules::for_level(1).wins_needed(), 2);
        assert_eq!(*SeriesRules::for_level(10).wins_needed(), 2);
        assert_eq!(*SeriesRules::for_level(25).wins_needed(), 3);
        assert_eq!(*SeriesRules::for_level(40).wins_needed(), 4);
    }

    #[test]
    fn test_difficulty_follows_level() {
        assert_eq!(*SeriesRules::for_level(5).difficulty(), Difficulty::Easy);
        assert_eq!(*SeriesRules::for_level(20).difficulty(), Difficulty::Medium);
        assert_eq!(*SeriesRules::for_level(31).difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_level_needs_wins_and_games() {
        let rules = SeriesRules::for_level(1);
        let mut board = Scoreboard::new();

        board.record(Outcome::Won(Mark::X), Mark::X);
        board.record(Outcome::Won(Mark::X), Mark::X);
        assert_eq!(board.total_games(), 2);
        assert!(!board.is_level_complete(&rules));

        board.record(Outcome::Draw, Mark::X);
        assert!(board.is_level_complete(&rules));
    }

    #[test]
    fn test_record_from_o_side() {
        let mut board = Scoreboard::new();
        board.record(Outcome::Won(Mark::X), Mark::O);
        board.record(Outcome::Won(Mark::O), Mark::O);
        board.record(Outcome::InProgress, Mark::O);
        assert_eq!(*board.player_wins(), 1);
        assert_eq!(*board.computer_wins(), 1);
        assert_eq!(board.total_games(), 2);
    }
}
