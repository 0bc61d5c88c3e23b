//! Player trait and implementations.

use anyhow::Result;
use parlor_tictactoe::{Difficulty, Game, Position, choose_move};
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Trait for anything that can pick moves in a [`Game`].
pub trait Player {
    /// Picks the next position for the side to move.
    ///
    /// Returns `Ok(None)` when the player gives up the series.
    fn get_move(&mut self, game: &Game) -> Result<Option<Position>>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// Computer opponent backed by the minimax evaluator.
pub struct ComputerPlayer {
    name: String,
    difficulty: Difficulty,
    rng: StdRng,
}

impl ComputerPlayer {
    /// Creates a computer player with its own random source.
    #[instrument(skip(name, rng), fields(name = %name.as_ref()))]
    pub fn new(name: impl AsRef<str>, difficulty: Difficulty, rng: StdRng) -> Self {
        Self {
            name: name.as_ref().to_string(),
            difficulty,
            rng,
        }
    }

    /// Strength this player was created with.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Player for ComputerPlayer {
    fn get_move(&mut self, game: &Game) -> Result<Option<Position>> {
        let side = game.to_move();
        let pos = choose_move(game.board(), side, self.difficulty, &mut self.rng);
        debug!(ai = %self.name, position = ?pos, "Computer chose position");
        match pos {
            Some(pos) => Ok(Some(pos)),
            None => anyhow::bail!("No valid moves available"),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Human player typing cell numbers or labels on a line-based terminal.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a human player reading moves from `input` and prompting on
    /// `output`.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn get_move(&mut self, game: &Game) -> Result<Option<Position>> {
        loop {
            write!(
                self.output,
                "{} ({}), choose a cell [1-9, label, q to quit]: ",
                self.name,
                game.to_move()
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("Input closed");
                return Ok(None);
            }

            let line = line.trim();
            if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
                return Ok(None);
            }

            match Position::from_label_or_number(line) {
                Some(pos) if game.board().is_empty(pos) => return Ok(Some(pos)),
                Some(pos) => writeln!(self.output, "{} is already taken.", pos)?,
                None => writeln!(self.output, "Unrecognised cell {:?}.", line)?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
