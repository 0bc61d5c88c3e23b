//! Driving games and series between two players.

use crate::players::Player;
use crate::series::{Scoreboard, SeriesRules};
use anyhow::{Context, Result};
use parlor_tictactoe::{Game, Mark, Move, Outcome};
use std::io::Write;
use tracing::{info, instrument, warn};

/// How a single game ended from the driver's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// The game reached a terminal outcome.
    Finished(Outcome),
    /// A player quit before the game finished.
    Abandoned,
}

/// Plays one game to the end. `x` moves first.
///
/// The board is printed to `out` before each move and once at the end.
#[instrument(skip_all, fields(x = x.name(), o = o.name()))]
pub fn play_game(
    x: &mut dyn Player,
    o: &mut dyn Player,
    out: &mut dyn Write,
) -> Result<(Game, GameEnd)> {
    let mut game = Game::new();

    while !game.outcome().is_terminal() {
        writeln!(out, "\n{}\n", game.board().display())?;

        let side = game.to_move();
        let player: &mut dyn Player = match side {
            Mark::X => &mut *x,
            Mark::O => &mut *o,
        };

        let Some(position) = player.get_move(&game)? else {
            info!(player = player.name(), "Player quit");
            return Ok((game, GameEnd::Abandoned));
        };

        game.make_move(Move::new(side, position))
            .with_context(|| format!("{} played an illegal move", player.name()))?;
        writeln!(out, "{} plays {}", player.name(), position)?;
    }

    writeln!(out, "\n{}\n", game.board().display())?;
    if let Some(line) = game.winning_line() {
        let cells: Vec<_> = line.cells.iter().map(|p| p.label()).collect();
        writeln!(out, "Winning line: {}", cells.join(", "))?;
    }
    let outcome = game.outcome();
    writeln!(out, "{}", outcome)?;
    Ok((game, GameEnd::Finished(outcome)))
}

/// Plays a level series with the human as X until the level is cleared or
/// the human quits.
#[instrument(skip_all, fields(level = rules.level()))]
pub fn play_series(
    rules: &SeriesRules,
    human: &mut dyn Player,
    computer: &mut dyn Player,
    out: &mut dyn Write,
) -> Result<Scoreboard> {
    let mut scoreboard = Scoreboard::new();
    writeln!(
        out,
        "Level {} against a {} computer: win {} of {} games.",
        rules.level(),
        rules.difficulty(),
        rules.wins_needed(),
        rules.games_needed()
    )?;

    while !scoreboard.is_level_complete(rules) {
        writeln!(out, "\nGame {}", scoreboard.total_games() + 1)?;
        match play_game(human, computer, out)? {
            (_, GameEnd::Finished(outcome)) => {
                scoreboard.record(outcome, Mark::X);
                writeln!(out, "{}", scoreboard)?;
            }
            (_, GameEnd::Abandoned) => {
                warn!(games = scoreboard.total_games(), "Series abandoned");
                writeln!(out, "Series abandoned.")?;
                return Ok(scoreboard);
            }
        }
    }

    info!(%scoreboard, "Level complete");
    writeln!(out, "Level complete! {}", scoreboard)?;
    Ok(scoreboard)
}

/// Plays `games` computer-vs-computer games and tallies them from X's side.
#[instrument(skip_all, fields(games = games))]
pub fn duel(
    x: &mut dyn Player,
    o: &mut dyn Player,
    games: u32,
    out: &mut dyn Write,
) -> Result<Scoreboard> {
    let mut scoreboard = Scoreboard::new();
    let mut sink = std::io::sink();

    for _ in 0..games {
        if let (_, GameEnd::Finished(outcome)) = play_game(x, o, &mut sink)? {
            scoreboard.record(outcome, Mark::X);
        }
    }

    writeln!(
        out,
        "{} (X) wins: {}  {} (O) wins: {}  Draws: {}",
        x.name(),
        scoreboard.player_wins(),
        o.name(),
        scoreboard.computer_wins(),
        scoreboard.draws()
    )?;
    Ok(scoreboard)
}
