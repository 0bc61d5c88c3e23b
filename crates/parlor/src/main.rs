//! Parlor - unified CLI.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use parlor::{ComputerPlayer, HumanPlayer, MatchConfig, duel, evaluate, play_series};
use parlor_tictactoe::{Board, Difficulty, Mark};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            level,
            difficulty,
            seed,
            config,
        } => run_play(level, difficulty, seed, config),
        Command::Evaluate { board, side, json } => run_evaluate(&board, side, json),
        Command::Duel {
            x_difficulty,
            o_difficulty,
            games,
            seed,
        } => run_duel(x_difficulty, o_difficulty, games, seed),
    }
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Run an interactive level series on stdin/stdout.
#[instrument]
fn run_play(
    level: Option<u32>,
    difficulty: Option<Difficulty>,
    seed: Option<u64>,
    config: Option<PathBuf>,
) -> Result<()> {
    let base = match config {
        Some(path) => MatchConfig::from_file(&path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => MatchConfig::default(),
    };
    let config = base.with_overrides(level, difficulty, seed)?;
    let rules = config.series_rules();
    info!(level = config.level(), difficulty = %rules.difficulty(), "Starting series");

    let stdin = io::stdin();
    let mut human = HumanPlayer::new(config.player_name().as_str(), stdin.lock(), io::stdout());
    let mut computer =
        ComputerPlayer::new("Computer", *rules.difficulty(), rng_from(*config.seed()));

    let mut out = io::stdout();
    play_series(&rules, &mut human, &mut computer, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Analyse one snapshot and print the result.
#[instrument]
fn run_evaluate(board: &str, side: Option<Mark>, json: bool) -> Result<()> {
    let board: Board = board.parse()?;
    let evaluation = evaluate(&board, side)?;
    debug!(best = ?evaluation.best_move, "Evaluation complete");

    if json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        print!("{}", evaluation);
    }
    Ok(())
}

/// Run engine-vs-engine games.
#[instrument]
fn run_duel(
    x_difficulty: Difficulty,
    o_difficulty: Difficulty,
    games: u32,
    seed: Option<u64>,
) -> Result<()> {
    let mut rng = rng_from(seed);
    let mut x = ComputerPlayer::new(
        format!("{} X", x_difficulty),
        x_difficulty,
        StdRng::from_rng(&mut rng)?,
    );
    let mut o = ComputerPlayer::new(
        format!("{} O", o_difficulty),
        o_difficulty,
        StdRng::from_rng(&mut rng)?,
    );

    duel(&mut x, &mut o, games, &mut io::stdout())?;
    Ok(())
}
