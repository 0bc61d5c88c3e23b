//! Command-line interface for parlor.

use clap::{Parser, Subcommand};
use parlor_tictactoe::{Difficulty, Mark};

/// Parlor - tic-tac-toe against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "parlor")]
#[command(about = "Play tic-tac-toe against a difficulty-scaled computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a level series as X against the computer
    Play {
        /// Level to play (1 and up)
        #[arg(short, long)]
        level: Option<u32>,

        /// Override the level's difficulty (easy, medium, hard)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Path to a TOML match config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Analyse a board snapshot such as "XX./OO./..."
    Evaluate {
        /// Nine cells: X, O and . (or _ / -) for empty; '/' and spaces ignored
        board: String,

        /// Side to suggest a move for (defaults to the side to move)
        #[arg(short, long)]
        side: Option<Mark>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Let two computer players play each other
    Duel {
        /// Difficulty of X
        #[arg(long, default_value = "hard")]
        x_difficulty: Difficulty,

        /// Difficulty of O
        #[arg(long, default_value = "hard")]
        o_difficulty: Difficulty,

        /// Number of games
        #[arg(short, long, default_value = "10")]
        games: u32,

        /// Seed for both players' random choices
        #[arg(long)]
        seed: Option<u64>,
    },
}
