//! Command-line interface for ntoe.

use clap::{Parser, Subcommand};

/// ntoe - N×N tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "ntoe")]
#[command(about = "N×N tic-tac-toe with undo, hints and a random computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply when it is missing)
    #[arg(short, long, global = true, default_value = "ntoe.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play {
        /// Board side length (3, 4 or 5)
        #[arg(short, long)]
        size: Option<usize>,

        /// Let the computer play O
        #[arg(long)]
        opponent: bool,

        /// Hide winning-move hints
        #[arg(long)]
        no_hints: bool,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the winning lines for a board size
    Lines {
        /// Board side length (3, 4 or 5)
        #[arg(short, long, default_value = "3")]
        size: usize,
    },

    /// Apply 0-based cell indices to an empty board and print the result as JSON
    Replay {
        /// Board side length (3, 4 or 5)
        #[arg(short, long, default_value = "3")]
        size: usize,

        /// Cell indices, X first
        cells: Vec<usize>,
    },

    /// Pit two random players against each other and tally the results
    Simulate {
        /// Board side length (3, 4 or 5)
        #[arg(short, long, default_value = "3")]
        size: usize,

        /// Number of games to play
        #[arg(short, long, default_value = "1000")]
        games: usize,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}
