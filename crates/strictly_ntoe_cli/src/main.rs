//! ntoe - N×N tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use strictly_ntoe::{BoardSize, GameSession, GameState, RandomOpponent, generate_lines};
use strictly_ntoe_cli::{Cli, Command, NtoeConfig, run, simulate};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = NtoeConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play {
            size,
            opponent,
            no_hints,
            seed,
        } => play(config.with_overrides(size, opponent, no_hints, seed)?),
        Command::Lines { size } => print_lines(size),
        Command::Replay { size, cells } => replay(size, &cells),
        Command::Simulate { size, games, seed } => {
            run_simulation(size, games, seed.or(*config.seed()))
        }
    }
}

fn opponent(seed: Option<u64>) -> RandomOpponent {
    match seed {
        Some(seed) => RandomOpponent::seeded(seed),
        None => RandomOpponent::new(),
    }
}

fn board_size(side: usize) -> Result<BoardSize> {
    BoardSize::try_from(side).context("Invalid --size")
}

/// Interactive game on stdin/stdout.
#[instrument(skip(config))]
fn play(config: NtoeConfig) -> Result<()> {
    let settings = config.session_settings()?;
    info!(?settings, "Starting interactive game");
    let mut session = GameSession::new(settings, opponent(*config.seed()));
    run(&mut session, std::io::stdin().lock(), std::io::stdout().lock())?;
    Ok(())
}

/// Prints each winning line as 0-based indices.
fn print_lines(side: usize) -> Result<()> {
    for line in generate_lines(board_size(side)?) {
        let cells: Vec<String> = line.indices().iter().map(usize::to_string).collect();
        println!("{:<14} {}", line.kind().to_string(), cells.join(" "));
    }
    Ok(())
}

/// Replays cells and prints the resulting state as JSON.
#[instrument]
fn replay(side: usize, cells: &[usize]) -> Result<()> {
    let game = GameState::replay(board_size(side)?, cells)?;
    println!("{}", game.board().display());
    let summary = json!({
        "status": game.status(),
        "current_player": game.current_player(),
        "moves": game.move_count(),
        "history": game.history(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Random self play tally.
#[instrument]
fn run_simulation(side: usize, games: usize, seed: Option<u64>) -> Result<()> {
    let tally = simulate(board_size(side)?, games, &mut opponent(seed));
    println!("{}", serde_json::to_string_pretty(&tally)?);
    Ok(())
}
