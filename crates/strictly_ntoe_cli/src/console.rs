//! Line-oriented game loop.
//!
//! Reads one command per line and redraws the board after each. Generic
//! over reader and writer so tests can drive it with in-memory buffers.

use std::io::{self, BufRead, Write};

use derive_more::Display;
use strictly_ntoe::{BoardSize, GameSession, GameStatus, MoveError, Opponent};
use tracing::{debug, instrument};

const HELP: &str = "Commands: <cell number> play | u undo | n new game | s <3|4|5> board size | c toggle computer | h toggle hints | q quit";

/// One parsed console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Play the 0-based cell.
    Play(usize),
    /// Take back the last move.
    Undo,
    /// Start over.
    NewGame,
    /// Switch board size.
    Size(BoardSize),
    /// Toggle the computer opponent.
    ToggleComputer,
    /// Toggle hints.
    ToggleHints,
    /// Print the command list.
    Help,
    /// Leave the loop.
    Quit,
}

/// A line that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CommandError {
    /// Nothing typed.
    #[display("Empty command")]
    Empty,
    /// Cell numbers start at 1.
    #[display("Cells are numbered from 1")]
    ZeroCell,
    /// `s` needs a supported size.
    #[display("Board size must be 3, 4 or 5")]
    BadSize,
    /// Anything else.
    #[display("Unknown command: {}", _0)]
    Unknown(String),
}

impl std::error::Error for CommandError {}

impl ConsoleCommand {
    /// Parses a line of input. Cell numbers are 1-based.
    #[instrument]
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };

        if let Ok(cell) = head.parse::<usize>() {
            return cell
                .checked_sub(1)
                .map(ConsoleCommand::Play)
                .ok_or(CommandError::ZeroCell);
        }

        match head.to_lowercase().as_str() {
            "u" | "undo" => Ok(ConsoleCommand::Undo),
            "n" | "new" => Ok(ConsoleCommand::NewGame),
            "c" | "computer" => Ok(ConsoleCommand::ToggleComputer),
            "h" | "hints" => Ok(ConsoleCommand::ToggleHints),
            "?" | "help" => Ok(ConsoleCommand::Help),
            "q" | "quit" => Ok(ConsoleCommand::Quit),
            "s" | "size" => words
                .next()
                .and_then(|w| w.parse::<usize>().ok())
                .and_then(|side| BoardSize::try_from(side).ok())
                .map(ConsoleCommand::Size)
                .ok_or(CommandError::BadSize),
            _ => Err(CommandError::Unknown(line.trim().to_string())),
        }
    }
}

/// Runs the game loop until `q` or end of input.
#[instrument(skip_all)]
pub fn run<O: Opponent>(
    session: &mut GameSession<O>,
    input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    writeln!(output, "{HELP}")?;
    render(session, &mut output)?;

    for line in input.lines() {
        let line = line?;
        let command = match ConsoleCommand::parse(&line) {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(error) => {
                writeln!(output, "{error}")?;
                continue;
            }
        };
        debug!(?command, "Console command");

        match command {
            ConsoleCommand::Play(index) => {
                if let Err(error) = session.state().try_apply_move(index) {
                    writeln!(output, "{}", describe_rejection(&error))?;
                    continue;
                }
                session.play(index);
            }
            ConsoleCommand::Undo => {
                session.undo();
            }
            ConsoleCommand::NewGame => {
                session.play_again();
            }
            ConsoleCommand::Size(size) => {
                session.set_board_size(size);
            }
            ConsoleCommand::ToggleComputer => {
                let enabled = !*session.settings().opponent_enabled();
                session.set_opponent_enabled(enabled);
                writeln!(output, "Computer {}", on_off(enabled))?;
            }
            ConsoleCommand::ToggleHints => {
                let enabled = !*session.settings().hints_enabled();
                session.set_hints_enabled(enabled);
                writeln!(output, "Hints {}", on_off(enabled))?;
            }
            ConsoleCommand::Help => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            ConsoleCommand::Quit => break,
        }

        render(session, &mut output)?;
    }

    output.flush()
}

/// Restates a rejected move with 1-based cell numbers.
fn describe_rejection(error: &MoveError) -> String {
    match error {
        MoveError::SquareOccupied(index) => format!("Cell {} is already taken", index + 1),
        MoveError::OutOfBounds { cells, .. } => format!("Pick a cell from 1 to {cells}"),
        other => other.to_string(),
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

fn render<O: Opponent>(session: &GameSession<O>, output: &mut impl Write) -> io::Result<()> {
    let state = session.state();
    writeln!(output)?;
    writeln!(output, "{}", state.board().display())?;
    match state.status() {
        GameStatus::InProgress => {
            writeln!(
                output,
                "{} to move ({} moves played)",
                state.current_player(),
                state.move_count()
            )?;
            for hint in session.hints() {
                writeln!(output, "{hint}")?;
            }
        }
        GameStatus::Won(_) | GameStatus::Draw => {
            if let Some(outcome) = state.outcome() {
                writeln!(output, "{outcome} Type n to play again.")?;
            }
        }
    }
    Ok(())
}
