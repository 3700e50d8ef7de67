//! Console front end for the strictly_ntoe engine.
//!
//! - **Config**: `ntoe.toml` loading and command-line overrides
//! - **Console**: the interactive stdin/stdout game loop
//! - **Simulate**: random self play for quick statistics

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod simulate;

pub use cli::{Cli, Command};
pub use config::{ConfigError, NtoeConfig};
pub use console::{CommandError, ConsoleCommand, run};
pub use simulate::{Tally, simulate};
