//! Game rules for N×N tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board against a
//! set of winning lines. Rules are separated from board storage so they can
//! be run on scratch boards (hints) as well as on the live game.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::{is_draw, is_full};
pub use outcome::{Outcome, evaluate};
pub use win::check_winner;
