//! Strictly N×N tic-tac-toe: pure game logic.
//!
//! # Architecture
//!
//! - **Lines**: the 2N + 2 winning runs for a board size ([`generate_lines`])
//! - **Rules**: outcome evaluation over a board and its lines ([`evaluate`])
//! - **Game**: the owned [`GameState`] with move, undo and reset transitions
//! - **Hints**: cells that win immediately for the player to move ([`compute_hints`])
//! - **Opponent**: a seedable uniform-random computer player ([`RandomOpponent`])
//! - **Session**: toggles a front end needs around a game ([`GameSession`])
//!
//! # Example
//!
//! ```
//! use strictly_ntoe::{BoardSize, GameState, GameStatus, Player};
//!
//! let game = GameState::new(BoardSize::Three)
//!     .apply_move(0) // X
//!     .apply_move(3) // O
//!     .apply_move(1) // X
//!     .apply_move(4) // O
//!     .apply_move(2); // X completes the top row
//!
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod hints;
mod lines;
mod opponent;
mod session;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use game::{GameState, GameStatus};
pub use hints::{Hint, compute_hints};
pub use lines::{Line, LineKind, generate_lines};
pub use opponent::{Opponent, RandomOpponent, choose_opponent_move};
pub use rules::{Outcome, evaluate};
pub use session::{COMPUTER_PLAYER, GameSession, SessionSettings};
pub use types::{Board, BoardShapeError, BoardSize, BoardSizeError, Player, Square};
