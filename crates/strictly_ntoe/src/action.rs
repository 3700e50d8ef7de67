//! First-class action types.
//!
//! Moves are domain events, not side effects. The history of a game is just
//! the ordered list of moves, which is all undo needs.

use super::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a player placing their mark at a cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Cell index (row-major, 0-based).
    pub index: usize,
    /// The player making the move.
    pub player: Player,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(index: usize, player: Player) -> Self {
        Self { index, player }
    }

    /// Returns the cell index of this move.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// History entry as `(index, ±1)`.
    pub fn encoding(&self) -> (usize, i8) {
        (self.index, self.player.encoding())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.index + 1)
    }
}

/// Why a move or undo was rejected.
///
/// The silent transitions on [`GameState`](crate::GameState) swallow these;
/// the `try_` variants hand them back.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game already has a winner or ended in a draw.
    #[display("Game is already over")]
    GameOver,

    /// The index does not name a cell on this board.
    #[display("Position {} is out of bounds (board has {} cells)", index, cells)]
    OutOfBounds {
        /// Requested index.
        index: usize,
        /// Number of cells on the board.
        cells: usize,
    },

    /// The cell is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),

    /// No move has been made yet.
    #[display("No move to undo")]
    NothingToUndo,
}

impl std::error::Error for MoveError {}
