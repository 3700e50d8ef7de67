//! Draw detection logic.

use super::super::{Board, Line, Square};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks for a full board with no completed line.
#[instrument(skip(board, lines))]
pub fn is_draw(board: &Board, lines: &[Line]) -> bool {
    is_full(board) && check_winner(board, lines).is_none()
}
