//! Terminal outcome of a board.

use super::super::{Board, Line, Player};
use super::{draw::is_full, win::check_winner};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line.
    Winner(Player),
    /// Board filled with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{player} wins!"),
            Outcome::Draw => write!(f, "It's a draw!"),
        }
    }
}

/// Evaluates a board against the given lines.
///
/// Returns `None` while the game can continue. A completed line takes
/// precedence over a full board. Never touches game state, so it is safe to
/// call on hypothetical boards.
#[instrument(skip(board, lines))]
pub fn evaluate(board: &Board, lines: &[Line]) -> Option<Outcome> {
    if let Some(winner) = check_winner(board, lines) {
        return Some(Outcome::Winner(winner));
    }
    if is_full(board) {
        return Some(Outcome::Draw);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardSize, Square, generate_lines};

    #[test]
    fn test_open_board_has_no_outcome() {
        let mut board = Board::new(BoardSize::Four);
        board.set(5, Square::Occupied(Player::X)).unwrap();
        assert_eq!(evaluate(&board, &generate_lines(BoardSize::Four)), None);
    }

    #[test]
    fn test_full_winning_board_is_a_win() {
        let mut board = Board::new(BoardSize::Three);
        for i in 0..9 {
            board.set(i, Square::Occupied(Player::O)).unwrap();
        }
        assert_eq!(
            evaluate(&board, &generate_lines(BoardSize::Three)),
            Some(Outcome::Winner(Player::O))
        );
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Winner(Player::X).to_string(), "X wins!");
        assert_eq!(Outcome::Draw.to_string(), "It's a draw!");
        assert!(Outcome::Draw.is_draw());
        assert_eq!(Outcome::Winner(Player::O).winner(), Some(Player::O));
    }
}
