//! Winning-move hints for the player to move.

use super::lines::generate_lines;
use super::rules::{Outcome, evaluate};
use super::{GameState, Player, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// An empty cell that wins the game immediately for `player`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Hint {
    /// Cell index (0-based).
    index: usize,
    /// The player the hint is for.
    player: Player,
}

impl Hint {
    /// Creates a new hint.
    pub fn new(index: usize, player: Player) -> Self {
        Self { index, player }
    }
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "If you place {} at position {}, you'll win!",
            self.player,
            self.index + 1
        )
    }
}

/// Lists every empty cell that would win on the spot for the player to move.
///
/// Each candidate is tried on its own copy of the board, so `state` is
/// never touched. Finished games have no hints.
#[instrument(skip(state), fields(player = %state.current_player()))]
pub fn compute_hints(state: &GameState) -> Vec<Hint> {
    if state.is_over() {
        return Vec::new();
    }

    let player = state.current_player();
    let lines = generate_lines(state.size());

    let hints: Vec<Hint> = state
        .board()
        .empty_indices()
        .into_iter()
        .filter(|&index| {
            let mut scratch = state.board().clone();
            scratch.set(index, Square::Occupied(player)).is_ok()
                && evaluate(&scratch, &lines) == Some(Outcome::Winner(player))
        })
        .map(|index| Hint::new(index, player))
        .collect();

    debug!(count = hints.len(), "Computed hints");
    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoardSize;

    #[test]
    fn test_no_hints_on_empty_board() {
        assert!(compute_hints(&GameState::new(BoardSize::Three)).is_empty());
    }

    #[test]
    fn test_single_winning_cell() {
        // X: 0, 1  O: 3, 4  -> X to move, 2 wins.
        let game = GameState::replay(BoardSize::Three, &[0, 3, 1, 4]).unwrap();
        assert_eq!(compute_hints(&game), vec![Hint::new(2, Player::X)]);
    }

    #[test]
    fn test_hints_are_for_player_to_move_only() {
        // X: 0, 1, 8  O: 3, 4  -> O to move; O wins at 5, X's threat at 2 is ignored.
        let game = GameState::replay(BoardSize::Three, &[0, 3, 1, 4, 8]).unwrap();
        assert_eq!(compute_hints(&game), vec![Hint::new(5, Player::O)]);
    }

    #[test]
    fn test_multiple_hints_ascending() {
        // X: 0, 4, 6  O: 1, 7, 5 -> X wins at 2, 3 and 8.
        let game = GameState::replay(BoardSize::Three, &[0, 1, 4, 7, 6, 5]).unwrap();
        let cells: Vec<usize> = compute_hints(&game).iter().map(|h| *h.index()).collect();
        assert_eq!(cells, vec![2, 3, 8]);
    }

    #[test]
    fn test_last_empty_cell_wins() {
        // X: 0, 2, 4, 7  O: 1, 3, 5, 6 -> only 8 is left and it completes the diagonal.
        let game = GameState::replay(BoardSize::Three, &[0, 1, 2, 3, 4, 5, 7, 6]).unwrap();
        assert!(!game.is_over());
        assert_eq!(game.board().empty_indices(), vec![8]);
        assert_eq!(compute_hints(&game), vec![Hint::new(8, Player::X)]);
    }

    #[test]
    fn test_last_empty_cell_that_only_draws_is_no_hint() {
        // X: 0, 2, 3, 7  O: 1, 4, 5, 6 -> 8 fills the board without a line.
        let game = GameState::replay(BoardSize::Three, &[0, 1, 2, 4, 3, 5, 7, 6]).unwrap();
        assert_eq!(game.board().empty_indices(), vec![8]);
        assert!(compute_hints(&game).is_empty());
    }

    #[test]
    fn test_hints_do_not_mutate_state() {
        let game = GameState::replay(BoardSize::Four, &[0, 4, 1, 5, 2, 6]).unwrap();
        let before = game.clone();
        assert_eq!(compute_hints(&game), vec![Hint::new(3, Player::X)]);
        assert_eq!(game, before);
    }

    #[test]
    fn test_no_hints_after_game_over() {
        let game = GameState::replay(BoardSize::Three, &[0, 3, 1, 4, 2]).unwrap();
        assert!(compute_hints(&game).is_empty());
    }

    #[test]
    fn test_hint_display_is_one_based() {
        assert_eq!(
            Hint::new(2, Player::X).to_string(),
            "If you place X at position 3, you'll win!"
        );
    }
}
