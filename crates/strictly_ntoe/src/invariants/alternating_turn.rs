//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: players alternate turns, X first.
///
/// The player to move is fixed by history parity. This holds after a
/// winning move too, since the turn flips regardless of outcome.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.player != Player::X
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };

        game.current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns starting with X"
    }
}
