//! History consistency invariant: history length matches occupied squares.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: every move in history owns exactly one occupied square.
///
/// History length equals the number of occupied squares, and each recorded
/// move's square still holds that move's player.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let board = game.board();
        game.history().len() == board.occupied_count()
            && game
                .history()
                .iter()
                .all(|m| board.get(m.index) == Some(Square::Occupied(m.player)))
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}
