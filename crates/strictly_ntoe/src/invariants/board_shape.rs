//! Board shape invariant: the board has side² cells.

use super::super::GameState;
use super::Invariant;

/// Invariant: board length equals the square of its side.
pub struct BoardShapeInvariant;

impl Invariant<GameState> for BoardShapeInvariant {
    fn holds(game: &GameState) -> bool {
        game.board().squares().len() == game.size().cells()
    }

    fn description() -> &'static str {
        "Board holds exactly side x side squares"
    }
}
