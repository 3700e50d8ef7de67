//! Automated opponents.

use super::{Board, GameState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Anything that can pick a cell for the automated player.
pub trait Opponent {
    /// Picks an empty cell on `board`.
    ///
    /// Callers should only ask while the game is in progress. A full board
    /// has nothing to choose and yields `None`.
    fn choose_move(&mut self, board: &Board) -> Option<usize>;

    /// Returns the opponent's display name.
    fn name(&self) -> &str;
}

/// Picks uniformly at random among the empty cells.
///
/// No lookahead and no preference for winning or blocking. The random source
/// is injected so games can be replayed from a seed.
#[derive(Debug, Clone)]
pub struct RandomOpponent<R = StdRng> {
    rng: R,
}

impl RandomOpponent<StdRng> {
    /// Creates an opponent seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a reproducible opponent.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomOpponent<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomOpponent<R> {
    /// Creates an opponent drawing from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Opponent for RandomOpponent<R> {
    #[instrument(skip(self, board))]
    fn choose_move(&mut self, board: &Board) -> Option<usize> {
        let empty = board.empty_indices();
        if empty.is_empty() {
            return None;
        }
        let index = empty[self.rng.random_range(0..empty.len())];
        debug!(index, candidates = empty.len(), "Opponent chose cell");
        Some(index)
    }

    fn name(&self) -> &str {
        "Random"
    }
}

/// Asks `opponent` for a move in `state`, or `None` once the game is over.
#[instrument(skip(state, opponent), fields(opponent_name = opponent.name()))]
pub fn choose_opponent_move(state: &GameState, opponent: &mut impl Opponent) -> Option<usize> {
    if state.is_over() {
        return None;
    }
    opponent.choose_move(state.board())
}
