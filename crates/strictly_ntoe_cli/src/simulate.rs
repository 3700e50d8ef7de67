//! Random-versus-random self play.

use serde::Serialize;
use strictly_ntoe::{BoardSize, GameState, Outcome, Player, RandomOpponent, choose_opponent_move};
use tracing::{info, instrument};

/// Results of a batch of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Games won by X.
    pub x_wins: usize,
    /// Games won by O.
    pub o_wins: usize,
    /// Drawn games.
    pub draws: usize,
}

impl Tally {
    /// Total games recorded.
    pub fn games(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Player::X) => self.x_wins += 1,
            Outcome::Winner(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

/// Plays `games` games on `size` with both sides picking at random.
#[instrument(skip(opponent))]
pub fn simulate(size: BoardSize, games: usize, opponent: &mut RandomOpponent) -> Tally {
    let mut tally = Tally::default();
    for _ in 0..games {
        let mut game = GameState::new(size);
        while let Some(index) = choose_opponent_move(&game, opponent) {
            game = game.apply_move(index);
        }
        if let Some(outcome) = game.outcome() {
            tally.record(outcome);
        }
    }
    info!(?tally, "Simulation finished");
    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_game_is_counted() {
        let tally = simulate(BoardSize::Three, 200, &mut RandomOpponent::seeded(1));
        assert_eq!(tally.games(), 200);
    }

    #[test]
    fn test_x_has_first_move_advantage_on_three() {
        let tally = simulate(BoardSize::Three, 2000, &mut RandomOpponent::seeded(8));
        assert!(tally.x_wins > tally.o_wins);
    }

    #[test]
    fn test_seeded_runs_match() {
        let a = simulate(BoardSize::Four, 100, &mut RandomOpponent::seeded(3));
        let b = simulate(BoardSize::Four, 100, &mut RandomOpponent::seeded(3));
        assert_eq!(a, b);
    }
}
