//! A single player's game session with its toggles.
//!
//! The session is what a front end talks to. It owns the current
//! [`GameState`], the board size, whether hints are shown, and whether O is
//! played by the computer. Changing the size or the computer toggle starts a
//! new game; toggling hints does not.

use super::hints::{Hint, compute_hints};
use super::opponent::{Opponent, RandomOpponent, choose_opponent_move};
use super::{BoardSize, GameState, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// The computer always plays O.
pub const COMPUTER_PLAYER: Player = Player::O;

/// User-configurable settings for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct SessionSettings {
    /// Board dimensions for new games.
    board_size: BoardSize,
    /// Whether O is played by the computer.
    opponent_enabled: bool,
    /// Whether winning-move hints are offered.
    hints_enabled: bool,
}

impl SessionSettings {
    /// Creates settings from explicit values.
    pub fn new(board_size: BoardSize, opponent_enabled: bool, hints_enabled: bool) -> Self {
        Self {
            board_size,
            opponent_enabled,
            hints_enabled,
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::new(BoardSize::Three, false, true)
    }
}

/// A game session: current game plus toggles and the computer player.
#[derive(Debug)]
pub struct GameSession<O = RandomOpponent> {
    settings: SessionSettings,
    state: GameState,
    opponent: O,
}

impl<O: Opponent> GameSession<O> {
    /// Starts a session with a fresh game.
    #[instrument(skip(opponent))]
    pub fn new(settings: SessionSettings, opponent: O) -> Self {
        Self {
            state: GameState::new(settings.board_size),
            settings,
            opponent,
        }
    }

    /// Returns the current game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the current settings.
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// True when the computer is due to move.
    pub fn is_computer_turn(&self) -> bool {
        self.settings.opponent_enabled
            && !self.state.is_over()
            && self.state.current_player() == COMPUTER_PLAYER
    }

    /// Plays `index` for the player to move, then lets the computer reply.
    ///
    /// The computer's reply is a separate step issued only after the human
    /// move has been applied and evaluated. Rejected moves change nothing
    /// and get no reply.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> &GameState {
        if self.is_computer_turn() {
            debug!(index, "Ignoring move made on the computer's turn");
            return &self.state;
        }
        match self.state.try_apply_move(index) {
            Ok(next) => {
                self.state = next;
                self.play_computer_turn();
            }
            Err(error) => debug!(%error, index, "Move ignored"),
        }
        &self.state
    }

    /// Lets the computer move if it is its turn. Returns the cell it took.
    #[instrument(skip(self))]
    pub fn play_computer_turn(&mut self) -> Option<usize> {
        if !self.is_computer_turn() {
            return None;
        }
        let index = choose_opponent_move(&self.state, &mut self.opponent)?;
        match self.state.try_apply_move(index) {
            Ok(next) => {
                info!(index, opponent = self.opponent.name(), "Computer moves");
                self.state = next;
                Some(index)
            }
            Err(error) => {
                warn!(%error, index, opponent = self.opponent.name(), "Computer move rejected");
                None
            }
        }
    }

    /// Takes back the last move.
    ///
    /// Against the computer this rewinds to the human's previous turn, so
    /// the computer's reply and the human move are both taken back.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> &GameState {
        match self.state.try_undo_move() {
            Ok(previous) => self.state = previous,
            Err(error) => {
                debug!(%error, "Undo ignored");
                return &self.state;
            }
        }
        if self.is_computer_turn()
            && let Ok(previous) = self.state.try_undo_move()
        {
            self.state = previous;
        }
        &self.state
    }

    /// Starts over with the current settings.
    #[instrument(skip(self))]
    pub fn play_again(&mut self) -> &GameState {
        self.state = GameState::new(self.settings.board_size);
        self.play_computer_turn();
        &self.state
    }

    /// Switches board size and starts a new game.
    #[instrument(skip(self))]
    pub fn set_board_size(&mut self, size: BoardSize) -> &GameState {
        self.settings.board_size = size;
        self.play_again()
    }

    /// Turns the computer opponent on or off and starts a new game.
    #[instrument(skip(self))]
    pub fn set_opponent_enabled(&mut self, enabled: bool) -> &GameState {
        self.settings.opponent_enabled = enabled;
        self.play_again()
    }

    /// Shows or hides hints. The game carries on.
    #[instrument(skip(self))]
    pub fn set_hints_enabled(&mut self, enabled: bool) {
        self.settings.hints_enabled = enabled;
    }

    /// Hints for the player to move.
    ///
    /// Hints are a human aid, so there are none while the computer plays.
    pub fn hints(&self) -> Vec<Hint> {
        if !self.settings.hints_enabled || self.settings.opponent_enabled {
            return Vec::new();
        }
        compute_hints(&self.state)
    }
}
