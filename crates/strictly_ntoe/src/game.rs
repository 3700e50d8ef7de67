//! Game state and its transitions.
//!
//! [`GameState`] is an owned value. Every transition takes the current state
//! and hands back the next one, so a session owns exactly one game and there
//! is no shared instance to coordinate.
//!
//! Invalid operations are no-ops: [`GameState::apply_move`] and
//! [`GameState::undo_move`] return the state unchanged when rejected. The
//! `try_` variants report the reason instead.

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, NtoeInvariants};
use super::lines::generate_lines;
use super::rules::{Outcome, evaluate};
use super::types::{Board, BoardSize, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl From<Outcome> for GameStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Winner(player) => GameStatus::Won(player),
            Outcome::Draw => GameStatus::Draw,
        }
    }
}

/// Complete game state.
///
/// Deserializing checks the same invariants the transitions maintain, so a
/// loaded state is one the transitions could have produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current player to move.
    current_player: Player,
    /// Game status.
    status: GameStatus,
    /// Moves in the order they were played.
    history: Vec<Move>,
}

impl GameState {
    /// Starts a new game: empty board, X to move, no history.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        info!(%size, "New game");
        Self {
            board: Board::new(size),
            current_player: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Discards this game and starts a fresh one at `size`.
    #[instrument(skip(self))]
    pub fn reset(self, size: BoardSize) -> Self {
        Self::new(size)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board dimensions.
    pub fn size(&self) -> BoardSize {
        self.board.size()
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Winner-or-draw value, `None` while in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(Outcome::Winner(player)),
            GameStatus::Draw => Some(Outcome::Draw),
        }
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of moves played.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Empty cells, or nothing once the game is over.
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.empty_indices()
    }

    /// Places the current player's mark at `index`, returning the next state.
    ///
    /// The mark is written and recorded before the board is evaluated, and
    /// the turn passes to the opponent whatever the outcome.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] after a win or draw,
    /// [`MoveError::OutOfBounds`] for an index off the board and
    /// [`MoveError::SquareOccupied`] for a taken cell.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn try_apply_move(&self, index: usize) -> Result<Self, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let square = self.board.get(index).ok_or(MoveError::OutOfBounds {
            index,
            cells: self.board.size().cells(),
        })?;
        if square != Square::Empty {
            return Err(MoveError::SquareOccupied(index));
        }

        let mut next = self.clone();
        let player = next.current_player;
        next.board.set(index, Square::Occupied(player))?;
        next.history.push(Move::new(index, player));
        next.current_player = player.opponent();

        if let Some(outcome) = evaluate(&next.board, &generate_lines(next.size())) {
            info!(%outcome, moves = next.history.len(), "Game over");
            next.status = outcome.into();
        }

        next.debug_check_invariants();
        Ok(next)
    }

    /// Places the current player's mark at `index`.
    ///
    /// A rejected move leaves the state untouched.
    #[instrument(skip(self))]
    pub fn apply_move(self, index: usize) -> Self {
        match self.try_apply_move(index) {
            Ok(next) => next,
            Err(error) => {
                debug!(%error, index, "Move ignored");
                self
            }
        }
    }

    /// Takes back the most recent move.
    ///
    /// Undo never re-evaluates the board: the position before any move of
    /// an unfinished game was itself unfinished.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once the game is decided and
    /// [`MoveError::NothingToUndo`] on an empty history.
    #[instrument(skip(self))]
    pub fn try_undo_move(&self) -> Result<Self, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let mut next = self.clone();
        let last = next.history.pop().ok_or(MoveError::NothingToUndo)?;
        next.board.set(last.index, Square::Empty)?;
        next.current_player = next.current_player.opponent();

        next.debug_check_invariants();
        Ok(next)
    }

    /// Takes back the most recent move, or does nothing if that is not
    /// allowed.
    #[instrument(skip(self))]
    pub fn undo_move(self) -> Self {
        match self.try_undo_move() {
            Ok(next) => next,
            Err(error) => {
                debug!(%error, "Undo ignored");
                self
            }
        }
    }

    /// Replays 0-based cell indices from an empty board of `size`.
    ///
    /// # Errors
    ///
    /// Stops at the first rejected move.
    #[instrument]
    pub fn replay(size: BoardSize, indices: &[usize]) -> Result<Self, MoveError> {
        indices
            .iter()
            .try_fold(Self::new(size), |game, &index| game.try_apply_move(index))
    }

    fn debug_check_invariants(&self) {
        if let Err(violations) = NtoeInvariants::check_all(self) {
            for violation in &violations {
                warn!(description = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "game invariants violated");
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

#[derive(Deserialize)]
struct GameStateRepr {
    board: Board,
    current_player: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl GameStateRepr {
    fn validate(self) -> Result<GameState, String> {
        let state = GameState {
            board: self.board,
            current_player: self.current_player,
            status: self.status,
            history: self.history,
        };
        if let Err(violations) = NtoeInvariants::check_all(&state) {
            let descriptions: Vec<&str> =
                violations.iter().map(|v| v.description.as_str()).collect();
            return Err(descriptions.join("; "));
        }
        let evaluated = evaluate(&state.board, &generate_lines(state.size()))
            .map_or(GameStatus::InProgress, GameStatus::from);
        if evaluated != state.status {
            return Err(format!(
                "Recorded status {:?} does not match the board ({:?})",
                state.status, evaluated
            ));
        }
        Ok(state)
    }
}

impl<'de> Deserialize<'de> for GameState {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        GameStateRepr::deserialize(deserializer)
            .and_then(|repr| repr.validate().map_err(serde::de::Error::custom))
    }
}
