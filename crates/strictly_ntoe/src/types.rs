//! Core domain types for N×N tic-tac-toe.

use super::action::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second, and is the computer when the opponent is enabled).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Signed encoding stored alongside each history entry (X = 1, O = -1).
    pub fn encoding(self) -> i8 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// The supported board dimensions.
///
/// A win always needs a full side-length run, so the size doubles as the
/// winning run length.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(try_from = "usize", into = "usize")]
pub enum BoardSize {
    /// Classic 3×3 board.
    #[default]
    Three,
    /// 4×4 board.
    Four,
    /// 5×5 board.
    Five,
}

impl BoardSize {
    /// Side length of the board.
    pub fn side(self) -> usize {
        match self {
            BoardSize::Three => 3,
            BoardSize::Four => 4,
            BoardSize::Five => 5,
        }
    }

    /// Total number of cells (side²).
    pub fn cells(self) -> usize {
        self.side() * self.side()
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = BoardSizeError;

    fn try_from(side: usize) -> Result<Self, Self::Error> {
        match side {
            3 => Ok(BoardSize::Three),
            4 => Ok(BoardSize::Four),
            5 => Ok(BoardSize::Five),
            _ => Err(BoardSizeError { side }),
        }
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.side()
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.side();
        write!(f, "{n}x{n}")
    }
}

/// Requested board side is not one of the supported sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Unsupported board size {} (expected 3, 4 or 5)", side)]
pub struct BoardSizeError {
    /// The rejected side length.
    pub side: usize,
}

impl std::error::Error for BoardSizeError {}

/// Square count does not match the board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("A {} board has {} squares, got {}", size, size.cells(), squares)]
pub struct BoardShapeError {
    /// Declared board size.
    pub size: BoardSize,
    /// Number of squares supplied.
    pub squares: usize,
}

impl std::error::Error for BoardShapeError {}

/// N×N tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    /// Board dimensions.
    size: BoardSize,
    /// Squares in row-major order (0..side²).
    squares: Vec<Square>,
}

impl Board {
    /// Creates a new empty board of the given size.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size.cells()],
        }
    }

    /// Builds a board from row-major squares.
    ///
    /// # Errors
    ///
    /// [`BoardShapeError`] unless there are exactly side² squares.
    pub fn from_squares(size: BoardSize, squares: Vec<Square>) -> Result<Self, BoardShapeError> {
        if squares.len() != size.cells() {
            return Err(BoardShapeError {
                size,
                squares: squares.len(),
            });
        }
        Ok(Self { size, squares })
    }

    /// Returns the board dimensions.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Gets the square at the given index, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Sets the square at the given index.
    pub fn set(&mut self, index: usize, square: Square) -> Result<(), MoveError> {
        let cells = self.squares.len();
        let slot = self
            .squares
            .get_mut(index)
            .ok_or(MoveError::OutOfBounds { index, cells })?;
        *slot = square;
        Ok(())
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Indices of all empty squares, ascending.
    pub fn empty_indices(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Square::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based position so a player can type it.
    pub fn display(&self) -> String {
        let side = self.size.side();
        let width = self.squares.len().to_string().len();
        let rows: Vec<String> = self
            .squares
            .chunks(side)
            .enumerate()
            .map(|(row, squares)| {
                squares
                    .iter()
                    .enumerate()
                    .map(|(col, square)| {
                        let label = match square {
                            Square::Empty => (row * side + col + 1).to_string(),
                            Square::Occupied(player) => player.to_string(),
                        };
                        format!("{label:>width$}")
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();
        let separator = vec!["-".repeat(width); side].join("+");
        rows.join(&format!("\n{separator}\n"))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

#[derive(Deserialize)]
struct BoardRepr {
    size: BoardSize,
    squares: Vec<Square>,
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let BoardRepr { size, squares } = BoardRepr::deserialize(deserializer)?;
        Board::from_squares(size, squares).map_err(serde::de::Error::custom)
    }
}
