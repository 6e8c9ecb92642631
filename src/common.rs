//! Common types for the Amazons engine: players, positions, and errors.

use core::fmt;

use crate::grid::GridError;

/// One of the two sides in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// The other side.
    pub fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

/// A square on the board. Valid iff `0 <= x < width` and `0 <= y < height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Pos { x, y }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Errors returned when constructing a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying grid error.
    Grid(GridError),
    /// Width or height is not a positive integer.
    InvalidDimensions { width: i32, height: i32 },
    /// A player was given no starting pieces.
    NoPieces { player: Player },
    /// A starting position lies outside the board.
    StartOutOfBounds { player: Player, pos: Pos },
    /// Two starting pieces were placed on the same square.
    StartOccupied { player: Player, pos: Pos },
    /// Rows of an ASCII board sketch have differing lengths.
    RaggedRows { expected: usize, found: usize },
    /// An ASCII board sketch contains an unrecognized character.
    UnknownGlyph { glyph: char },
}

impl From<GridError> for BoardError {
    fn from(err: GridError) -> Self {
        BoardError::Grid(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Grid(e) => write!(f, "Grid error: {}", e),
            BoardError::InvalidDimensions { width, height } => {
                write!(f, "Board dimensions {}x{} are not positive", width, height)
            }
            BoardError::NoPieces { player } => {
                write!(f, "{} has no starting pieces", player)
            }
            BoardError::StartOutOfBounds { player, pos } => {
                write!(f, "{} starting piece at {} is out of bounds", player, pos)
            }
            BoardError::StartOccupied { player, pos } => {
                write!(f, "{} starting piece at {} overlaps another piece", player, pos)
            }
            BoardError::RaggedRows { expected, found } => {
                write!(
                    f,
                    "Sketch rows differ in length: expected {}, found {}",
                    expected, found
                )
            }
            BoardError::UnknownGlyph { glyph } => {
                write!(f, "Unrecognized square character '{}'", glyph)
            }
        }
    }
}

/// Errors returned when a full move-and-shoot turn is rejected.
///
/// A rejected turn leaves the board exactly as it was: an invalid shot
/// undoes the move that preceded it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnError {
    /// The game has already finished.
    GameOver,
    /// The source square does not hold the current player's piece.
    NotYourPiece,
    /// The requested relocation is not a legal queen move.
    InvalidMove,
    /// The requested arrow shot is not a legal queen move from the
    /// piece's new position.
    InvalidShot,
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnError::GameOver => write!(f, "The game is already over"),
            TurnError::NotYourPiece => {
                write!(f, "Source square does not hold one of your pieces")
            }
            TurnError::InvalidMove => write!(f, "Invalid move"),
            TurnError::InvalidShot => write!(f, "Invalid shot"),
        }
    }
}
