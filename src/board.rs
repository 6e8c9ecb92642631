//! Game board state: square occupancy, piece counts, and the region map.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Player, Pos};
use crate::config::{
    STANDARD_BLACK_START, STANDARD_BOARD_SIZE, STANDARD_WHITE_START,
};
use crate::grid::{Grid, Positions};
use crate::region::RegionControl;

/// The state of a single board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SquareState {
    Empty,
    /// A spent arrow. Blocks movement and line of sight for the rest of
    /// the game.
    Arrow,
    White,
    Black,
}

impl SquareState {
    /// The square state representing one of `player`'s pieces.
    pub fn piece(player: Player) -> Self {
        match player {
            Player::White => SquareState::White,
            Player::Black => SquareState::Black,
        }
    }

    /// The owner of the piece on this square, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            SquareState::White => Some(Player::White),
            SquareState::Black => Some(Player::Black),
            _ => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == SquareState::Empty
    }

    fn glyph(self) -> char {
        match self {
            SquareState::Empty => '.',
            SquareState::Arrow => 'x',
            SquareState::White => 'W',
            SquareState::Black => 'B',
        }
    }

    fn from_glyph(glyph: char) -> Result<Self, BoardError> {
        match glyph {
            '.' => Ok(SquareState::Empty),
            'x' => Ok(SquareState::Arrow),
            'W' => Ok(SquareState::White),
            'B' => Ok(SquareState::Black),
            _ => Err(BoardError::UnknownGlyph { glyph }),
        }
    }
}

/// Board state for an ongoing game: occupancy grid, per-player piece
/// counts, and the region map written by the last resolver pass.
///
/// Pieces are never captured in Amazons, so the piece counts are fixed at
/// construction and stay accurate for the lifetime of the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) grid: Grid<SquareState>,
    pub(crate) map: Grid<RegionControl>,
    white_pieces: usize,
    black_pieces: usize,
}

impl Board {
    /// Create a board with the given dimensions and starting pieces.
    ///
    /// Fails if either dimension is not positive, either side has no
    /// pieces, or any starting position is out of bounds or overlaps a
    /// previously placed piece.
    pub fn new(
        width: i32,
        height: i32,
        white_start: &[Pos],
        black_start: &[Pos],
    ) -> Result<Self, BoardError> {
        if width <= 0 || height <= 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        let mut grid = Grid::new(width as usize, height as usize, SquareState::Empty);
        let map = Grid::new(width as usize, height as usize, RegionControl::Unclaimed);
        for (player, starts) in [
            (Player::White, white_start),
            (Player::Black, black_start),
        ] {
            if starts.is_empty() {
                return Err(BoardError::NoPieces { player });
            }
            for &pos in starts {
                match grid.get(pos) {
                    Err(_) => return Err(BoardError::StartOutOfBounds { player, pos }),
                    Ok(SquareState::Empty) => grid.set(pos, SquareState::piece(player))?,
                    Ok(_) => return Err(BoardError::StartOccupied { player, pos }),
                }
            }
        }
        Ok(Board {
            grid,
            map,
            white_pieces: white_start.len(),
            black_pieces: black_start.len(),
        })
    }

    /// The tournament-standard 10×10 board with four pieces per side.
    pub fn standard() -> Self {
        Self::new(
            STANDARD_BOARD_SIZE,
            STANDARD_BOARD_SIZE,
            &STANDARD_WHITE_START,
            &STANDARD_BLACK_START,
        )
        .expect("standard layout is valid")
    }

    /// Build a board from an ASCII sketch, one string per row: `.` empty,
    /// `x` arrow, `W` white piece, `B` black piece. Row `y` of the board is
    /// `rows[y]`, column `x` is the `x`-th character.
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |r| r.chars().count()) as i32;
        if width <= 0 || height <= 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        let mut grid = Grid::new(width as usize, height as usize, SquareState::Empty);
        let map = Grid::new(width as usize, height as usize, RegionControl::Unclaimed);
        let mut white_pieces = 0;
        let mut black_pieces = 0;
        for (y, row) in rows.iter().enumerate() {
            let cells: Vec<char> = row.chars().collect();
            if cells.len() != width as usize {
                return Err(BoardError::RaggedRows {
                    expected: width as usize,
                    found: cells.len(),
                });
            }
            for (x, &glyph) in cells.iter().enumerate() {
                let state = SquareState::from_glyph(glyph)?;
                match state.player() {
                    Some(Player::White) => white_pieces += 1,
                    Some(Player::Black) => black_pieces += 1,
                    None => {}
                }
                grid.set(Pos::new(x as i32, y as i32), state)?;
            }
        }
        for (player, count) in [
            (Player::White, white_pieces),
            (Player::Black, black_pieces),
        ] {
            if count == 0 {
                return Err(BoardError::NoPieces { player });
            }
        }
        Ok(Board {
            grid,
            map,
            white_pieces,
            black_pieces,
        })
    }

    /// Board width in squares.
    pub fn width(&self) -> i32 {
        self.grid.width() as i32
    }

    /// Board height in squares.
    pub fn height(&self) -> i32 {
        self.grid.height() as i32
    }

    /// The state of the square at `pos`, or `None` out of bounds. O(1).
    pub fn square_state(&self, pos: Pos) -> Option<SquareState> {
        self.grid.get(pos).ok()
    }

    /// Number of pieces `player` started the game with.
    pub fn piece_count(&self, player: Player) -> usize {
        match player {
            Player::White => self.white_pieces,
            Player::Black => self.black_pieces,
        }
    }

    /// Iterator over all board positions in scan order.
    pub fn positions(&self) -> Positions {
        self.grid.positions()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let glyph = self
                    .square_state(Pos::new(x, y))
                    .map_or('?', SquareState::glyph);
                write!(f, "{}", glyph)?;
            }
            if y + 1 < self.height() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
