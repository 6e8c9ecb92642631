//! Turn orchestration: full move-and-shoot turns, end-of-game detection,
//! and winner determination.

use core::cmp::Ordering;

use crate::board::{Board, SquareState};
use crate::common::{BoardError, Player, Pos, TurnError};

/// Whether the game is still being played and, once it is not, who won
/// with how much territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Finished {
        winner: Player,
        white_territory: usize,
        black_territory: usize,
    },
}

/// Result of a scoring query. `winner` is `None` while disputed regions
/// remain on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    pub winner: Option<Player>,
    pub white_territory: usize,
    pub black_territory: usize,
}

/// Core game logic holding the board and the side to move.
///
/// The engine enforces turn ownership and the move-then-shoot turn shape;
/// the underlying [`Board`] operations stay agnostic of whose turn it is.
pub struct GameEngine {
    board: Board,
    to_move: Player,
    last_mover: Option<Player>,
    status: GameStatus,
}

impl GameEngine {
    /// Start a game on a custom board. White moves first.
    pub fn new(
        width: i32,
        height: i32,
        white_start: &[Pos],
        black_start: &[Pos],
    ) -> Result<Self, BoardError> {
        Ok(Self::with_board(Board::new(
            width,
            height,
            white_start,
            black_start,
        )?))
    }

    /// Start a game on the tournament-standard board.
    pub fn standard() -> Self {
        Self::with_board(Board::standard())
    }

    /// Start a game from an existing board position. White moves first.
    pub fn with_board(board: Board) -> Self {
        let mut engine = GameEngine {
            board,
            to_move: Player::White,
            last_mover: None,
            status: GameStatus::InProgress,
        };
        // A degenerate layout can leave the opening player already stuck.
        if !engine.board.player_has_valid_move(engine.to_move) {
            engine.finish(engine.to_move.opponent());
        }
        engine
    }

    /// The board being played on.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose turn it is.
    pub fn current_player(&self) -> Player {
        self.to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Play one full turn for the current player: relocate the piece at
    /// `src` to `dst`, then fire an arrow from `dst` at `shot`.
    ///
    /// On any rejection the board is left exactly as it was; in
    /// particular, an invalid shot undoes the move that preceded it. On
    /// success the region map is recomputed and the returned status
    /// reflects whether the game has concluded.
    pub fn take_turn(&mut self, src: Pos, dst: Pos, shot: Pos) -> Result<GameStatus, TurnError> {
        if self.status != GameStatus::InProgress {
            return Err(TurnError::GameOver);
        }
        if self.board.square_state(src) != Some(SquareState::piece(self.to_move)) {
            return Err(TurnError::NotYourPiece);
        }
        if !self.board.move_piece(src, dst) {
            return Err(TurnError::InvalidMove);
        }
        if !self.board.shoot(dst, shot) {
            // Walk the amazon back along the path it just cleared.
            let _ = self.board.move_piece(dst, src);
            return Err(TurnError::InvalidShot);
        }
        log::debug!(
            "{} moved {} -> {}, arrow at {}",
            self.to_move,
            src,
            dst,
            shot
        );
        self.last_mover = Some(self.to_move);

        let disputed = self.board.update_region_map();
        let (white, black) = self.board.territory();
        if !disputed {
            // The board has been fully divided.
            let winner = Self::decide_winner(white, black, self.to_move);
            self.status = GameStatus::Finished {
                winner,
                white_territory: white,
                black_territory: black,
            };
        } else {
            let next = self.to_move.opponent();
            if self.board.player_has_valid_move(next) {
                self.to_move = next;
            } else {
                // The opponent is immobilized; the mover claims the game.
                self.status = GameStatus::Finished {
                    winner: self.to_move,
                    white_territory: white,
                    black_territory: black,
                };
            }
        }
        Ok(self.status)
    }

    /// Recompute the region map and report the current score. The winner
    /// is `None` while disputed regions remain; territory ties go to the
    /// player who moved last.
    pub fn score(&mut self) -> Score {
        let disputed = self.board.update_region_map();
        let (white, black) = self.board.territory();
        let winner = if disputed {
            None
        } else {
            // Before anyone has moved, the notional previous mover is the
            // side that is not on turn.
            let last = self.last_mover.unwrap_or_else(|| self.to_move.opponent());
            Some(Self::decide_winner(white, black, last))
        };
        Score {
            winner,
            white_territory: white,
            black_territory: black,
        }
    }

    /// Territory decides the game; on a tie the player who just moved wins,
    /// because the opponent runs out of mobility first.
    fn decide_winner(white: usize, black: usize, last_mover: Player) -> Player {
        match white.cmp(&black) {
            Ordering::Greater => Player::White,
            Ordering::Less => Player::Black,
            Ordering::Equal => last_mover,
        }
    }

    fn finish(&mut self, winner: Player) {
        self.board.update_region_map();
        let (white, black) = self.board.territory();
        self.status = GameStatus::Finished {
            winner,
            white_territory: white,
            black_territory: black,
        };
    }
}
