//! Move legality and board mutation: queen-line relocation, arrow shots,
//! and mobility checks.
//!
//! A single geometric rule governs both piece moves and arrow
//! trajectories: source and destination must share a row, column, or exact
//! diagonal, and every square strictly between them plus the destination
//! itself must be empty. Mutating operations return `false` and leave the
//! board untouched when the request is illegal.

use crate::board::{Board, SquareState};
use crate::common::{Player, Pos};

/// Unit displacement from `from` toward `to` along one axis.
#[inline]
fn unit_step(from: i32, to: i32) -> i32 {
    (to - from).signum()
}

impl Board {
    /// Whether `pos` exists on the board.
    pub fn is_valid_square(&self, pos: Pos) -> bool {
        self.grid.in_bounds(pos)
    }

    /// Whether the destination and every square strictly between `src` and
    /// `dst` are empty. Callers must have established that the squares are
    /// queen-line aligned.
    fn path_unobstructed(&self, src: Pos, dst: Pos) -> bool {
        if self.grid.get(dst) != Ok(SquareState::Empty) {
            return false;
        }
        let dx = unit_step(src.x, dst.x);
        let dy = unit_step(src.y, dst.y);
        let mut x = src.x + dx;
        let mut y = src.y + dy;
        while x != dst.x || y != dst.y {
            if self.grid.get(Pos::new(x, y)) != Ok(SquareState::Empty) {
                return false;
            }
            x += dx;
            y += dy;
        }
        true
    }

    /// Whether relocating the piece at `src` to `dst` (or firing an arrow
    /// from `src` at `dst`) is legal: `src` holds a piece of either
    /// player, the squares are distinct and aligned along a row, column,
    /// or diagonal, and the path to `dst` inclusive is unobstructed.
    pub fn is_valid_move(&self, src: Pos, dst: Pos) -> bool {
        let occupant = match self.square_state(src) {
            Some(state) => state,
            None => return false,
        };
        if occupant.player().is_none() {
            return false;
        }
        if !self.is_valid_square(dst) || src == dst {
            return false;
        }
        let dx = (dst.x - src.x).abs();
        let dy = (dst.y - src.y).abs();
        if dx != 0 && dy != 0 && dx != dy {
            return false;
        }
        self.path_unobstructed(src, dst)
    }

    /// Relocate the piece at `src` to `dst`. Returns whether the move was
    /// legal and applied.
    pub fn move_piece(&mut self, src: Pos, dst: Pos) -> bool {
        if !self.is_valid_move(src, dst) {
            return false;
        }
        let occupant = match self.grid.get(src) {
            Ok(state) => state,
            Err(_) => return false,
        };
        self.grid.set(dst, occupant).is_ok() && self.grid.set(src, SquareState::Empty).is_ok()
    }

    /// Fire an arrow from the piece at `src` to `target`, leaving a
    /// permanent obstacle there. Returns whether the shot was legal and
    /// applied.
    pub fn shoot(&mut self, src: Pos, target: Pos) -> bool {
        if !self.is_valid_move(src, target) {
            return false;
        }
        self.grid.set(target, SquareState::Arrow).is_ok()
    }

    /// Whether a piece standing at `pos` could move at all, i.e. any of
    /// the 8 neighboring in-bounds squares is empty.
    pub fn has_valid_move(&self, pos: Pos) -> bool {
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let neighbor = Pos::new(pos.x + dx, pos.y + dy);
                if self.grid.get(neighbor) == Ok(SquareState::Empty) {
                    return true;
                }
            }
        }
        false
    }

    /// Whether `player` has at least one piece that can still move.
    ///
    /// Scans the board in a fixed order and stops once all of the player's
    /// known pieces have been checked; counts never change because pieces
    /// are blocked in this game, not captured.
    pub fn player_has_valid_move(&self, player: Player) -> bool {
        let piece = SquareState::piece(player);
        let total = self.piece_count(player);
        let mut checked = 0;
        for pos in self.positions() {
            if self.grid.get(pos) != Ok(piece) {
                continue;
            }
            if self.has_valid_move(pos) {
                return true;
            }
            checked += 1;
            if checked >= total {
                break;
            }
        }
        false
    }
}
