//! Region control resolution.
//!
//! The board decomposes into maximal 8-connected components of non-arrow
//! squares. Each region is classified by which colors' pieces it contains
//! and whether any of those pieces can still move. Once no region is
//! contested-and-playable, the game is over and territory can be counted.

use alloc::vec::Vec;

use crate::board::{Board, SquareState};
use crate::common::{Player, Pos};
use crate::grid::Grid;

/// Who controls a region of the board, as recorded in the region map by
/// [`Board::update_region_map`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegionControl {
    /// A walled-off region no piece can reach.
    Unclaimed,
    /// Only white pieces can reach the region.
    White,
    /// Only black pieces can reach the region.
    Black,
    /// Both colors present but no piece in the region can move; neither
    /// player will ever claim it.
    Shared,
    /// Both colors present and at least one piece can still move; the
    /// region's fate is not settled.
    Undecided,
    /// An arrow square. Arrows bound regions and belong to none.
    Arrow,
}

/// Which colors' pieces were found inside a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Claim {
    None,
    White,
    Black,
    Both,
}

impl Claim {
    fn add(self, player: Player) -> Claim {
        match (self, player) {
            (Claim::None, Player::White) | (Claim::White, Player::White) => Claim::White,
            (Claim::None, Player::Black) | (Claim::Black, Player::Black) => Claim::Black,
            _ => Claim::Both,
        }
    }
}

/// Aggregate state of one region during a resolver pass.
#[derive(Debug, Clone, Copy)]
struct RegionSummary {
    claim: Claim,
    has_mobile_piece: bool,
}

impl RegionSummary {
    fn new() -> Self {
        RegionSummary {
            claim: Claim::None,
            has_mobile_piece: false,
        }
    }

    fn control(self) -> RegionControl {
        match self.claim {
            Claim::None => RegionControl::Unclaimed,
            Claim::White => RegionControl::White,
            Claim::Black => RegionControl::Black,
            Claim::Both if self.has_mobile_piece => RegionControl::Undecided,
            Claim::Both => RegionControl::Shared,
        }
    }
}

/// King-move adjacency.
const NEIGHBOR_STEPS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

impl Board {
    /// Recompute the region map from scratch and report whether any
    /// disputed (contested and still playable) regions remain.
    ///
    /// The traversal is an explicit-worklist flood fill, so the board size
    /// bounds memory rather than stack depth. Running the pass twice
    /// without an intervening board mutation yields the same map and the
    /// same answer.
    pub fn update_region_map(&mut self) -> bool {
        let mut visited = Grid::new(self.grid.width(), self.grid.height(), false);
        let mut stack: Vec<Pos> = Vec::new();
        let mut members: Vec<Pos> = Vec::new();
        let mut disputed = false;
        for start in self.positions() {
            if visited.get(start) != Ok(false) {
                continue;
            }
            if self.grid.get(start) == Ok(SquareState::Arrow) {
                let _ = visited.set(start, true);
                let _ = self.map.set(start, RegionControl::Arrow);
                continue;
            }
            let mut summary = RegionSummary::new();
            members.clear();
            let _ = visited.set(start, true);
            stack.push(start);
            while let Some(pos) = stack.pop() {
                members.push(pos);
                if let Some(player) = self.grid.get(pos).ok().and_then(SquareState::player) {
                    summary.claim = summary.claim.add(player);
                    if !summary.has_mobile_piece && self.has_valid_move(pos) {
                        summary.has_mobile_piece = true;
                    }
                }
                for (dx, dy) in NEIGHBOR_STEPS {
                    let next = Pos::new(pos.x + dx, pos.y + dy);
                    match self.grid.get(next) {
                        // Arrows bound the region; the outer scan labels them.
                        Ok(SquareState::Arrow) | Err(_) => {}
                        Ok(_) => {
                            if visited.get(next) == Ok(false) {
                                let _ = visited.set(next, true);
                                stack.push(next);
                            }
                        }
                    }
                }
            }
            let control = summary.control();
            if control == RegionControl::Undecided {
                disputed = true;
            }
            log::trace!(
                "region of {} squares starting at {} resolved to {:?}",
                members.len(),
                start,
                control
            );
            for &pos in &members {
                let _ = self.map.set(pos, control);
            }
        }
        log::debug!("region map updated, disputed regions remain: {}", disputed);
        disputed
    }

    /// The controller of the region containing `pos`, or `None` out of
    /// bounds. Only meaningful after [`Board::update_region_map`]; the map
    /// goes stale on any move or shot.
    pub fn square_controller(&self, pos: Pos) -> Option<RegionControl> {
        self.map.get(pos).ok()
    }

    /// Raw counts of region-map cells controlled by white and black,
    /// including the squares the pieces themselves stand on. Only
    /// meaningful after [`Board::update_region_map`].
    pub fn controlled_squares(&self) -> (usize, usize) {
        (
            self.map.count(RegionControl::White),
            self.map.count(RegionControl::Black),
        )
    }

    /// Conquered territory for white and black: empty squares inside each
    /// player's controlled regions. Squares occupied by the pieces
    /// themselves do not count. Only meaningful after
    /// [`Board::update_region_map`].
    pub fn territory(&self) -> (usize, usize) {
        let mut white = 0;
        let mut black = 0;
        for pos in self.positions() {
            if self.grid.get(pos) != Ok(SquareState::Empty) {
                continue;
            }
            match self.map.get(pos) {
                Ok(RegionControl::White) => white += 1,
                Ok(RegionControl::Black) => black += 1,
                _ => {}
            }
        }
        (white, black)
    }
}
