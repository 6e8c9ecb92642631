use crate::common::Pos;

/// Side length of the tournament board.
pub const STANDARD_BOARD_SIZE: i32 = 10;
/// Pieces per side in the tournament layout.
pub const PIECES_PER_PLAYER: usize = 4;

pub const STANDARD_WHITE_START: [Pos; PIECES_PER_PLAYER] = [
    Pos::new(3, 0),
    Pos::new(0, 3),
    Pos::new(0, 6),
    Pos::new(3, 9),
];

pub const STANDARD_BLACK_START: [Pos; PIECES_PER_PLAYER] = [
    Pos::new(6, 0),
    Pos::new(9, 3),
    Pos::new(9, 6),
    Pos::new(6, 9),
];
