use amazons::{
    Board, BoardError, Player, Pos, SquareState, STANDARD_BLACK_START, STANDARD_WHITE_START,
};

#[test]
fn test_standard_layout() {
    let board = Board::standard();
    assert_eq!(board.width(), 10);
    assert_eq!(board.height(), 10);
    assert_eq!(board.piece_count(Player::White), 4);
    assert_eq!(board.piece_count(Player::Black), 4);
    for pos in STANDARD_WHITE_START {
        assert_eq!(board.square_state(pos), Some(SquareState::White));
    }
    for pos in STANDARD_BLACK_START {
        assert_eq!(board.square_state(pos), Some(SquareState::Black));
    }
    let pieces = board
        .positions()
        .filter(|&p| board.square_state(p) != Some(SquareState::Empty))
        .count();
    assert_eq!(pieces, 8);
}

#[test]
fn test_square_state_out_of_bounds() {
    let board = Board::standard();
    assert_eq!(board.square_state(Pos::new(-1, 0)), None);
    assert_eq!(board.square_state(Pos::new(10, 10)), None);
    assert_eq!(board.square_state(Pos::new(4, 4)), Some(SquareState::Empty));
}

#[test]
fn test_rejects_nonpositive_dimensions() {
    let err = Board::new(0, 5, &[Pos::new(0, 0)], &[Pos::new(0, 1)]).unwrap_err();
    assert_eq!(
        err,
        BoardError::InvalidDimensions {
            width: 0,
            height: 5
        }
    );
    assert!(Board::new(5, -1, &[Pos::new(0, 0)], &[Pos::new(0, 1)]).is_err());
}

#[test]
fn test_rejects_empty_piece_lists() {
    let err = Board::new(5, 5, &[], &[Pos::new(0, 0)]).unwrap_err();
    assert_eq!(
        err,
        BoardError::NoPieces {
            player: Player::White
        }
    );
    let err = Board::new(5, 5, &[Pos::new(0, 0)], &[]).unwrap_err();
    assert_eq!(
        err,
        BoardError::NoPieces {
            player: Player::Black
        }
    );
}

#[test]
fn test_rejects_out_of_bounds_start() {
    let err = Board::new(5, 5, &[Pos::new(5, 0)], &[Pos::new(0, 0)]).unwrap_err();
    assert_eq!(
        err,
        BoardError::StartOutOfBounds {
            player: Player::White,
            pos: Pos::new(5, 0)
        }
    );
}

#[test]
fn test_rejects_duplicate_and_overlapping_starts() {
    // duplicate within one side
    let err = Board::new(
        5,
        5,
        &[Pos::new(1, 1), Pos::new(1, 1)],
        &[Pos::new(3, 3)],
    )
    .unwrap_err();
    assert_eq!(
        err,
        BoardError::StartOccupied {
            player: Player::White,
            pos: Pos::new(1, 1)
        }
    );
    // overlap across sides
    let err = Board::new(5, 5, &[Pos::new(1, 1)], &[Pos::new(1, 1)]).unwrap_err();
    assert_eq!(
        err,
        BoardError::StartOccupied {
            player: Player::Black,
            pos: Pos::new(1, 1)
        }
    );
}

#[test]
fn test_from_rows_roundtrip() {
    let rows = ["W..x.", "...x.", "...x.", "...x.", "...xB"];
    let board = Board::from_rows(&rows).unwrap();
    assert_eq!(board.width(), 5);
    assert_eq!(board.height(), 5);
    assert_eq!(board.square_state(Pos::new(0, 0)), Some(SquareState::White));
    assert_eq!(board.square_state(Pos::new(4, 4)), Some(SquareState::Black));
    assert_eq!(board.square_state(Pos::new(3, 2)), Some(SquareState::Arrow));
    assert_eq!(board.piece_count(Player::White), 1);
    assert_eq!(board.piece_count(Player::Black), 1);
    assert_eq!(board.to_string(), rows.join("\n"));
}

#[test]
fn test_from_rows_rejects_ragged_and_unknown() {
    assert_eq!(
        Board::from_rows(&["W.B", "...."]).unwrap_err(),
        BoardError::RaggedRows {
            expected: 3,
            found: 4
        }
    );
    assert_eq!(
        Board::from_rows(&["W?B"]).unwrap_err(),
        BoardError::UnknownGlyph { glyph: '?' }
    );
    assert!(Board::from_rows(&[]).is_err());
}
