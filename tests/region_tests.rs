use amazons::{Board, Pos, RegionControl};

fn region_snapshot(board: &Board) -> Vec<Option<RegionControl>> {
    board
        .positions()
        .map(|pos| board.square_controller(pos))
        .collect()
}

#[test]
fn test_arrow_wall_divides_the_board() {
    let mut board = Board::from_rows(&[
        "W..x.",
        "...x.",
        "...x.",
        "...x.",
        "...xB",
    ])
    .unwrap();
    let disputed = board.update_region_map();
    assert!(!disputed);

    assert_eq!(
        board.square_controller(Pos::new(0, 0)),
        Some(RegionControl::White)
    );
    assert_eq!(
        board.square_controller(Pos::new(2, 4)),
        Some(RegionControl::White)
    );
    assert_eq!(
        board.square_controller(Pos::new(4, 0)),
        Some(RegionControl::Black)
    );
    assert_eq!(
        board.square_controller(Pos::new(3, 2)),
        Some(RegionControl::Arrow)
    );

    // raw counts include the pieces' own squares, territory does not
    assert_eq!(board.controlled_squares(), (15, 5));
    assert_eq!(board.territory(), (14, 4));
}

#[test]
fn test_contested_region_without_mobility_is_shared() {
    let mut board = Board::from_rows(&["xWBx"]).unwrap();
    let disputed = board.update_region_map();
    assert!(!disputed);
    assert_eq!(
        board.square_controller(Pos::new(1, 0)),
        Some(RegionControl::Shared)
    );
    assert_eq!(
        board.square_controller(Pos::new(2, 0)),
        Some(RegionControl::Shared)
    );
    assert_eq!(
        board.square_controller(Pos::new(0, 0)),
        Some(RegionControl::Arrow)
    );
    assert_eq!(board.territory(), (0, 0));
    assert_eq!(board.controlled_squares(), (0, 0));
}

#[test]
fn test_contested_region_with_mobility_is_undecided() {
    let mut board = Board::standard();
    let disputed = board.update_region_map();
    assert!(disputed);
    assert_eq!(
        board.square_controller(Pos::new(4, 4)),
        Some(RegionControl::Undecided)
    );
    assert_eq!(
        board.square_controller(Pos::new(3, 0)),
        Some(RegionControl::Undecided)
    );
    assert_eq!(board.territory(), (0, 0));
}

#[test]
fn test_walled_off_empty_region_is_unclaimed() {
    let mut board = Board::from_rows(&["W.x..x.B"]).unwrap();
    let disputed = board.update_region_map();
    assert!(!disputed);
    assert_eq!(
        board.square_controller(Pos::new(3, 0)),
        Some(RegionControl::Unclaimed)
    );
    assert_eq!(
        board.square_controller(Pos::new(4, 0)),
        Some(RegionControl::Unclaimed)
    );
    assert_eq!(board.territory(), (1, 1));
}

#[test]
fn test_regions_connect_diagonally() {
    // the arrows leave a diagonal gap, so the two sides are one region
    let mut board = Board::from_rows(&["Wx.", "x.B"]).unwrap();
    let disputed = board.update_region_map();
    assert!(disputed);
    assert_eq!(
        board.square_controller(Pos::new(0, 0)),
        Some(RegionControl::Undecided)
    );
    assert_eq!(
        board.square_controller(Pos::new(2, 1)),
        Some(RegionControl::Undecided)
    );
}

#[test]
fn test_single_color_region_with_mobility_is_controlled() {
    let mut board = Board::from_rows(&["W....", "xxxxx", "....B"]).unwrap();
    let disputed = board.update_region_map();
    assert!(!disputed);
    assert_eq!(
        board.square_controller(Pos::new(1, 0)),
        Some(RegionControl::White)
    );
    assert_eq!(
        board.square_controller(Pos::new(1, 2)),
        Some(RegionControl::Black)
    );
    assert_eq!(board.territory(), (4, 4));
}

#[test]
fn test_resolution_is_idempotent() {
    let mut board = Board::standard();
    assert!(board.move_piece(Pos::new(3, 0), Pos::new(5, 0)));
    assert!(board.shoot(Pos::new(5, 0), Pos::new(5, 5)));

    let first = board.update_region_map();
    let snap1 = region_snapshot(&board);
    let second = board.update_region_map();
    let snap2 = region_snapshot(&board);
    assert_eq!(first, second);
    assert_eq!(snap1, snap2);
}

#[test]
fn test_region_map_covers_every_square() {
    let mut board = Board::from_rows(&["W..x.", "...x.", "...x.", "...x.", "...xB"]).unwrap();
    board.update_region_map();
    for pos in board.positions() {
        assert!(board.square_controller(pos).is_some());
        assert_ne!(
            board.square_controller(pos),
            Some(RegionControl::Unclaimed),
            "every square of this sketch is reachable or an arrow"
        );
    }
}
