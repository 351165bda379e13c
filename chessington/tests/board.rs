use chessington::{Board, ChessError, PieceKind, Player, Square, PLACEMENT_STARTPOS};

fn sq(uci: &str) -> Square {
    Square::from_uci(uci).unwrap()
}

#[test]
fn placement_roundtrips_through_a_board() {
    for placement in [
        PLACEMENT_STARTPOS,
        "8/8/8/8/8/8/8/8",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        "2n1k3/1P6/8/5pP1/5n2/2P1P3/P7/4K3",
    ] {
        let board = Board::from_placement(placement).unwrap();
        assert_eq!(board.to_placement(), placement);
    }
}

#[test]
fn full_fen_strings_are_accepted() {
    let board =
        Board::from_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    assert_eq!(board.to_placement(), PLACEMENT_STARTPOS);
}

#[test]
fn malformed_placements_are_rejected() {
    for placement in [
        "",
        "8/8/8/8/8/8/8",
        "9/8/8/8/8/8/8/8",
        "7/8/8/8/8/8/8/8",
        "ppppppppp/8/8/8/8/8/8/8",
        "8/8/8/8/8/8/8/7x",
    ] {
        assert!(
            Board::from_placement(placement).is_err(),
            "{placement:?} should not parse"
        );
    }
}

#[test]
fn starting_position_layout() {
    let board = Board::default();

    let white_king = board.get_piece(sq("e1")).unwrap();
    assert_eq!(white_king.player(), Player::White);
    assert_eq!(white_king.kind(), PieceKind::King);

    let black_queen = board.get_piece(sq("d8")).unwrap();
    assert_eq!(black_queen.player(), Player::Black);
    assert_eq!(black_queen.kind(), PieceKind::Queen);

    assert_eq!(board.pieces_of(Player::White).count(), 16);
    assert_eq!(board.pieces_of(Player::Black).count(), 16);
    assert!(!board.is_occupied(sq("e4")));
}

#[test]
fn pieces_of_the_same_kind_are_distinct() {
    let board = Board::starting_position();
    let a2 = board.get_piece(sq("a2")).unwrap();
    let b2 = board.get_piece(sq("b2")).unwrap();

    assert_ne!(a2, b2);
    assert_eq!(board.find_piece(&a2).unwrap(), sq("a2"));
    assert_eq!(board.find_piece(&b2).unwrap(), sq("b2"));
}

#[test]
fn valid_square_checks_both_coordinates() {
    let board = Board::new();

    assert!(board.valid_square(0, 0));
    assert!(board.valid_square(7, 7));
    assert!(!board.valid_square(8, 0));
    assert!(!board.valid_square(0, 8));
    assert!(!board.valid_square(-1, 0));
    assert!(!board.valid_square(0, -1));
}

#[test]
fn move_piece_from_an_empty_square_fails() {
    let mut board = Board::new();

    let err = board.move_piece(sq("a1"), sq("a2")).unwrap_err();

    assert_eq!(
        err.downcast_ref::<ChessError>(),
        Some(&ChessError::NoPieceAt { square: sq("a1") })
    );
}

#[test]
fn move_piece_relocates_without_changing_identity() {
    let mut board = Board::starting_position();
    let knight = board.get_piece(sq("g1")).unwrap();

    let captured = board.move_piece(sq("g1"), sq("f3")).unwrap();

    assert_eq!(captured, None);
    assert_eq!(board.get_piece(sq("f3")), Some(knight));
    assert_eq!(board.get_piece(sq("g1")), None);
    assert_eq!(
        board.to_placement(),
        "rnbqkbnr/pppppppp/8/8/8/5N2/PPPPPPPP/RNBQKB1R"
    );
}

#[test]
fn move_piece_onto_its_own_square_does_nothing() {
    let mut board = Board::starting_position();

    let captured = board.move_piece(sq("a1"), sq("a1")).unwrap();

    assert_eq!(captured, None);
    assert_eq!(board, Board::starting_position());
}

#[test]
fn remove_piece_takes_the_occupant() {
    let mut board = Board::new();
    let rook = board
        .add_piece(sq("h8"), Player::Black, PieceKind::Rook)
        .unwrap();

    assert_eq!(board.remove_piece(sq("h8")), Some(rook));
    assert_eq!(board.remove_piece(sq("h8")), None);

    let err = board.find_piece(&rook).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ChessError>(),
        Some(&ChessError::PieceNotFound { piece: rook })
    );
}

#[test]
fn squares_parse_and_display_as_algebraic_notation() {
    let e2 = Square::at(1, 4).unwrap();
    assert_eq!(e2.to_string(), "e2");
    assert_eq!("e2".parse::<Square>().unwrap(), e2);

    for bad in ["", "e", "e22", "i1", "a0", "a9", "E2"] {
        assert!(Square::from_uci(bad).is_err(), "{bad:?} should not parse");
    }
}

#[test]
fn out_of_range_squares_report_their_coordinates() {
    let err = Square::at(3, -1).unwrap_err();

    assert_eq!(
        err.downcast_ref::<ChessError>(),
        Some(&ChessError::SquareOutOfRange { row: 3, col: -1 })
    );
    assert!(err.to_string().contains("(3, -1)"));
}

#[test]
fn players_and_kinds_parse_and_display_their_tags() {
    assert_eq!("b".parse::<Player>().unwrap(), Player::Black);
    assert_eq!(Player::White.to_string(), "w");
    assert_eq!(format!("{:?}", Player::Black), "\"b\" (black)");
    assert!("wb".parse::<Player>().is_err());

    assert_eq!("N".parse::<PieceKind>().unwrap(), PieceKind::Knight);
    assert_eq!(PieceKind::Queen.to_string(), "q");
    assert_eq!(format!("{:?}", PieceKind::Rook), "\"r\" (rook)");
    assert!("".parse::<PieceKind>().is_err());
}

#[test]
fn offsets_far_off_the_board_are_none() {
    let h8 = Square::at(7, 7).unwrap();
    let a1 = Square::at(0, 0).unwrap();

    assert_eq!(h8.offset(127, 0), None);
    assert_eq!(h8.offset(0, i8::MAX), None);
    assert_eq!(a1.offset(-128, 0), None);
    assert_eq!(a1.offset(0, i8::MIN), None);
    assert_eq!(h8.offset(-7, -7), Some(a1));
}

#[test]
fn boards_with_the_same_placement_are_equal() {
    let mut board = Board::new();
    board
        .add_piece(sq("a1"), Player::White, PieceKind::Rook)
        .unwrap();
    board.remove_piece(sq("a1"));

    assert_eq!(board, Board::new());

    let mut other = Board::from_placement("8/8/8/8/8/8/8/R7").unwrap();
    other.remove_piece(sq("a1"));
    assert_eq!(board, other);
}

#[test]
fn board_display_draws_white_at_the_bottom() {
    let board = Board::starting_position();
    let drawn = board.to_string();
    let lines = drawn.lines().collect::<Vec<_>>();

    assert_eq!(lines[0], "8| r n b q k b n r ");
    assert_eq!(lines[7], "1| R N B Q K B N R ");
    assert_eq!(lines[9], "   a b c d e f g h ");
}
