use xadrez::{Board, Color, Piece, Role, Square};

fn play(board: &mut Board, moves: &[(&str, &str)]) {
    for (from, to) in moves {
        let from: Square = from.parse().expect("valid square");
        let to: Square = to.parse().expect("valid square");
        assert!(board.move_piece(from, to), "move {from} -> {to} rejected");
    }
}

#[test]
fn italian_opening() {
    let mut board = Board::new();
    play(
        &mut board,
        &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("g1", "f3"),
            ("b8", "c6"),
            ("f1", "c4"),
            ("f8", "c5"),
        ],
    );

    assert_eq!(board.piece_at(Square::F3).unwrap().role, Role::Knight);
    assert_eq!(board.piece_at(Square::C6).unwrap().role, Role::Knight);
    assert_eq!(board.piece_at(Square::C4).unwrap().role, Role::Bishop);
    assert_eq!(board.piece_at(Square::C5).unwrap().role, Role::Bishop);
    assert!(board.piece_at(Square::E2).is_none());
    assert!(board.piece_at(Square::G1).is_none());

    assert_eq!(board.turn(), Color::White);
    assert_eq!(board.moves().len(), 6);
    assert!(board.moves().iter().all(|record| !record.is_capture()));
    assert_eq!(board.pieces(None).len(), 32);
}

#[test]
fn queen_raid_gives_check() {
    let mut board = Board::new();
    play(
        &mut board,
        &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("d1", "h5"),
            ("b8", "c6"),
            ("h5", "f7"),
        ],
    );

    let record = board.moves().last().unwrap();
    assert_eq!(record.capture.unwrap().role, Role::Pawn);
    assert!(board.is_in_check(Color::Black));
    assert!(!board.is_in_check(Color::White));
}

#[test]
fn interposing_blocks_check() {
    let mut board = Board::empty();
    board.place_piece(Piece::new(Color::White, Role::King, Square::E1));
    board.place_piece(Piece::new(Color::White, Role::Rook, Square::A4));
    board.place_piece(Piece::new(Color::Black, Role::Rook, Square::E8));

    assert!(board.is_in_check(Color::White));

    // The check query never re-evaluates mid-move; play the block and
    // ask again on the resulting position.
    assert!(board.move_piece(Square::A4, Square::E4));
    assert!(!board.is_in_check(Color::White));
}

#[test]
fn scan_order_is_row_major() {
    let board = Board::new();
    let pieces = board.pieces(None);
    assert_eq!(pieces[0].role, Role::Rook);
    assert_eq!(pieces[0].square(), Square::A1);
    assert_eq!(pieces[7].square(), Square::H1);
    assert_eq!(pieces[8].square(), Square::A2);
}
