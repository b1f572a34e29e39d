use super::*;

fn sq(s: &str) -> Square {
    Square::parse(s).unwrap()
}

#[test]
fn test_startpos_moves() {
    let board = Board::initial();
    let moves = legal_moves(&board);
    // Starting position has 20 legal moves
    assert_eq!(moves.len(), 20);
    assert!(moves.contains(&Move::new(sq("e2"), sq("e4"))));
    assert!(moves.contains(&Move::new(sq("g1"), sq("f3"))));
}

#[test]
fn test_kiwipete_moves() {
    // Kiwipete position - complex with many move types
    let board =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -").unwrap();
    let moves = legal_moves(&board);
    assert_eq!(moves.len(), 48);
    assert!(moves.contains(&Move::KingsideCastle));
    assert!(moves.contains(&Move::QueensideCastle));
    // Castling is only ever spelled as the dedicated variants
    assert!(!moves.contains(&Move::new(sq("e1"), sq("g1"))));
}

#[test]
fn test_generation_order_is_stable() {
    let board = Board::initial();
    let first = legal_moves(&board);
    let mut buf = vec![Move::Resign];
    legal_moves_into(&board, &mut buf);
    assert_eq!(first, buf);
    // a1..h8 scan: the b1 knight comes before any pawn
    assert_eq!(first[0], Move::new(sq("b1"), sq("c3")));
}

#[test]
fn test_promotions_require_a_piece() {
    let board = Board::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").unwrap();
    let moves = legal_moves(&board);
    let promos: Vec<_> = moves
        .iter()
        .filter(|m| matches!(m, Move::Piece { from, .. } if *from == sq("e7")))
        .collect();
    assert_eq!(promos.len(), 4);
    assert!(promos.iter().all(|m| m.promotion().is_some()));
    assert!(!moves.contains(&Move::new(sq("e7"), sq("e8"))));
}

#[test]
fn test_en_passant_generated() {
    let board =
        Board::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3").unwrap();
    let moves = legal_moves(&board);
    assert!(moves.contains(&Move::new(sq("e5"), sq("f6"))));
    // d5 pawn moved earlier; no en-passant onto d6
    assert!(!moves.contains(&Move::new(sq("e5"), sq("d6"))));
}

#[test]
fn test_pinned_piece_cannot_leave_line() {
    // White bishop on e2 pinned by the rook on e8
    let board = Board::from_fen("4r1k1/8/8/8/8/8/4B3/4K3 w - - 0 1").unwrap();
    let moves = legal_moves(&board);
    assert!(moves.iter().all(|m| match m {
        Move::Piece { from, .. } => *from != sq("e2"),
        _ => true,
    }));
}

#[test]
fn test_no_move_leaves_king_in_check() {
    let board =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -").unwrap();
    for mv in legal_moves(&board) {
        let next = board.make_move(mv);
        assert!(!next.is_in_check(Color::White), "{mv} exposes the king");
    }
}

#[test]
fn test_has_legal_move_matches_generation() {
    let mated = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
    assert!(!has_legal_move(&mated));
    assert!(legal_moves(&mated).is_empty());
    assert!(has_legal_move(&Board::initial()));
}
