use super::*;

fn sq(s: &str) -> Square {
    Square::parse(s).unwrap()
}

#[test]
fn test_parse_coordinate_forms() {
    let e2e4 = Move::new(sq("e2"), sq("e4"));
    for text in ["e2e4", "E2E4", " e2e4 ", "e2 e4", "e2-e4", "e2 to e4", "e2 - e4"] {
        assert_eq!(Move::parse(text), Ok(e2e4), "{text:?}");
    }
    assert_eq!(Move::parse("d4xe5"), Ok(Move::new(sq("d4"), sq("e5"))));
}

#[test]
fn test_parse_promotions() {
    let q = Move::promote(sq("e7"), sq("e8"), PieceKind::Queen);
    assert_eq!(Move::parse("e7e8q"), Ok(q));
    assert_eq!(Move::parse("e7e8=Q"), Ok(q));
    assert_eq!(
        Move::parse("b2a1n"),
        Ok(Move::promote(sq("b2"), sq("a1"), PieceKind::Knight))
    );
}

#[test]
fn test_parse_special_tokens() {
    assert_eq!(Move::parse("O-O"), Ok(Move::KingsideCastle));
    assert_eq!(Move::parse("0-0"), Ok(Move::KingsideCastle));
    assert_eq!(Move::parse("o-o-o"), Ok(Move::QueensideCastle));
    assert_eq!(Move::parse("0-0-0"), Ok(Move::QueensideCastle));
    assert_eq!(Move::parse("Resign"), Ok(Move::Resign));
}

#[test]
fn test_parse_failures_keep_raw_text() {
    for text in ["", "   ", "e2", "e2e9", "z2e4", "e2e4k", "e2e2", "castle", "e2 e4 e5", "é2e4"] {
        let err = Move::parse(text).unwrap_err();
        assert_eq!(err.raw_text, text);
        assert!(!err.reason.is_empty());
    }
}

#[test]
fn test_display_round_trips() {
    let moves = [
        Move::new(sq("g1"), sq("f3")),
        Move::promote(sq("a7"), sq("a8"), PieceKind::Rook),
        Move::KingsideCastle,
        Move::QueensideCastle,
        Move::Resign,
    ];
    for mv in moves {
        assert_eq!(Move::parse(&mv.to_string()), Ok(mv));
    }
    assert_eq!(Move::KingsideCastle.to_string(), "O-O");
    assert_eq!(Move::promote(sq("a7"), sq("a8"), PieceKind::Rook).to_string(), "a7a8r");
}

#[test]
fn test_every_generated_move_round_trips() {
    use crate::{board::Board, movegen::legal_moves};

    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
    ];
    for fen in fens {
        let board = Board::from_fen(fen).unwrap();
        // Both sides, so black promotions and castles are covered too
        for board in [board, board.change_turn()] {
            for mv in legal_moves(&board) {
                assert_eq!(Move::parse(&mv.to_string()), Ok(mv), "{fen}: {mv}");
            }
        }
    }
}

#[test]
fn test_predicates() {
    let mv = Move::new(sq("e2"), sq("e4"));
    assert!(mv.is_piece_move());
    assert!(!mv.is_resign());
    assert!(Move::KingsideCastle.is_kingside_castle());
    assert!(Move::QueensideCastle.is_queenside_castle());
    assert!(Move::Resign.is_resign());
    assert!(!Move::Resign.is_piece_move());
}

#[test]
fn test_piece_positions_only_for_piece_moves() {
    let mv = Move::new(sq("b1"), sq("c3"));
    assert_eq!(mv.piece_positions(), Ok((sq("b1"), sq("c3"))));

    let err = Move::QueensideCastle.piece_positions().unwrap_err();
    assert_eq!(err.mv, Move::QueensideCastle);
    assert!(Move::Resign.piece_positions().is_err());
}
