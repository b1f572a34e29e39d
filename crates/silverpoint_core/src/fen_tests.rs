use super::*;

const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[test]
fn test_startpos_fen() {
    assert_eq!(Board::from_fen(START).unwrap(), Board::initial());
    assert_eq!(Board::initial().to_fen(), START);
}

#[test]
fn test_fen_round_trip_keeps_every_field() {
    for fen in [
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        "4k3/8/8/8/8/8/8/4K3 b - - 42 87",
    ] {
        let b = Board::from_fen(fen).unwrap();
        assert_eq!(b.to_fen(), fen);
    }
}

#[test]
fn test_counters_default_when_missing() {
    let b = Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - -").unwrap();
    assert_eq!(b.halfmove_clock(), 0);
    assert_eq!(b.fullmove_number(), 1);
}

#[test]
fn test_fen_errors() {
    assert_eq!(
        Board::from_fen("8/8/8 w"),
        Err(FenError::MissingFields { found: 2 })
    );
    assert_eq!(
        Board::from_fen("8/8/8/8/8/8/8 w - -"),
        Err(FenError::RankCount { found: 7 })
    );
    assert!(matches!(
        Board::from_fen("9/8/8/8/8/8/8/8 w - -"),
        Err(FenError::RankWidth { rank: 8 })
    ));
    assert!(matches!(
        Board::from_fen("7/8/8/8/8/8/8/8 w - -"),
        Err(FenError::RankWidth { rank: 8 })
    ));
    assert_eq!(
        Board::from_fen("4x3/8/8/8/8/8/8/8 w - -"),
        Err(FenError::PieceChar('x'))
    );
    assert!(matches!(
        Board::from_fen("8/8/8/8/8/8/8/8 x - -"),
        Err(FenError::SideToMove(_))
    ));
    assert!(matches!(
        Board::from_fen("8/8/8/8/8/8/8/8 w KX -"),
        Err(FenError::Castling(_))
    ));
    assert!(matches!(
        Board::from_fen("8/8/8/8/8/8/8/8 w - e9"),
        Err(FenError::EnPassant(_))
    ));
    assert!(matches!(
        Board::from_fen("8/8/8/8/8/8/8/8 w - - x 1"),
        Err(FenError::Counter(_))
    ));
}
