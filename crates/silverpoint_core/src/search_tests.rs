use super::*;
use crate::types::Square;

#[test]
fn test_depth_zero_is_a_single_evaluation() {
    let board = Board::initial();
    let out = search(&board, 0, Objective::Best).unwrap();
    assert_eq!(out.evaluated, 1);
    assert_eq!(out.mv, legal_moves(&board)[0]);
    assert_eq!(out.score, evaluate(&board));
}

#[test]
fn test_depth_one_visits_every_root_move() {
    let board = Board::initial();
    let out = board.best_next_move(1).unwrap();
    assert_eq!(out.evaluated, 20);
    assert!(legal_moves(&board).contains(&out.mv));
}

#[test]
fn test_search_is_reproducible() {
    let board =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -").unwrap();
    let a = search(&board, 2, Objective::Best).unwrap();
    let b = search(&board, 2, Objective::Best).unwrap();
    assert_eq!(a, b);
    assert!(a.evaluated > 48);
}

#[test]
fn test_best_never_scores_below_worst() {
    let boards = [
        Board::initial(),
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -").unwrap(),
        Board::from_fen("4k3/8/8/3r4/8/8/8/3QK3 b - - 0 1").unwrap(),
    ];
    for board in &boards {
        for depth in 0..=2 {
            let best = search(board, depth, Objective::Best).unwrap();
            let worst = search(board, depth, Objective::Worst).unwrap();
            assert!(best.score >= worst.score, "depth {depth}: {best:?} vs {worst:?}");
        }
    }
}

#[test]
fn test_finds_mate_in_one() {
    // Qe8 is mate
    let board = Board::from_fen("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1").unwrap();
    let out = search(&board, 2, Objective::Best).unwrap();
    let e1 = Square::parse("e1").unwrap();
    let e8 = Square::parse("e8").unwrap();
    assert_eq!(out.mv, Move::new(e1, e8));
    assert_eq!(out.score, MATE_SCORE - 1);
}

#[test]
fn test_worst_hangs_material() {
    let board = Board::from_fen("4k3/8/8/3r4/8/8/8/3QK3 w - - 0 1").unwrap();
    let best = board.best_next_move(2).unwrap();
    let worst = board.worst_next_move(2).unwrap();
    assert_eq!(best.mv, Move::new(Square::parse("d1").unwrap(), Square::parse("d5").unwrap()));
    assert!(best.score > 0);
    assert!(worst.score < 0);
}

#[test]
fn test_no_legal_moves_is_an_error() {
    let mated = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
    assert_eq!(search(&mated, 3, Objective::Best), Err(SearchError::NoLegalMoves));

    let stale = Board::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(stale.worst_next_move(0), Err(SearchError::NoLegalMoves));
}

#[test]
fn test_prefers_mate_over_material() {
    // Qxd4 wins a knight, Ra8 mates
    let board = Board::from_fen("6k1/5ppp/8/8/3n4/8/3Q1PPP/R5K1 w - - 0 1").unwrap();
    let out = search(&board, 1, Objective::Best).unwrap();
    let a1 = Square::parse("a1").unwrap();
    let a8 = Square::parse("a8").unwrap();
    assert_eq!(out.mv, Move::new(a1, a8));
    assert_eq!(out.score, MATE_SCORE - 1);
}

#[test]
fn test_engine_trait_matches_search() {
    use crate::{Engine, MinimaxEngine};

    let board = Board::initial();
    let mut engine = MinimaxEngine;
    assert_eq!(engine.name(), "Minimax");
    for objective in [Objective::Best, Objective::Worst] {
        assert_eq!(engine.choose(&board, 2, objective), search(&board, 2, objective));
    }
}
