//! Properties of the search that hold for any quiet position.

use silverpoint_core::{Board, Objective, evaluate, search};

const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -",
    "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
];

/// Value of each root move one ply deep, in generation order.
fn one_ply_values(board: &Board) -> Vec<i32> {
    board
        .legal_moves()
        .into_iter()
        .map(|mv| {
            let next = board
                .play_move(mv)
                .into_next_board()
                .expect("test positions have no mate in one");
            -evaluate(&next)
        })
        .collect()
}

#[test]
fn test_depth_one_matches_brute_force() {
    for fen in POSITIONS {
        let board = Board::from_fen(fen).unwrap();
        let values = one_ply_values(&board);
        let max = values.iter().copied().max().unwrap();
        let min = values.iter().copied().min().unwrap();

        let best = search(&board, 1, Objective::Best).unwrap();
        let worst = search(&board, 1, Objective::Worst).unwrap();

        assert_eq!(best.score, max, "{fen}");
        assert_eq!(worst.score, min, "{fen}");
        assert_eq!(best.evaluated, values.len() as u64);
        assert_eq!(worst.evaluated, values.len() as u64);

        // Ties resolve to the first move generated
        let moves = board.legal_moves();
        let first_max = values.iter().position(|&v| v == max).unwrap();
        let first_min = values.iter().position(|&v| v == min).unwrap();
        assert_eq!(best.mv, moves[first_max], "{fen}");
        assert_eq!(worst.mv, moves[first_min], "{fen}");
    }
}

#[test]
fn test_chosen_move_is_always_legal() {
    for fen in POSITIONS {
        let board = Board::from_fen(fen).unwrap();
        for depth in 0..=2 {
            for objective in [Objective::Best, Objective::Worst] {
                let out = search(&board, depth, objective).unwrap();
                assert!(board.legal_moves().contains(&out.mv), "{fen} depth {depth}");
                assert!(!board.play_move(out.mv).is_illegal_move());
            }
        }
    }
}

#[test]
fn test_search_does_not_touch_the_board() {
    let board = Board::from_fen(POSITIONS[1]).unwrap();
    let before = board.to_fen();
    let _ = board.best_next_move(2).unwrap();
    let _ = board.worst_next_move(2).unwrap();
    assert_eq!(board.to_fen(), before);
}
