use super::*;

#[test]
fn test_startpos_is_balanced() {
    let board = Board::initial();
    assert_eq!(evaluate(&board), 0);
    assert_eq!(evaluate_for(&board, Color::Black), 0);
}

#[test]
fn test_perspective_flips_sign() {
    let board = Board::initial().remove_all(Color::Black);
    let white = evaluate_for(&board, Color::White);
    assert!(white > 3000);
    assert_eq!(evaluate_for(&board, Color::Black), -white);
    assert_eq!(evaluate(&board.change_turn()), -white);
}

#[test]
fn test_centralization_bonus() {
    let corner = Board::from_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1").unwrap();
    let center = Board::from_fen("4k3/8/8/8/3N4/8/8/4K3 w - - 0 1").unwrap();
    assert!(evaluate(&center) > evaluate(&corner));
}

#[test]
fn test_rating_bar() {
    let even = Board::initial().rating_bar(20);
    assert_eq!(even.chars().count(), 20);
    assert_eq!(even.chars().filter(|&c| c == '█').count(), 10);

    let crushing = Board::initial().remove_all(Color::Black).rating_bar(12);
    assert_eq!(crushing, "█".repeat(12));

    assert_eq!(Board::initial().rating_bar(0), "");
}
