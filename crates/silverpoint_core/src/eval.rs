//! Static evaluation: material plus piece-square bonuses.

use crate::{board::Board, types::*};

// Piece-square tables from White's point of view, indexed a1..h8 (rank 1 in
// the first row). Black reads them mirrored by rank.
#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10,-20,-20, 10, 10,  5,
     5, -5,-10,  0,  0,-10, -5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5,  5, 10, 25, 25, 10,  5,  5,
    10, 10, 20, 30, 30, 20, 10, 10,
    50, 50, 50, 50, 50, 50, 50, 50,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
     0,  0,  0,  5,  5,  0,  0,  0,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     5, 10, 10, 10, 10, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -10,  5,  5,  5,  5,  5,  0,-10,
      0,  0,  5,  5,  5,  5,  0, -5,
     -5,  0,  5,  5,  5,  5,  0, -5,
    -10,  0,  5,  5,  5,  5,  0,-10,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_TABLE: [i32; 64] = [
     20, 30, 10,  0,  0, 10, 30, 20,
     20, 20,  0,  0,  0,  0, 20, 20,
    -10,-20,-20,-20,-20,-20,-20,-10,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
];

fn square_bonus(pc: Piece, sq: Square) -> i32 {
    let idx = match pc.color {
        Color::White => sq.index(),
        Color::Black => sq.index() ^ 56,
    };
    let table = match pc.kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => &KING_TABLE,
    };
    table[idx]
}

/// Evaluates the board in centipawns from `c`'s point of view.
///
/// Positive is good for `c`. The score is a pure function of placement, so
/// equal boards always evaluate equally.
pub fn evaluate_for(board: &Board, c: Color) -> i32 {
    let mut score = 0i32;
    for (sq, pc) in board.pieces() {
        let v = pc.kind.material_value() + square_bonus(pc, sq);
        score += if pc.color == c { v } else { -v };
    }
    score
}

/// Evaluates from the side-to-move perspective.
pub fn evaluate(board: &Board) -> i32 {
    evaluate_for(board, board.turn())
}

/// Renders a bar of `len` cells split between White (`█`, left) and Black
/// (`░`, right) in proportion to the static evaluation.
///
/// A ten-pawn advantage (±1000 centipawns) saturates the bar.
pub fn rating_bar(board: &Board, len: usize) -> String {
    let score = evaluate_for(board, Color::White).clamp(-1000, 1000);
    let white = ((score + 1000) as usize * len + 1000) / 2000;
    let white = white.min(len);
    let mut bar = String::with_capacity(len * 3);
    bar.extend(std::iter::repeat_n('█', white));
    bar.extend(std::iter::repeat_n('░', len - white));
    bar
}

impl Board {
    /// Static evaluation from `c`'s point of view.
    pub fn value_for(&self, c: Color) -> i32 {
        evaluate_for(self, c)
    }

    pub fn rating_bar(&self, len: usize) -> String {
        rating_bar(self, len)
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
