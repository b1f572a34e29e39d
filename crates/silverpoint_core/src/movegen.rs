use crate::board::{Board, DIAGONALS, KING_STEPS, KNIGHT_STEPS, ORTHOGONALS};
use crate::moves::Move;
use crate::types::*;

/// Generate all legal moves for the side to move, returning a freshly
/// allocated vector.
///
/// Order is deterministic: origin squares a1..h8, then per-piece direction
/// order, promotions as Q, R, B, N, and castles after the king's steps.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(board, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(board: &Board, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(board, out);

    let mover = board.turn();
    // Castles are generated fully checked; everything else is played out on a
    // copy to see whether it exposes the mover's king.
    out.retain(|&mv| match mv {
        Move::Piece { .. } => !board.make_move(mv).is_in_check(mover),
        _ => true,
    });
}

/// Whether the side to move has at least one legal move.
pub fn has_legal_move(board: &Board) -> bool {
    let mut buf = Vec::with_capacity(64);
    pseudo_moves(board, &mut buf);
    let mover = board.turn();
    buf.into_iter().any(|mv| match mv {
        Move::Piece { .. } => !board.make_move(mv).is_in_check(mover),
        _ => true,
    })
}

fn pseudo_moves(board: &Board, out: &mut Vec<Move>) {
    let c = board.turn();
    for (from, pc) in board.pieces() {
        if pc.color != c {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(board, from, c, out),
            PieceKind::Knight => gen_steps(board, from, c, out, &KNIGHT_STEPS),
            PieceKind::Bishop => gen_slider(board, from, c, out, &DIAGONALS),
            PieceKind::Rook => gen_slider(board, from, c, out, &ORTHOGONALS),
            PieceKind::Queen => {
                gen_slider(board, from, c, out, &DIAGONALS);
                gen_slider(board, from, c, out, &ORTHOGONALS);
            }
            PieceKind::King => {
                gen_steps(board, from, c, out, &KING_STEPS);
                gen_castle(board, c, out);
            }
        }
    }
}

fn push_pawn_move(from: Square, to: Square, c: Color, out: &mut Vec<Move>) {
    if to.rank() == c.other().back_rank() {
        for pk in PieceKind::PROMOTIONS {
            out.push(Move::promote(from, to, pk));
        }
    } else {
        out.push(Move::new(from, to));
    }
}

fn gen_pawn(board: &Board, from: Square, c: Color, out: &mut Vec<Move>) {
    let dir = c.pawn_dir();
    let start_rank = c.back_rank() + dir;

    // forward 1
    if let Some(to) = from.offset(0, dir)
        && !board.has_piece(to)
    {
        push_pawn_move(from, to, c, out);

        // forward 2 from start
        if from.rank() == start_rank
            && let Some(to2) = from.offset(0, 2 * dir)
            && !board.has_piece(to2)
        {
            out.push(Move::new(from, to2));
        }
    }

    // captures + en-passant
    for df in [-1, 1] {
        let Some(to) = from.offset(df, dir) else {
            continue;
        };
        if board.has_enemy_piece(to, c) {
            push_pawn_move(from, to, c, out);
        } else if !board.has_piece(to) && board.en_passant() == Some(to) {
            out.push(Move::new(from, to));
        }
    }
}

fn gen_steps(board: &Board, from: Square, c: Color, out: &mut Vec<Move>, deltas: &[(i8, i8)]) {
    for &(df, dr) in deltas {
        if let Some(to) = from.offset(df, dr)
            && !board.has_ally_piece(to, c)
        {
            out.push(Move::new(from, to));
        }
    }
}

fn gen_slider(board: &Board, from: Square, c: Color, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    for &(df, dr) in dirs {
        let mut cur = from.offset(df, dr);
        while let Some(to) = cur {
            match board.piece(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) => {
                    if pc.color != c {
                        out.push(Move::new(from, to));
                    }
                    break;
                }
            }
            cur = to.offset(df, dr);
        }
    }
}

fn gen_castle(board: &Board, c: Color, out: &mut Vec<Move>) {
    if board.can_kingside_castle(c) {
        out.push(Move::KingsideCastle);
    }
    if board.can_queenside_castle(c) {
        out.push(Move::QueensideCastle);
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
