use std::fmt;
use std::hash::{Hash, Hasher};

use crate::moves::Move;
use crate::types::*;

pub(crate) const KNIGHT_STEPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub(crate) const KING_STEPS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        wk: true,
        wq: true,
        bk: true,
        bq: true,
    };
    pub const NONE: CastlingRights = CastlingRights {
        wk: false,
        wq: false,
        bk: false,
        bq: false,
    };

    pub fn kingside(self, c: Color) -> bool {
        match c {
            Color::White => self.wk,
            Color::Black => self.bk,
        }
    }

    pub fn queenside(self, c: Color) -> bool {
        match c {
            Color::White => self.wq,
            Color::Black => self.bq,
        }
    }

    fn clear(&mut self, c: Color) {
        self.clear_kingside(c);
        self.clear_queenside(c);
    }

    fn clear_kingside(&mut self, c: Color) {
        match c {
            Color::White => self.wk = false,
            Color::Black => self.bk = false,
        }
    }

    fn clear_queenside(&mut self, c: Color) {
        match c {
            Color::White => self.wq = false,
            Color::Black => self.bq = false,
        }
    }
}

/// An immutable chess position.
///
/// Every transformation returns a new `Board`. Equality and hashing look at
/// the placement, side to move, castling rights and en-passant target; the
/// move counters are bookkeeping and do not distinguish positions.
#[derive(Clone, Copy, Debug)]
pub struct Board {
    pub(crate) squares: [Option<Piece>; 64],
    pub(crate) turn: Color,
    pub(crate) castling: CastlingRights,
    /// Square behind a pawn that just advanced two ranks.
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Board {
    /// The standard starting position.
    pub fn initial() -> Self {
        let mut b = Board::empty();
        b.castling = CastlingRights::ALL;

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            b.squares[f] = Some(Piece::new(Color::White, kind));
            b.squares[8 + f] = Some(Piece::new(Color::White, PieceKind::Pawn));
            b.squares[48 + f] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            b.squares[56 + f] = Some(Piece::new(Color::Black, kind));
        }
        b
    }

    /// A board with no pieces, White to move and no castling rights.
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
            turn: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn piece(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }
    pub fn has_piece(&self, sq: Square) -> bool {
        self.piece(sq).is_some()
    }
    pub fn has_ally_piece(&self, sq: Square, ally: Color) -> bool {
        self.piece(sq).is_some_and(|pc| pc.color == ally)
    }
    pub fn has_enemy_piece(&self, sq: Square, ally: Color) -> bool {
        self.piece(sq).is_some_and(|pc| pc.color != ally)
    }

    pub fn turn(&self) -> Color {
        self.turn
    }
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Occupied squares in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece(sq).map(|pc| (sq, pc)))
    }

    pub fn king_square(&self, c: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, pc)| pc.color == c && pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    // --- functional updates -------------------------------------------------

    /// Hands the move to the other side without moving a piece. Any
    /// en-passant opportunity lapses.
    pub fn change_turn(&self) -> Board {
        self.set_turn(self.turn.other())
    }

    pub fn set_turn(&self, c: Color) -> Board {
        let mut next = *self;
        next.turn = c;
        next.en_passant = None;
        next
    }

    pub fn with_piece(&self, sq: Square, pc: Option<Piece>) -> Board {
        let mut next = *self;
        next.squares[sq.index()] = pc;
        next
    }

    /// Removes every piece of `c` except its king.
    pub fn remove_all(&self, c: Color) -> Board {
        self.map_non_king(c, |_| None)
    }

    /// Turns every piece of `c` except its king into a queen.
    pub fn queen_all(&self, c: Color) -> Board {
        self.map_non_king(c, |pc| Some(Piece::new(pc.color, PieceKind::Queen)))
    }

    fn map_non_king(&self, c: Color, f: impl Fn(Piece) -> Option<Piece>) -> Board {
        let mut next = *self;
        for slot in next.squares.iter_mut() {
            if let Some(pc) = *slot
                && pc.color == c
                && pc.kind != PieceKind::King
            {
                *slot = f(pc);
            }
        }
        next
    }

    // --- attacks ------------------------------------------------------------

    pub fn is_in_check(&self, c: Color) -> bool {
        match self.king_square(c) {
            Some(ksq) => self.is_square_attacked(ksq, c.other()),
            None => false,
        }
    }

    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        let holds = |sq: Option<Square>, kinds: &[PieceKind]| {
            sq.and_then(|s| self.piece(s))
                .is_some_and(|pc| pc.color == by && kinds.contains(&pc.kind))
        };

        // A pawn of `by` attacks from one rank behind its direction of travel.
        let back = -by.pawn_dir();
        if holds(target.offset(-1, back), &[PieceKind::Pawn])
            || holds(target.offset(1, back), &[PieceKind::Pawn])
        {
            return true;
        }

        if KNIGHT_STEPS
            .iter()
            .any(|&(df, dr)| holds(target.offset(df, dr), &[PieceKind::Knight]))
        {
            return true;
        }

        if KING_STEPS
            .iter()
            .any(|&(df, dr)| holds(target.offset(df, dr), &[PieceKind::King]))
        {
            return true;
        }

        let slider_hits = |dirs: &[(i8, i8)], kinds: &[PieceKind]| {
            dirs.iter().any(|&(df, dr)| {
                let mut cur = target.offset(df, dr);
                while let Some(s) = cur {
                    if let Some(pc) = self.piece(s) {
                        return pc.color == by && kinds.contains(&pc.kind);
                    }
                    cur = s.offset(df, dr);
                }
                false
            })
        };

        slider_hits(&DIAGONALS, &[PieceKind::Bishop, PieceKind::Queen])
            || slider_hits(&ORTHOGONALS, &[PieceKind::Rook, PieceKind::Queen])
    }

    // --- castling -----------------------------------------------------------

    /// Whether `c` may castle kingside right now: rights intact, king and
    /// rook on their home squares, the path empty, and neither the king's
    /// square nor the squares it crosses attacked.
    pub fn can_kingside_castle(&self, c: Color) -> bool {
        self.castling.kingside(c) && self.castle_path_clear(c, 7, &[5, 6], &[5, 6])
    }

    /// Queenside counterpart of [`Board::can_kingside_castle`]. The b-file
    /// square must be empty but may be attacked.
    pub fn can_queenside_castle(&self, c: Color) -> bool {
        self.castling.queenside(c) && self.castle_path_clear(c, 0, &[1, 2, 3], &[3, 2])
    }

    fn castle_path_clear(&self, c: Color, rook_file: i8, empty: &[i8], safe: &[i8]) -> bool {
        let rank = c.back_rank();
        let on = |file: i8| Square::new(file, rank).and_then(|s| self.piece(s));

        if on(4) != Some(Piece::new(c, PieceKind::King))
            || on(rook_file) != Some(Piece::new(c, PieceKind::Rook))
        {
            return false;
        }
        if empty.iter().any(|&f| on(f).is_some()) {
            return false;
        }
        if self.is_in_check(c) {
            return false;
        }
        let enemy = c.other();
        !safe.iter().any(|&f| {
            Square::new(f, rank).is_some_and(|s| self.is_square_attacked(s, enemy))
        })
    }

    // --- move application ---------------------------------------------------

    /// Plays `mv` on a copy of this board without checking legality.
    ///
    /// `mv` must be pseudo-legal for the side to move (as produced by move
    /// generation); `Resign` leaves the position untouched.
    pub(crate) fn make_move(&self, mv: Move) -> Board {
        let mut next = *self;
        let mover = self.turn;
        next.en_passant = None;

        let mut reset_hmc = false;

        match mv {
            Move::Resign => return next,
            Move::KingsideCastle | Move::QueensideCastle => {
                let rank = mover.back_rank();
                let (king_to, rook_from, rook_to) = if mv.is_kingside_castle() {
                    (6, 7, 5)
                } else {
                    (2, 0, 3)
                };
                next.relocate(4, king_to, rank);
                next.relocate(rook_from, rook_to, rank);
                next.castling.clear(mover);
            }
            Move::Piece {
                from,
                to,
                promotion,
            } => {
                let Some(moved) = self.piece(from) else {
                    debug_assert!(false, "no piece on {from}");
                    return next;
                };
                let mut captured = self.piece(to);

                // En passant: a pawn moving diagonally onto the empty target square.
                if moved.kind == PieceKind::Pawn
                    && captured.is_none()
                    && from.file() != to.file()
                    && self.en_passant == Some(to)
                    && let Some(cs) = Square::new(to.file(), from.rank())
                {
                    captured = next.squares[cs.index()].take();
                }

                next.squares[from.index()] = None;
                next.squares[to.index()] = Some(moved);

                if moved.kind == PieceKind::Pawn {
                    reset_hmc = true;
                    if to.rank() == mover.other().back_rank() {
                        let kind = promotion.unwrap_or(PieceKind::Queen);
                        next.squares[to.index()] = Some(Piece::new(mover, kind));
                    }
                    if (to.rank() - from.rank()).abs() == 2 {
                        next.en_passant = Square::new(from.file(), (from.rank() + to.rank()) / 2);
                    }
                }

                if moved.kind == PieceKind::King {
                    next.castling.clear(mover);
                }
                if moved.kind == PieceKind::Rook && from.rank() == mover.back_rank() {
                    match from.file() {
                        0 => next.castling.clear_queenside(mover),
                        7 => next.castling.clear_kingside(mover),
                        _ => {}
                    }
                }

                if let Some(cp) = captured {
                    reset_hmc = true;
                    // A rook taken on its home corner takes its right with it.
                    if cp.kind == PieceKind::Rook && to.rank() == cp.color.back_rank() {
                        match to.file() {
                            0 => next.castling.clear_queenside(cp.color),
                            7 => next.castling.clear_kingside(cp.color),
                            _ => {}
                        }
                    }
                }
            }
        }

        next.halfmove_clock = if reset_hmc {
            0
        } else {
            self.halfmove_clock + 1
        };
        if mover == Color::Black {
            next.fullmove_number += 1;
        }
        next.turn = mover.other();
        next
    }

    fn relocate(&mut self, from_file: i8, to_file: i8, rank: i8) {
        if let (Some(from), Some(to)) = (Square::new(from_file, rank), Square::new(to_file, rank)) {
            self.squares[to.index()] = self.squares[from.index()].take();
        }
    }

    // --- material -----------------------------------------------------------

    /// Material of `c` minus material of its opponent, in centipawns.
    pub fn material_advantage(&self, c: Color) -> i32 {
        self.pieces()
            .map(|(_, pc)| {
                let v = pc.kind.material_value();
                if pc.color == c { v } else { -v }
            })
            .sum()
    }

    /// Whether `c` still has enough material to deliver mate in principle.
    pub fn has_sufficient_material(&self, c: Color) -> bool {
        let mut minors = 0;
        for (_, pc) in self.pieces().filter(|(_, pc)| pc.color == c) {
            match pc.kind {
                PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return true,
                PieceKind::Knight | PieceKind::Bishop => minors += 1,
                PieceKind::King => {}
            }
        }
        minors >= 2
    }

    pub fn has_insufficient_material(&self, c: Color) -> bool {
        !self.has_sufficient_material(c)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.squares == other.squares
            && self.turn == other.turn
            && self.castling == other.castling
            && self.en_passant == other.en_passant
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.squares.hash(state);
        self.turn.hash(state);
        self.castling.hash(state);
        self.en_passant.hash(state);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8 {
                let c = Square::new(file, rank)
                    .and_then(|s| self.piece(s))
                    .map_or('.', Piece::symbol);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  +----------------")?;
        writeln!(f, "    a b c d e f g h")?;
        write!(f, "{} to move", self.turn)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
