//! Applying moves and deciding how the game stands afterwards.

use std::fmt;

use crate::board::Board;
use crate::movegen::{has_legal_move, legal_moves};
use crate::moves::Move;
use crate::types::{Color, Piece, PieceKind};

/// Outcome of playing one move on a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// The game goes on from the contained position.
    Continuing(Board),
    /// The contained color has won, by checkmate or resignation.
    Victory(Color),
    /// The move was not legal; the board it was played on still stands.
    IllegalMove(Move),
    Stalemate,
}

impl GameResult {
    pub fn is_continuing(&self) -> bool {
        matches!(self, GameResult::Continuing(_))
    }
    pub fn is_victory(&self) -> bool {
        matches!(self, GameResult::Victory(_))
    }
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, GameResult::IllegalMove(_))
    }
    pub fn is_stalemate(&self) -> bool {
        matches!(self, GameResult::Stalemate)
    }

    pub fn next_board(&self) -> Option<&Board> {
        match self {
            GameResult::Continuing(board) => Some(board),
            _ => None,
        }
    }

    /// Consumes the result, yielding the next board if play continues.
    pub fn into_next_board(self) -> Option<Board> {
        match self {
            GameResult::Continuing(board) => Some(board),
            _ => None,
        }
    }

    pub fn winning_color(&self) -> Option<Color> {
        match self {
            GameResult::Victory(c) => Some(*c),
            _ => None,
        }
    }

    pub fn illegal_move(&self) -> Option<Move> {
        match self {
            GameResult::IllegalMove(mv) => Some(*mv),
            _ => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Continuing(board) => write!(f, "continuing, {} to move", board.turn()),
            GameResult::Victory(c) => write!(f, "{c} wins"),
            GameResult::IllegalMove(mv) => write!(f, "{mv} is an illegal move"),
            GameResult::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// A pawn move onto the last rank that names no piece promotes to a queen.
fn with_default_promotion(board: &Board, mv: Move) -> Move {
    let mover = board.turn();
    match mv {
        Move::Piece {
            from,
            to,
            promotion: None,
        } if to.rank() == mover.other().back_rank()
            && board.piece(from) == Some(Piece::new(mover, PieceKind::Pawn)) =>
        {
            Move::promote(from, to, PieceKind::Queen)
        }
        _ => mv,
    }
}

/// Plays `mv` for the side to move.
///
/// Resigning always ends the game in the opponent's favour. Any other move
/// must appear in [`legal_moves`], after a bare promotion is read as a queen
/// promotion; if it does not, the result is [`GameResult::IllegalMove`]
/// carrying `mv` as given and no new board is produced.
pub fn apply(board: &Board, mv: Move) -> GameResult {
    let mover = board.turn();
    if mv.is_resign() {
        return GameResult::Victory(mover.other());
    }
    let Some(next) = board.after(mv) else {
        return GameResult::IllegalMove(mv);
    };

    if has_legal_move(&next) {
        GameResult::Continuing(next)
    } else if next.is_in_check(next.turn()) {
        GameResult::Victory(mover)
    } else {
        GameResult::Stalemate
    }
}

/// The side to move is in check and has no way out.
pub fn is_checkmate(board: &Board) -> bool {
    board.is_in_check(board.turn()) && !has_legal_move(board)
}

/// The side to move is not in check but has no legal move.
pub fn is_stalemate(board: &Board) -> bool {
    !board.is_in_check(board.turn()) && !has_legal_move(board)
}

impl Board {
    /// The position after the legal move `mv`, whether or not it ends the
    /// game. `None` for illegal moves and for resigning.
    pub fn after(&self, mv: Move) -> Option<Board> {
        let mv = with_default_promotion(self, mv);
        if !legal_moves(self).contains(&mv) {
            return None;
        }
        Some(self.make_move(mv))
    }

    pub fn play_move(&self, mv: Move) -> GameResult {
        apply(self, mv)
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(self)
    }

    pub fn is_checkmate(&self) -> bool {
        is_checkmate(self)
    }

    pub fn is_stalemate(&self) -> bool {
        is_stalemate(self)
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
