//! Error types for the core engine.
//!
//! An illegal move is not an error: it comes back as
//! [`GameResult::IllegalMove`](crate::GameResult::IllegalMove).

use thiserror::Error;

use crate::moves::Move;

/// Malformed move text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("could not parse move {raw_text:?}: {reason}")]
pub struct ParseError {
    pub reason: String,
    pub raw_text: String,
}

impl ParseError {
    pub(crate) fn new(reason: impl Into<String>, raw_text: &str) -> Self {
        Self {
            reason: reason.into(),
            raw_text: raw_text.to_string(),
        }
    }
}

/// Piece-move data requested from a move that is not a piece move.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{mv} is not a piece move")]
pub struct InvalidAccessError {
    pub mv: Move,
}

/// Errors while reading a FEN string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected at least 4 fields, found {found}")]
    MissingFields { found: usize },

    #[error("expected 8 ranks, found {found}")]
    RankCount { found: usize },

    #[error("rank {rank} does not describe exactly 8 files")]
    RankWidth { rank: usize },

    #[error("invalid piece character {0:?}")]
    PieceChar(char),

    #[error("invalid side to move {0:?}")]
    SideToMove(String),

    #[error("invalid castling field {0:?}")]
    Castling(String),

    #[error("invalid en-passant square {0:?}")]
    EnPassant(String),

    #[error("invalid move counter {0:?}")]
    Counter(String),
}

/// Search invoked on input it cannot handle.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The side to move has no legal moves; the game is already over.
    #[error("no legal moves for the side to move")]
    NoLegalMoves,
}
