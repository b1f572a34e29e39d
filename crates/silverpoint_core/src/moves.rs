//! The move value type and its text notation.
//!
//! Parsing is purely syntactic. Whether a move can actually be played is
//! decided by [`rules::apply`](crate::rules::apply).

use std::fmt;

use crate::error::{InvalidAccessError, ParseError};
use crate::types::{PieceKind, Square};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// A piece travelling between two squares. Captures, en passant and
    /// promotions are all piece moves; `promotion` is set only for pawns
    /// reaching the last rank.
    Piece {
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    },
    KingsideCastle,
    QueensideCastle,
    Resign,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Move::Piece {
            from,
            to,
            promotion: None,
        }
    }

    pub fn promote(from: Square, to: Square, kind: PieceKind) -> Self {
        Move::Piece {
            from,
            to,
            promotion: Some(kind),
        }
    }

    pub fn is_piece_move(&self) -> bool {
        matches!(self, Move::Piece { .. })
    }
    pub fn is_kingside_castle(&self) -> bool {
        matches!(self, Move::KingsideCastle)
    }
    pub fn is_queenside_castle(&self) -> bool {
        matches!(self, Move::QueensideCastle)
    }
    pub fn is_resign(&self) -> bool {
        matches!(self, Move::Resign)
    }

    /// Source and destination of a piece move.
    pub fn piece_positions(&self) -> Result<(Square, Square), InvalidAccessError> {
        match *self {
            Move::Piece { from, to, .. } => Ok((from, to)),
            _ => Err(InvalidAccessError { mv: *self }),
        }
    }

    pub fn promotion(&self) -> Option<PieceKind> {
        match *self {
            Move::Piece { promotion, .. } => promotion,
            _ => None,
        }
    }

    /// Parses move text.
    ///
    /// Accepted forms, ignoring case and surrounding whitespace:
    /// - `e2e4`, `e2 e4`, `e2-e4`, `e2xe4`, `e2 to e4`
    /// - a promotion suffix `q`, `r`, `b` or `n`, optionally written `=q`
    /// - `O-O` / `0-0`, `O-O-O` / `0-0-0`
    /// - `resign`
    pub fn parse(text: &str) -> Result<Move, ParseError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ParseError::new("empty input", text));
        }
        if !trimmed.is_ascii() {
            return Err(ParseError::new("unexpected non-ASCII characters", text));
        }

        let lower = trimmed.to_ascii_lowercase();
        match lower.as_str() {
            "o-o" | "0-0" => Ok(Move::KingsideCastle),
            "o-o-o" | "0-0-0" => Ok(Move::QueensideCastle),
            "resign" => Ok(Move::Resign),
            _ => parse_piece_move(&lower, text),
        }
    }
}

fn parse_piece_move(lower: &str, raw: &str) -> Result<Move, ParseError> {
    let tokens: Vec<&str> = lower.split_whitespace().collect();
    let compact = match tokens.as_slice() {
        [one] => (*one).to_string(),
        [from, to] => format!("{from}{to}"),
        [from, "to" | "-" | "x", to] => format!("{from}{to}"),
        _ => return Err(ParseError::new("expected a source and a destination square", raw)),
    };

    if compact.len() < 4 {
        return Err(ParseError::new("too short for a coordinate move", raw));
    }

    let from = Square::parse(&compact[..2])
        .ok_or_else(|| ParseError::new(format!("invalid square {:?}", &compact[..2]), raw))?;

    let rest = &compact[2..];
    let rest = rest.strip_prefix(['-', 'x']).unwrap_or(rest);
    if rest.len() < 2 {
        return Err(ParseError::new("missing destination square", raw));
    }
    let to = Square::parse(&rest[..2])
        .ok_or_else(|| ParseError::new(format!("invalid square {:?}", &rest[..2]), raw))?;

    let suffix = &rest[2..];
    let suffix = suffix.strip_prefix('=').unwrap_or(suffix);
    let promotion = match suffix {
        "" => None,
        "q" => Some(PieceKind::Queen),
        "r" => Some(PieceKind::Rook),
        "b" => Some(PieceKind::Bishop),
        "n" => Some(PieceKind::Knight),
        other => {
            return Err(ParseError::new(
                format!("invalid promotion suffix {other:?}"),
                raw,
            ));
        }
    };

    if from == to {
        return Err(ParseError::new("source and destination are the same square", raw));
    }

    Ok(Move::Piece {
        from,
        to,
        promotion,
    })
}

impl std::str::FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::parse(s)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Piece {
                from,
                to,
                promotion,
            } => {
                write!(f, "{from}{to}")?;
                if let Some(kind) = promotion {
                    write!(f, "{}", kind.letter())?;
                }
                Ok(())
            }
            Move::KingsideCastle => write!(f, "O-O"),
            Move::QueensideCastle => write!(f, "O-O-O"),
            Move::Resign => write!(f, "resign"),
        }
    }
}

#[cfg(test)]
#[path = "moves_tests.rs"]
mod moves_tests;
