//! Forsyth-Edwards Notation for setting up and printing positions.

use crate::board::{Board, CastlingRights};
use crate::error::FenError;
use crate::types::*;

impl Board {
    /// Parses a FEN string. The two move-counter fields are optional and
    /// default to `0 1`.
    pub fn from_fen(fen: &str) -> Result<Board, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::MissingFields { found: parts.len() });
        }

        let board_part = parts[0];
        let stm_part = parts[1];
        let castle_part = parts[2];
        let ep_part = parts[3];
        let halfmove_part = parts.get(4).copied().unwrap_or("0");
        let fullmove_part = parts.get(5).copied().unwrap_or("1");

        let mut board = Board::empty();

        let ranks: Vec<&str> = board_part.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount { found: ranks.len() });
        }

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file: i8 = 0;
            let rank: i8 = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let pc = Piece::from_symbol(ch).ok_or(FenError::PieceChar(ch))?;
                    let sq = Square::new(file, rank).ok_or(FenError::RankWidth { rank: 8 - rank_idx })?;
                    board.squares[sq.index()] = Some(pc);
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::RankWidth { rank: 8 - rank_idx });
                }
            }
            if file != 8 {
                return Err(FenError::RankWidth { rank: 8 - rank_idx });
            }
        }

        board.turn = match stm_part {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(FenError::SideToMove(stm_part.to_string())),
        };

        let mut castling = CastlingRights::NONE;
        if castle_part != "-" {
            for c in castle_part.chars() {
                match c {
                    'K' => castling.wk = true,
                    'Q' => castling.wq = true,
                    'k' => castling.bk = true,
                    'q' => castling.bq = true,
                    _ => return Err(FenError::Castling(castle_part.to_string())),
                }
            }
        }
        board.castling = castling;

        board.en_passant = if ep_part == "-" {
            None
        } else {
            Some(Square::parse(ep_part).ok_or_else(|| FenError::EnPassant(ep_part.to_string()))?)
        };

        board.halfmove_clock = halfmove_part
            .parse()
            .map_err(|_| FenError::Counter(halfmove_part.to_string()))?;
        board.fullmove_number = fullmove_part
            .parse()
            .map_err(|_| FenError::Counter(fullmove_part.to_string()))?;

        Ok(board)
    }

    pub fn to_fen(&self) -> String {
        let mut out = String::new();
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                match Square::new(file, rank).and_then(|s| self.piece(s)) {
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(pc.symbol());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(match self.turn {
            Color::White => 'w',
            Color::Black => 'b',
        });

        out.push(' ');
        let c = self.castling;
        if c == CastlingRights::NONE {
            out.push('-');
        } else {
            for (on, ch) in [(c.wk, 'K'), (c.wq, 'Q'), (c.bk, 'k'), (c.bq, 'q')] {
                if on {
                    out.push(ch);
                }
            }
        }

        out.push(' ');
        match self.en_passant {
            Some(sq) => out.push_str(&sq.to_string()),
            None => out.push('-'),
        }

        out.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        out
    }
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
