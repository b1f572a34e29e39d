//! Depth-bounded negamax with alpha-beta pruning.
//!
//! The root searches every candidate with a full window, so each root move's
//! value is exact and both objectives rank the same numbers. Below the root
//! the usual alpha-beta cutoffs apply.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    board::Board,
    error::SearchError,
    eval::evaluate,
    movegen::{legal_moves, legal_moves_into},
    moves::Move,
};

/// Score of a side that is checkmated at the root. Mates further away score
/// one less per ply, so shorter mates dominate.
pub const MATE_SCORE: i32 = 100_000;

const INFINITY: i32 = 1_000_000;

/// Which root move the search should pick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    /// Maximize the mover's own evaluation.
    #[default]
    Best,
    /// Minimize it. Replies are still searched as the opponent's best play.
    Worst,
}

/// Result of a completed search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The chosen move.
    pub mv: Move,
    /// Positions visited. Every position reached by a move counts once; the
    /// root counts only at depth 0, where it is the single leaf.
    pub evaluated: u64,
    /// Value of the chosen move in centipawns from the mover's point of view.
    pub score: i32,
}

/// Searches `depth` plies ahead and picks a root move for `objective`.
///
/// Ties go to the move generated first, so the outcome (including the node
/// count) is a pure function of the arguments.
///
/// # Errors
/// [`SearchError::NoLegalMoves`] when the game is already over for the side
/// to move.
pub fn search(board: &Board, depth: u8, objective: Objective) -> Result<SearchOutcome, SearchError> {
    let moves = legal_moves(board);
    let Some(&first) = moves.first() else {
        return Err(SearchError::NoLegalMoves);
    };

    if depth == 0 {
        return Ok(SearchOutcome {
            mv: first,
            evaluated: 1,
            score: evaluate(board),
        });
    }

    let mut nodes = 0u64;
    let mut chosen: Option<(Move, i32)> = None;

    for mv in moves {
        let child = board.make_move(mv);
        nodes += 1;
        let score = -negamax(&child, depth - 1, 1, -INFINITY, INFINITY, &mut nodes);

        let better = match (chosen, objective) {
            (None, _) => true,
            (Some((_, s)), Objective::Best) => score > s,
            (Some((_, s)), Objective::Worst) => score < s,
        };
        if better {
            chosen = Some((mv, score));
        }
    }

    let (mv, score) = chosen.unwrap_or((first, evaluate(board)));
    debug!(depth, ?objective, nodes, score, mv = %mv, "search finished");

    Ok(SearchOutcome {
        mv,
        evaluated: nodes,
        score,
    })
}

/// Recursive negamax search with alpha-beta pruning.
///
/// Returns the value of `board` for its side to move.
fn negamax(board: &Board, depth: u8, ply: u32, mut alpha: i32, beta: i32, nodes: &mut u64) -> i32 {
    let mut moves = Vec::with_capacity(64);
    legal_moves_into(board, &mut moves);

    if moves.is_empty() {
        if board.is_in_check(board.turn()) {
            return -(MATE_SCORE - ply as i32); // Checkmate
        }
        return 0; // Stalemate
    }

    if depth == 0 {
        return evaluate(board);
    }

    let mut best = -INFINITY;
    for mv in moves {
        let child = board.make_move(mv);
        *nodes += 1;

        let score = -negamax(&child, depth - 1, ply + 1, -beta, -alpha, nodes);

        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break; // Beta cutoff
        }
    }
    best
}

impl Board {
    /// Searches for the move that serves the side to move best.
    pub fn best_next_move(&self, depth: u8) -> Result<SearchOutcome, SearchError> {
        search(self, depth, Objective::Best)
    }

    /// Searches for the move that serves the side to move worst.
    pub fn worst_next_move(&self, depth: u8) -> Result<SearchOutcome, SearchError> {
        search(self, depth, Objective::Worst)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
