pub mod board;
pub mod error;
pub mod eval;
pub mod fen;
pub mod movegen;
pub mod moves;
pub mod perft;
pub mod rules;
pub mod search;
pub mod types;

// Re-export the game model and the engine entry points
pub use board::*;
pub use error::*;
pub use eval::{evaluate, evaluate_for, rating_bar};
pub use movegen::*;
pub use moves::Move;
pub use perft::perft;
pub use rules::*;
pub use search::{MATE_SCORE, Objective, SearchOutcome, search};
pub use types::*;

// =============================================================================
// Engine trait: callers that want a move go through this
// =============================================================================

/// Something that can choose a move for the side to move.
///
/// The background worker is generic over this so callers (and tests) can
/// swap in other move choosers.
pub trait Engine: Send {
    /// Choose a move for the side to move of `board`.
    ///
    /// # Arguments
    /// * `board` - Position to analyze
    /// * `depth` - Look-ahead in plies
    /// * `objective` - Whether to pick the best or the worst move
    fn choose(
        &mut self,
        board: &Board,
        depth: u8,
        objective: Objective,
    ) -> Result<SearchOutcome, SearchError>;

    /// Returns the engine's name for logs
    fn name(&self) -> &str;
}

/// The built-in negamax engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxEngine;

impl Engine for MinimaxEngine {
    fn choose(
        &mut self,
        board: &Board,
        depth: u8,
        objective: Objective,
    ) -> Result<SearchOutcome, SearchError> {
        search(board, depth, objective)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
