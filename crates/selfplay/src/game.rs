//! One engine-vs-engine game driven through the background search worker.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use search_worker::{SearchCoordinator, SearchRequest};
use serde::{Deserialize, Serialize};
use silverpoint_core::{Board, Color, GameResult, Move, Objective};
use tracing::info;

use crate::config::SelfplayConfig;

const RATING_BAR_LEN: usize = 32;

/// How a recorded game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum RecordedResult {
    Victory { winner: Color },
    Stalemate,
    /// The ply limit was reached first
    Unfinished,
}

/// Everything worth keeping about a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub depth: u8,
    pub white: Objective,
    pub black: Objective,
    /// Moves in play order, in coordinate notation
    pub moves: Vec<String>,
    pub result: RecordedResult,
    pub final_fen: String,
}

impl GameRecord {
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize game record")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write game record {}", path.display()))
    }
}

/// Says in words what `mv` does on `board`.
pub fn describe_move(board: &Board, mv: Move) -> String {
    match mv {
        Move::Piece { from, to, .. } => match (board.piece(from), board.piece(to)) {
            (Some(piece), Some(taken)) => {
                format!("take {}({to}) with {}({from})", taken.name(), piece.name())
            }
            (Some(piece), None) => format!("move {}({from}) to {to}", piece.name()),
            _ => format!("move {from} to {to}"),
        },
        Move::KingsideCastle => "castle kingside".to_string(),
        Move::QueensideCastle => "castle queenside".to_string(),
        Move::Resign => "resign".to_string(),
    }
}

fn objective_word(objective: Objective) -> &'static str {
    match objective {
        Objective::Best => "best",
        Objective::Worst => "worst",
    }
}

/// Plays from the initial position until the game ends or the ply limit is
/// reached, printing the board after every move.
pub async fn play(config: &SelfplayConfig, coordinator: &mut SearchCoordinator) -> Result<GameRecord> {
    play_from(Board::initial(), config, coordinator).await
}

/// Same as [`play`] but starting from `start`.
pub async fn play_from(
    start: Board,
    config: &SelfplayConfig,
    coordinator: &mut SearchCoordinator,
) -> Result<GameRecord> {
    let progress = Duration::from_millis(config.progress_interval_ms);
    let mut board = start;
    let mut moves: Vec<Move> = Vec::new();
    let mut result = RecordedResult::Unfinished;

    println!("{board}");

    for ply in 0..config.max_plies {
        let objective = match board.turn() {
            Color::White => config.white,
            Color::Black => config.black,
        };
        println!("Waiting for CPU to choose {} move...", objective_word(objective));

        coordinator.submit(SearchRequest::new(board, config.depth, objective))?;
        let response = coordinator
            .recv_with_progress(progress, || {
                print!(".");
                let _ = std::io::stdout().flush();
            })
            .await?;
        println!();

        let outcome = response
            .result
            .with_context(|| format!("search failed at ply {ply}"))?;
        println!(
            "CPU evaluated {} moves before choosing to {}",
            outcome.evaluated,
            describe_move(&board, outcome.mv)
        );
        info!(ply, mv = %outcome.mv, score = outcome.score, nodes = outcome.evaluated, "move chosen");

        match board.play_move(outcome.mv) {
            GameResult::Continuing(next) => {
                board = next;
                moves.push(outcome.mv);
                println!("{board}");
                println!("{}", board.rating_bar(RATING_BAR_LEN));
            }
            GameResult::Victory(winner) => {
                // Resigning leaves the board as it was
                if let Some(last) = board.after(outcome.mv) {
                    board = last;
                }
                moves.push(outcome.mv);
                println!("{board}");
                println!("{winner} wins.");
                result = RecordedResult::Victory { winner };
                break;
            }
            GameResult::Stalemate => {
                if let Some(last) = board.after(outcome.mv) {
                    board = last;
                }
                moves.push(outcome.mv);
                println!("Drawn game.");
                result = RecordedResult::Stalemate;
                break;
            }
            GameResult::IllegalMove(mv) => bail!("engine chose {mv}, an illegal move"),
        }
    }

    if result == RecordedResult::Unfinished {
        println!("Stopped after {} plies.", config.max_plies);
    }
    print_history(&moves);

    Ok(GameRecord {
        depth: config.depth,
        white: config.white,
        black: config.black,
        moves: moves.iter().map(Move::to_string).collect(),
        result,
        final_fen: board.to_fen(),
    })
}

/// Prints the moves two per line, White's then Black's.
fn print_history(moves: &[Move]) {
    for (i, pair) in moves.chunks(2).enumerate() {
        match pair {
            [white, black] => println!("{:>3}. {white} {black}", i + 1),
            [white] => println!("{:>3}. {white}", i + 1),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
