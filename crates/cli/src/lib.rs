//! Shared plumbing for the `connect4` binary.

pub mod match_runner;

use std::path::Path;

use anyhow::{bail, Context, Result};

use alphabeta_engine::AlphaBetaEngine;
use connect_core::{Board, Engine, EngineConfig};
use minimax_engine::MinimaxEngine;

pub use match_runner::{GameOutcome, GameRecord, MatchResult, MatchRunner};

/// Engine names accepted on the command line.
pub const ENGINE_NAMES: &[&str] = &["alphabeta", "minimax"];

/// Builds the engine called `name`, configured from `config`.
pub fn create_engine(name: &str, config: &EngineConfig) -> Result<Box<dyn Engine<Board>>> {
    match name.to_ascii_lowercase().as_str() {
        "alphabeta" | "ab" => Ok(Box::new(AlphaBetaEngine::from_config(config))),
        "minimax" | "mm" => Ok(Box::new(MinimaxEngine::from_config(config))),
        other => bail!(
            "unknown engine `{other}` (expected one of: {})",
            ENGINE_NAMES.join(", ")
        ),
    }
}

/// Reads a position from a diagram file, or from a move string on a board of
/// the given size. With neither, the empty board.
pub fn load_position(
    moves: Option<&str>,
    diagram: Option<&Path>,
    width: usize,
    height: usize,
) -> Result<Board> {
    if let Some(path) = diagram {
        if moves.is_some() {
            bail!("give either a move string or a diagram file, not both");
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read diagram file: {}", path.display()))?;
        return Board::from_diagram(&text)
            .with_context(|| format!("Invalid diagram in {}", path.display()));
    }

    let mut board = Board::new(width, height).context("Invalid board size")?;
    if let Some(moves) = moves {
        board
            .play_moves(moves)
            .with_context(|| format!("Invalid move string `{moves}`"))?;
    }
    Ok(board)
}
