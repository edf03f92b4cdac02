pub mod board;
pub mod config;
pub mod error;
pub mod eval;
pub mod perft;
pub mod search;
pub mod state;
pub mod time_control;
pub mod types;
pub mod zobrist;

// Re-export game and search plumbing shared by every engine
pub use board::Board;
pub use config::EngineConfig;
pub use error::{BoardError, ConfigError};
pub use eval::{EvalWeights, Evaluator, RunTally, count_runs};
pub use perft::perft;
pub use search::{DepthResult, SearchOutcome, iterative_deepening, search_root};
pub use state::{GameState, MoveGuard};
pub use time_control::*;
pub use types::*;
pub use zobrist::ZOBRIST;

use serde::Serialize;

// =============================================================================
// Engine trait: one decision per call, implemented by every search variant
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    /// Column to play (None only if the position has no legal move)
    pub best_move: Option<Column>,
    /// Score of `best_move` for the side that searched
    pub score: Score,
    /// Deepest fully completed iteration (None if none completed)
    pub depth: Option<u8>,
    /// Nodes visited across all iterations
    pub nodes: u64,
    /// Whether cancellation cut the search short
    pub stopped: bool,
}

impl SearchResult {
    /// Assembles a result from the driver's outcome.
    pub fn from_outcome(outcome: &SearchOutcome, nodes: u64) -> Self {
        Self {
            best_move: outcome.best_move(),
            score: outcome.score(),
            depth: outcome.completed.map(|r| r.depth),
            nodes,
            stopped: outcome.stopped,
        }
    }
}

/// A move-selection strategy.
///
/// Variants (alpha-beta, plain minimax) share the evaluator and the
/// iterative-deepening driver and differ only in how they search below the
/// root, so callers can swap them freely.
pub trait Engine<P: GameState>: Send {
    /// Chooses a column for the side to move in `pos`, honouring the depth,
    /// time, node budgets and stop flag in `limits`.
    fn search(&mut self, pos: &P, limits: SearchLimits) -> SearchResult;

    fn name(&self) -> &str;

    fn author(&self) -> &str {
        "connect-lab"
    }

    /// Drop per-game state such as hash tables.
    fn new_game(&mut self) {}

    /// Sets a named option. Returns true if the option was recognized and
    /// the value accepted.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
