//! Alpha-beta Connect-Four engine
//!
//! Iterative deepening over a depth-limited alpha-beta search, with a
//! transposition table per root-mover perspective and the shared
//! line-counting evaluator.

pub mod search;
pub mod tt;

use std::sync::Arc;

use tracing::debug;

use connect_core::{
    iterative_deepening, Disc, Engine, EngineConfig, Evaluator, GameState, SearchLimits,
    SearchResult, TieBreak,
};

pub use search::AlphaBeta;
pub use tt::{Probe, TTEntry, TTStats, TranspositionTable};

const DEFAULT_TT_MB: usize = 8;

/// Connect-Four engine using alpha-beta pruning.
///
/// Evaluation rewards the root mover's center control, so a position's value
/// depends on who was to move at the root. Each perspective gets its own
/// table and entries never mix.
pub struct AlphaBetaEngine {
    evaluator: Arc<Evaluator>,
    tables: [TranspositionTable; 2],
    use_tt: bool,
    tie_break: TieBreak,
    /// Node counter for statistics
    nodes: u64,
}

impl AlphaBetaEngine {
    pub fn new() -> Self {
        Self::with_evaluator(Arc::new(Evaluator::default()), DEFAULT_TT_MB)
    }

    /// Engine sharing `evaluator` with other engines.
    pub fn with_evaluator(evaluator: Arc<Evaluator>, tt_size_mb: usize) -> Self {
        Self {
            evaluator,
            tables: [
                TranspositionTable::new(tt_size_mb),
                TranspositionTable::new(tt_size_mb),
            ],
            use_tt: true,
            tie_break: TieBreak::default(),
            nodes: 0,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        let mut engine = Self::with_evaluator(
            Arc::new(Evaluator::new(config.eval)),
            config.tt_size_mb,
        );
        engine.use_tt = config.use_transposition_table;
        engine.tie_break = config.tie_break;
        engine
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_transposition_table(mut self, enabled: bool) -> Self {
        self.use_tt = enabled;
        self
    }

    pub fn evaluator(&self) -> &Arc<Evaluator> {
        &self.evaluator
    }

    /// Table used when `root` is the side to move at the root.
    pub fn table(&self, root: Disc) -> &TranspositionTable {
        &self.tables[root.idx()]
    }
}

impl Default for AlphaBetaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: GameState> Engine<P> for AlphaBetaEngine {
    fn search(&mut self, pos: &P, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        limits.start();

        let root = pos.side_to_move();
        let tt = if self.use_tt {
            Some(&mut self.tables[root.idx()])
        } else {
            None
        };
        let mut searcher = AlphaBeta::new(&self.evaluator, tt, root, &limits);
        let outcome = iterative_deepening(pos, &limits, self.tie_break, |child, depth| {
            searcher.search_child(child, depth)
        });
        self.nodes = searcher.nodes();

        let result = SearchResult::from_outcome(&outcome, self.nodes);
        debug!(
            best_move = ?result.best_move,
            score = result.score,
            depth = ?result.depth,
            nodes = result.nodes,
            stopped = result.stopped,
            "alpha-beta search finished"
        );
        result
    }

    fn name(&self) -> &str {
        "AlphaBeta v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
        for table in &mut self.tables {
            table.clear();
        }
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        match name.to_ascii_lowercase().as_str() {
            "hash" => match value.parse::<usize>() {
                Ok(mb) if mb > 0 => {
                    self.tables = [TranspositionTable::new(mb), TranspositionTable::new(mb)];
                    true
                }
                _ => false,
            },
            "usett" => match value.parse::<bool>() {
                Ok(enabled) => {
                    self.use_tt = enabled;
                    true
                }
                Err(_) => false,
            },
            "tiebreak" => match value.parse::<TieBreak>() {
                Ok(rule) => {
                    self.tie_break = rule;
                    true
                }
                Err(_) => false,
            },
            _ => false,
        }
    }
}
