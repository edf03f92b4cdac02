//! Minimax Connect-Four engine
//!
//! Same evaluator and root driver as the alpha-beta engine, searched without
//! pruning. Slow, but its answers are the reference the pruned search must
//! reproduce.

pub mod search;

use std::sync::Arc;

use tracing::debug;

use connect_core::{
    iterative_deepening, Engine, EngineConfig, Evaluator, GameState, SearchLimits, SearchResult,
    TieBreak,
};

pub use search::Minimax;

#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    evaluator: Arc<Evaluator>,
    tie_break: TieBreak,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_evaluator(evaluator: Arc<Evaluator>) -> Self {
        Self {
            evaluator,
            ..Self::default()
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::with_evaluator(Arc::new(Evaluator::new(config.eval))).with_tie_break(config.tie_break)
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}

impl<P: GameState> Engine<P> for MinimaxEngine {
    fn search(&mut self, pos: &P, limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        limits.start();

        let mut searcher = Minimax::new(&self.evaluator, pos.side_to_move(), &limits);
        let outcome = iterative_deepening(pos, &limits, self.tie_break, |child, depth| {
            searcher.search(child, depth, false)
        });
        self.nodes = searcher.nodes();

        debug!(
            best_move = ?outcome.best_move(),
            nodes = self.nodes,
            stopped = outcome.stopped,
            "minimax search finished"
        );
        SearchResult::from_outcome(&outcome, self.nodes)
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        if !name.eq_ignore_ascii_case("tiebreak") {
            return false;
        }
        match value.parse::<TieBreak>() {
            Ok(rule) => {
                self.tie_break = rule;
                true
            }
            Err(_) => false,
        }
    }
}
