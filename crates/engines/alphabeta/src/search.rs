//! Depth-limited minimax with alpha-beta pruning over a `GameState`.

use connect_core::{Disc, Evaluator, GameState, MoveGuard, Score, SearchLimits, SCORE_INFINITE};

use crate::tt::{Probe, TranspositionTable};

/// One decision's worth of search state.
///
/// Scores are always from `root`'s point of view: `root` maximizes, the
/// opponent minimizes.
pub struct AlphaBeta<'a> {
    evaluator: &'a Evaluator,
    tt: Option<&'a mut TranspositionTable>,
    root: Disc,
    limits: &'a SearchLimits,
    nodes: u64,
}

impl<'a> AlphaBeta<'a> {
    pub fn new(
        evaluator: &'a Evaluator,
        tt: Option<&'a mut TranspositionTable>,
        root: Disc,
        limits: &'a SearchLimits,
    ) -> Self {
        Self {
            evaluator,
            tt,
            root,
            limits,
            nodes: 0,
        }
    }

    /// Nodes entered so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Scores the position searched with the full window, as the root driver
    /// does for every position after a root move.
    pub fn search_child<P: GameState>(&mut self, pos: &mut P, depth: u8) -> Score {
        self.search(pos, depth, false, -SCORE_INFINITE, SCORE_INFINITE)
    }

    /// Value of `pos` searched `depth` plies deep inside `(alpha, beta)`.
    ///
    /// Returns the static evaluation at depth 0, at finished games, and once
    /// cancellation has been requested. Results computed after cancellation
    /// are meaningless and never reach the table.
    pub fn search<P: GameState>(
        &mut self,
        pos: &mut P,
        depth: u8,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        self.nodes += 1;
        let stopped = self.limits.poll(self.nodes);
        if depth == 0 || pos.is_game_over() || stopped {
            return self.evaluator.evaluate(pos, self.root);
        }

        let key = pos.position_hash();
        if let Some(tt) = self.tt.as_deref_mut() {
            if let Probe::Hit(value) = tt.probe(key, depth, alpha, beta) {
                return value;
            }
        }

        let (alpha_in, beta_in) = (alpha, beta);
        let mut best = if maximizing {
            -SCORE_INFINITE
        } else {
            SCORE_INFINITE
        };
        let mut expanded = false;

        for col in 0..pos.width() {
            if !pos.can_play(col) {
                continue;
            }
            expanded = true;

            let score = {
                let mut child = MoveGuard::new(pos, col);
                self.search(&mut *child, depth - 1, !maximizing, alpha, beta)
            };

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha || self.limits.should_stop() {
                break;
            }
        }
        debug_assert!(expanded, "unfinished position without a legal move");

        if !self.limits.should_stop() {
            if let Some(tt) = self.tt.as_deref_mut() {
                tt.store(key, depth, best, alpha_in, beta_in);
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
