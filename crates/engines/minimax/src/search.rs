//! Exhaustive depth-limited minimax

use connect_core::{Disc, Evaluator, GameState, MoveGuard, Score, SearchLimits, SCORE_INFINITE};

/// Visits every node to the requested depth; no pruning, no table.
pub struct Minimax<'a> {
    evaluator: &'a Evaluator,
    root: Disc,
    limits: &'a SearchLimits,
    nodes: u64,
}

impl<'a> Minimax<'a> {
    pub fn new(evaluator: &'a Evaluator, root: Disc, limits: &'a SearchLimits) -> Self {
        Self {
            evaluator,
            root,
            limits,
            nodes: 0,
        }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn search<P: GameState>(&mut self, pos: &mut P, depth: u8, maximizing: bool) -> Score {
        self.nodes += 1;
        let stopped = self.limits.poll(self.nodes);
        if depth == 0 || pos.is_game_over() || stopped {
            return self.evaluator.evaluate(pos, self.root);
        }

        let mut best = if maximizing {
            -SCORE_INFINITE
        } else {
            SCORE_INFINITE
        };
        for col in 0..pos.width() {
            if !pos.can_play(col) {
                continue;
            }
            let score = {
                let mut child = MoveGuard::new(pos, col);
                self.search(&mut *child, depth - 1, !maximizing)
            };
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
            if self.limits.should_stop() {
                break;
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
