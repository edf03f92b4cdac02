//! Iterative-deepening root driver.
//!
//! Engines differ only in how they score the position after a root move; the
//! root loop, the tie-break rule, cancellation handling and the fallback move
//! live here so every variant commits to a move the same way.

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::state::{GameState, MoveGuard};
use crate::time_control::SearchLimits;
use crate::types::{Column, Score, TieBreak};

/// Best root move of one fully searched depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DepthResult {
    pub depth: u8,
    pub column: Column,
    pub score: Score,
}

/// What the driver settled on.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Result of the deepest completed iteration
    pub completed: Option<DepthResult>,
    /// Leftmost legal column, used when no iteration completed
    pub fallback: Option<Column>,
    /// True if cancellation cut an iteration short
    pub stopped: bool,
}

impl SearchOutcome {
    /// The column to play: the last completed depth's choice, else the
    /// fallback. `None` only when the root has no legal move.
    pub fn best_move(&self) -> Option<Column> {
        self.completed.map(|r| r.column).or(self.fallback)
    }

    pub fn score(&self) -> Score {
        self.completed.map_or(0, |r| r.score)
    }
}

/// Runs depths `0, 1, ..., limits.depth` until cancelled.
///
/// `search_child` receives the position after a root move (opponent to
/// move) and the remaining depth, and returns its score for the root mover.
/// An iteration interrupted by cancellation is discarded.
pub fn iterative_deepening<P, F>(
    pos: &P,
    limits: &SearchLimits,
    tie_break: TieBreak,
    mut search_child: F,
) -> SearchOutcome
where
    P: GameState,
    F: FnMut(&mut P, u8) -> Score,
{
    let mut work = pos.clone();
    let fallback = work.first_legal();
    let mut outcome = SearchOutcome {
        completed: None,
        fallback,
        stopped: false,
    };
    if fallback.is_none() {
        return outcome;
    }

    let empty_cells = work.width() * work.height() - work.moves_played();

    for depth in 0..=limits.depth {
        if limits.should_stop() {
            outcome.stopped = true;
            break;
        }

        match search_root(&mut work, depth, tie_break, limits, &mut search_child) {
            Some((column, score)) => {
                debug!(depth, column, score, "depth completed");
                outcome.completed = Some(DepthResult {
                    depth,
                    column,
                    score,
                });
            }
            None => {
                debug!(depth, "depth abandoned");
                outcome.stopped = true;
                break;
            }
        }

        // This iteration already reached the end of every line of play.
        if usize::from(depth) + 1 >= empty_cells {
            break;
        }
    }

    if outcome.completed.is_none() {
        warn!(
            column = ?outcome.fallback,
            "no depth completed, falling back to the leftmost legal column"
        );
    }
    outcome
}

/// Searches every legal root move at a single `depth`.
///
/// Returns the best `(column, score)` under `tie_break`, or `None` if the
/// search was cancelled before all root moves finished (or there are none).
pub fn search_root<P, F>(
    pos: &mut P,
    depth: u8,
    tie_break: TieBreak,
    limits: &SearchLimits,
    search_child: &mut F,
) -> Option<(Column, Score)>
where
    P: GameState,
    F: FnMut(&mut P, u8) -> Score,
{
    let mut best: Option<(Column, Score)> = None;

    for col in 0..pos.width() {
        if limits.check() {
            return None;
        }
        if !pos.can_play(col) {
            continue;
        }

        let score = {
            let mut child = MoveGuard::new(pos, col);
            search_child(&mut *child, depth)
        };
        if limits.should_stop() {
            return None;
        }
        trace!(depth, col, score, "root move");

        best = match best {
            Some((_, incumbent)) if !tie_break.prefers(score, incumbent) => best,
            _ => Some((col, score)),
        };
    }

    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
