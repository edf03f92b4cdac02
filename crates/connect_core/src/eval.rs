//! Line-counting position evaluation.
//!
//! Non-terminal positions are scored from a fixed root mover's point of view
//! by counting runs of two and three discs along every row, column and
//! diagonal, plus a bonus for holding the bottom of the central columns.

use serde::{Deserialize, Serialize};

use crate::state::GameState;
use crate::types::{DRAW_SCORE, Disc, MAX_CELLS, Score, WIN_SCORE};

/// Row, column, rising diagonal, falling diagonal.
const SCAN_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Most runs one side can hold on the largest board. Runs on a line are
/// at least two cells long and separated, so each direction has at most
/// `MAX_CELLS / 2`.
pub const MAX_RUNS: i64 = (SCAN_DIRECTIONS.len() * MAX_CELLS / 2) as i64;

/// Largest magnitude a heuristic score may take.
pub const MAX_HEURISTIC: Score = WIN_SCORE - 1;

/// Heuristic weights. Terminal scores are fixed at `WIN_SCORE` and are not
/// configurable. Config validation keeps [`EvalWeights::heuristic_bound`]
/// below it, and `evaluate` clamps whatever is left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    pub three_run: Score,
    pub two_run: Score,
    /// Root mover owns the bottom cell of the center column.
    pub center_bonus: Score,
    /// Root mover owns the bottom cell next to the center column.
    pub adjacent_bonus: Score,
}

impl EvalWeights {
    /// Upper bound on `|evaluate|` for a non-terminal position of at most
    /// 16x16 cells, or `None` if a weight is negative.
    pub fn heuristic_bound(&self) -> Option<i64> {
        let weights = [self.three_run, self.two_run, self.center_bonus, self.adjacent_bonus];
        if weights.iter().any(|&w| w < 0) {
            return None;
        }
        let per_run = i64::from(self.three_run.max(self.two_run));
        let bonus = i64::from(self.center_bonus.max(self.adjacent_bonus));
        Some(per_run * MAX_RUNS + bonus)
    }
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            three_run: 10,
            two_run: 1,
            center_bonus: 1000,
            adjacent_bonus: 500,
        }
    }
}

/// Runs counted for each side, indexed by `Disc::idx()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunTally {
    pub twos: [i32; 2],
    pub threes: [i32; 2],
}

impl RunTally {
    pub fn twos(&self, disc: Disc) -> i32 {
        self.twos[disc.idx()]
    }

    pub fn threes(&self, disc: Disc) -> i32 {
        self.threes[disc.idx()]
    }
}

/// Shared by every search variant so the heuristic lives in one place.
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    weights: EvalWeights,
}

impl Evaluator {
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    /// Scores `pos` for `root`.
    ///
    /// Finished games score `WIN_SCORE`, `-WIN_SCORE` or `DRAW_SCORE`;
    /// anything else gets the run-count heuristic.
    pub fn evaluate<P: GameState>(&self, pos: &P, root: Disc) -> Score {
        if pos.is_game_over() {
            return match pos.winner() {
                Some(w) if w == root => WIN_SCORE,
                Some(_) => -WIN_SCORE,
                None => DRAW_SCORE,
            };
        }

        let tally = count_runs(pos);
        let opp = root.other();
        let w = &self.weights;
        let weighted = |weight: Score, count: i32| i64::from(weight) * i64::from(count);
        let score = weighted(w.three_run, tally.threes(root) - tally.threes(opp))
            + weighted(w.two_run, tally.twos(root) - tally.twos(opp))
            + i64::from(self.center_bonus(pos, root));
        // A heuristic never reaches a proven result
        score.clamp(-i64::from(MAX_HEURISTIC), i64::from(MAX_HEURISTIC)) as Score
    }

    /// Bonus for the root mover's disc at the bottom of the center column,
    /// or failing that of the column right, then left, of center.
    pub fn center_bonus<P: GameState>(&self, pos: &P, root: Disc) -> Score {
        let width = pos.width();
        let center = width / 2;
        let owns = |col: usize| col < width && pos.cell(col, 0) == Some(root);

        if owns(center) {
            self.weights.center_bonus
        } else if owns(center + 1) || (center > 0 && owns(center - 1)) {
            self.weights.adjacent_bonus
        } else {
            0
        }
    }
}

/// Counts two- and three-runs for both sides over all four orientations.
///
/// A run is credited as a two-run when it reaches length two; growing to
/// three swaps that credit for a three-run. Longer runs change nothing.
pub fn count_runs<P: GameState>(pos: &P) -> RunTally {
    let (width, height) = (pos.width() as isize, pos.height() as isize);
    let in_bounds = |col: isize, row: isize| col >= 0 && row >= 0 && col < width && row < height;

    let mut tally = RunTally::default();
    for &(dc, dr) in &SCAN_DIRECTIONS {
        for row in 0..height {
            for col in 0..width {
                // Each line is walked once, from the cell whose predecessor
                // falls off the grid.
                if in_bounds(col - dc, row - dr) {
                    continue;
                }
                let (mut c, mut r) = (col, row);
                let mut runs = [0u32; 2];
                while in_bounds(c, r) {
                    match pos.cell(c as usize, r as usize) {
                        None => runs = [0, 0],
                        Some(disc) => {
                            let side = disc.idx();
                            runs[disc.other().idx()] = 0;
                            runs[side] += 1;
                            match runs[side] {
                                2 => tally.twos[side] += 1,
                                3 => {
                                    tally.twos[side] -= 1;
                                    tally.threes[side] += 1;
                                }
                                _ => {}
                            }
                        }
                    }
                    c += dc;
                    r += dr;
                }
            }
        }
    }
    tally
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
