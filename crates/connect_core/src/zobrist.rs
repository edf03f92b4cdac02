//! Zobrist hashing for Connect-Four positions.
//!
//! A position's hash is the XOR of one random key per occupied cell, chosen by
//! the disc that occupies it. Dropping or lifting a disc toggles exactly one
//! key, so boards keep the hash up to date in O(1) per move.
//!
//! The keys are generated once per process and never re-rolled: entries a
//! transposition table stored during an earlier decision stay meaningful for
//! the next one.

use std::sync::LazyLock;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::state::GameState;
use crate::types::{Column, Disc, MAX_CELLS};

/// Fixed seed so hashes are reproducible across runs.
const ZOBRIST_SEED: u64 = 0x0C4F_0C4F_1234_5678;

/// Random keys for each disc on each cell.
///
/// The table covers the largest [`Board`](crate::Board). Other `GameState`
/// grids may be bigger; cells past the table get keys derived from the seed
/// and the cell index, so every grid hashes without bounds.
pub struct ZobristKeys {
    seed: u64,
    /// Indexed by `[disc][row * width + col]`
    discs: [[u64; MAX_CELLS]; 2],
}

impl ZobristKeys {
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut discs = [[0u64; MAX_CELLS]; 2];
        for side in discs.iter_mut() {
            for key in side.iter_mut() {
                *key = rng.next_u64();
            }
        }
        Self { seed, discs }
    }

    /// Key for `disc` on the cell with linear index `index`.
    #[inline(always)]
    pub fn disc_key(&self, disc: Disc, index: usize) -> u64 {
        match self.discs[disc.idx()].get(index) {
            Some(&key) => key,
            None => splitmix64(self.seed ^ splitmix64(((index as u64) << 1) | disc.idx() as u64)),
        }
    }

    /// Key for `disc` at `(col, row)` on a board `width` columns wide.
    #[inline(always)]
    pub fn cell_key(&self, disc: Disc, col: Column, row: usize, width: usize) -> u64 {
        self.disc_key(disc, row * width + col)
    }

    /// Full recomputation over every occupied cell.
    pub fn hash<P: GameState>(&self, pos: &P) -> u64 {
        let width = pos.width();
        let mut h = 0u64;
        for row in 0..pos.height() {
            for col in 0..width {
                if let Some(disc) = pos.cell(col, row) {
                    h ^= self.cell_key(disc, col, row, width);
                }
            }
        }
        h
    }
}

/// SplitMix64 finalizer.
fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Process-wide keys, generated on first use.
pub static ZOBRIST: LazyLock<ZobristKeys> = LazyLock::new(|| ZobristKeys::with_seed(ZOBRIST_SEED));

/// Generates the keys now rather than on the first hash.
///
/// Safe to call any number of times; only the first call does work.
pub fn init() {
    LazyLock::force(&ZOBRIST);
}

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
