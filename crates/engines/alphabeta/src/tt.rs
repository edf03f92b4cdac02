//! Transposition table for alpha-beta results.
//!
//! Each slot keeps the full Zobrist key of the position it describes together
//! with a lower and an upper bound on its value at a given remaining depth.
//! Exact results store the same value in both bounds.

use connect_core::{Score, SCORE_INFINITE};

/// Outcome of a table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// The stored bound already decides the node for this window.
    Hit(Score),
    Miss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTEntry {
    pub key: u64,
    /// Remaining depth the bounds were computed at
    pub depth: u8,
    pub lower: Score,
    pub upper: Score,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TTStats {
    pub slots: usize,
    pub used: usize,
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
}

impl TTStats {
    pub fn hit_rate(&self) -> f64 {
        if self.probes == 0 {
            0.0
        } else {
            self.hits as f64 / self.probes as f64
        }
    }
}

/// Direct-mapped table with a power-of-two number of slots.
pub struct TranspositionTable {
    entries: Vec<Option<TTEntry>>,
    mask: usize,
    probes: u64,
    hits: u64,
    stores: u64,
}

impl TranspositionTable {
    /// Smallest table `new` will build, whatever the requested size.
    pub const MIN_SLOTS: usize = 1024;

    /// Table using roughly `size_mb` megabytes.
    pub fn new(size_mb: usize) -> Self {
        let entry_size = std::mem::size_of::<Option<TTEntry>>();
        let wanted = (size_mb * 1024 * 1024) / entry_size;
        // Round down so the table never exceeds the budget
        let slots = if wanted.is_power_of_two() {
            wanted
        } else {
            wanted.next_power_of_two() >> 1
        };
        Self::with_slots(slots.max(Self::MIN_SLOTS))
    }

    /// Table with exactly `slots` slots, rounded up to a power of two.
    pub fn with_slots(slots: usize) -> Self {
        let slots = slots.max(1).next_power_of_two();
        Self {
            entries: vec![None; slots],
            mask: slots - 1,
            probes: 0,
            hits: 0,
            stores: 0,
        }
    }

    #[inline]
    fn index(&self, key: u64) -> usize {
        (key as usize) & self.mask
    }

    /// Looks `key` up for a search of `depth` plies in window `(alpha, beta)`.
    ///
    /// Only a lower bound at or above `beta` or an upper bound at or below
    /// `alpha` counts as a hit, and only if it was computed at least `depth`
    /// plies deep. A slot holding a different key is a miss.
    pub fn probe(&mut self, key: u64, depth: u8, alpha: Score, beta: Score) -> Probe {
        self.probes += 1;
        let Some(entry) = self.entries[self.index(key)] else {
            return Probe::Miss;
        };
        if entry.key != key || entry.depth < depth {
            return Probe::Miss;
        }

        let probe = if entry.lower >= beta {
            Probe::Hit(entry.lower)
        } else if entry.upper <= alpha {
            Probe::Hit(entry.upper)
        } else {
            Probe::Miss
        };
        if probe != Probe::Miss {
            self.hits += 1;
        }
        probe
    }

    /// Records `value`, searched `depth` plies deep with the window
    /// `(alpha, beta)` the node was entered with.
    ///
    /// A fail-low result becomes an upper bound and a fail-high result a
    /// lower bound. Results for a key already stored at the same depth
    /// tighten the existing bounds; a deeper entry for the same key is kept.
    pub fn store(&mut self, key: u64, depth: u8, value: Score, alpha: Score, beta: Score) {
        let (lower, upper) = if value <= alpha {
            (-SCORE_INFINITE, value)
        } else if value >= beta {
            (value, SCORE_INFINITE)
        } else {
            (value, value)
        };

        let fresh = TTEntry {
            key,
            depth,
            lower,
            upper,
        };
        let idx = self.index(key);
        let slot = &mut self.entries[idx];
        match slot.as_mut().filter(|e| e.key == key) {
            Some(entry) if entry.depth == depth => {
                entry.lower = entry.lower.max(lower);
                entry.upper = entry.upper.min(upper);
            }
            Some(entry) if entry.depth > depth => return,
            _ => *slot = Some(fresh),
        }
        self.stores += 1;
    }

    /// Raw slot contents for `key`, if that slot currently holds it.
    pub fn get(&self, key: u64) -> Option<TTEntry> {
        self.entries[self.index(key)].filter(|e| e.key == key)
    }

    pub fn clear(&mut self) {
        self.entries.fill(None);
        self.probes = 0;
        self.hits = 0;
        self.stores = 0;
    }

    pub fn slots(&self) -> usize {
        self.entries.len()
    }

    pub fn stats(&self) -> TTStats {
        TTStats {
            slots: self.entries.len(),
            used: self.entries.iter().filter(|e| e.is_some()).count(),
            probes: self.probes,
            hits: self.hits,
            stores: self.stores,
        }
    }
}

#[cfg(test)]
#[path = "tt_tests.rs"]
mod tt_tests;
