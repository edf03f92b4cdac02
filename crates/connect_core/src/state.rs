//! The position contract consumed by the search.
//!
//! Engines never look inside a concrete board. They read cells, test and
//! play columns, and undo through this trait, so any grid that honours it can
//! be searched. [`Board`](crate::Board) is the reference implementation.

use std::ops::{Deref, DerefMut};

use crate::types::{Column, Disc};
use crate::zobrist::ZOBRIST;

pub trait GameState: Clone {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Occupant of `(col, row)`; row 0 is the bottom. Callers stay in range.
    fn cell(&self, col: Column, row: usize) -> Option<Disc>;

    fn can_play(&self, col: Column) -> bool;

    /// Drops a disc for the side to move. Only called when `can_play(col)`.
    fn play(&mut self, col: Column);

    /// Takes back the most recent `play`.
    fn undo(&mut self);

    fn is_game_over(&self) -> bool;

    fn winner(&self) -> Option<Disc>;

    /// Total discs on the board; its parity gives the side to move.
    fn moves_played(&self) -> usize;

    fn side_to_move(&self) -> Disc {
        Disc::to_move(self.moves_played())
    }

    /// Zobrist hash of the current contents.
    ///
    /// The provided version recomputes from scratch; implementations that
    /// track the hash incrementally should override it. Any grid size is
    /// accepted, including ones larger than [`Board`](crate::Board) allows.
    fn position_hash(&self) -> u64 {
        ZOBRIST.hash(self)
    }

    /// Leftmost playable column, if any.
    fn first_legal(&self) -> Option<Column> {
        (0..self.width()).find(|&col| self.can_play(col))
    }

    fn legal_moves(&self) -> Vec<Column> {
        (0..self.width()).filter(|&col| self.can_play(col)).collect()
    }
}

/// A move applied in place for the lifetime of the guard.
///
/// The move is undone when the guard drops, so every exit from a search
/// loop (normal return, cutoff `break`, cancellation) restores the parent.
pub struct MoveGuard<'a, P: GameState> {
    pos: &'a mut P,
}

impl<'a, P: GameState> MoveGuard<'a, P> {
    pub fn new(pos: &'a mut P, col: Column) -> Self {
        pos.play(col);
        Self { pos }
    }
}

impl<P: GameState> Deref for MoveGuard<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        self.pos
    }
}

impl<P: GameState> DerefMut for MoveGuard<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        self.pos
    }
}

impl<P: GameState> Drop for MoveGuard<'_, P> {
    fn drop(&mut self) {
        self.pos.undo();
    }
}
