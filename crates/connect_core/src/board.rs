use std::fmt;

use crate::error::BoardError;
use crate::state::GameState;
use crate::types::*;
use crate::zobrist::ZOBRIST;

/// Directions checked for a connect: horizontal, vertical and both diagonals.
const LINE_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// A gravity grid of `width` columns and `height` rows. Row 0 is the bottom.
///
/// Tracks the move history for `undo`, the winner (detected on every drop)
/// and an incrementally maintained Zobrist hash.
#[derive(Clone, Debug)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Option<Disc>>, // row * width + col
    heights: Vec<usize>,
    history: Vec<Column>,
    discs: usize,
    winner: Option<Disc>,
    hash: u64,
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        if !(1..=MAX_WIDTH).contains(&width) || !(1..=MAX_HEIGHT).contains(&height) {
            return Err(BoardError::InvalidDimensions {
                width,
                height,
                max: MAX_WIDTH.min(MAX_HEIGHT),
            });
        }
        Ok(Self {
            width,
            height,
            cells: vec![None; width * height],
            heights: vec![0; width],
            history: Vec::with_capacity(width * height),
            discs: 0,
            winner: None,
            hash: 0,
        })
    }

    /// Empty 7x6 board.
    pub fn standard() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cells: vec![None; DEFAULT_WIDTH * DEFAULT_HEIGHT],
            heights: vec![0; DEFAULT_WIDTH],
            history: Vec::with_capacity(DEFAULT_WIDTH * DEFAULT_HEIGHT),
            discs: 0,
            winner: None,
            hash: 0,
        }
    }

    /// Standard board after playing `moves`, one column digit per move.
    ///
    /// Digits are zero-based column indices; hex digits allow columns past 9.
    /// Whitespace is ignored.
    pub fn from_moves(moves: &str) -> Result<Self, BoardError> {
        let mut board = Self::standard();
        board.play_moves(moves)?;
        Ok(board)
    }

    pub fn play_moves(&mut self, moves: &str) -> Result<(), BoardError> {
        for (index, ch) in moves.chars().filter(|c| !c.is_whitespace()).enumerate() {
            let col = ch
                .to_digit(MAX_WIDTH as u32)
                .ok_or_else(|| BoardError::InvalidMoveString {
                    index,
                    reason: format!("`{ch}` is not a column digit"),
                })? as Column;
            self.try_play(col)
                .map_err(|e| BoardError::InvalidMoveString {
                    index,
                    reason: e.to_string(),
                })?;
        }
        Ok(())
    }

    /// Parses a text diagram, top row first.
    ///
    /// `X` is the first player, `O` the second, `.` an empty cell. Every row
    /// must have the same width, discs must rest on something, and the disc
    /// counts must be consistent with alternating turns. The result has no
    /// move history, so `undo` cannot go back past it.
    ///
    /// ```text
    /// .......
    /// ...O...
    /// ..XXO..
    /// ```
    pub fn from_diagram(diagram: &str) -> Result<Self, BoardError> {
        let rows: Vec<Vec<char>> = diagram
            .lines()
            .map(|l| l.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|r| !r.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(BoardError::InvalidDiagram("no rows".into()));
        }

        let width = rows[0].len();
        let height = rows.len();
        let mut board = Self::new(width, height)?;

        for (line, chars) in rows.iter().enumerate() {
            if chars.len() != width {
                return Err(BoardError::InvalidDiagram(format!(
                    "row {} has {} cells, expected {width}",
                    line + 1,
                    chars.len()
                )));
            }
            let row = height - 1 - line;
            for (col, &ch) in chars.iter().enumerate() {
                let cell = match ch {
                    '.' | '-' | '_' => None,
                    other => Some(Disc::from_symbol(other).ok_or_else(|| {
                        BoardError::InvalidDiagram(format!("unexpected character `{other}`"))
                    })?),
                };
                board.cells[row * width + col] = cell;
            }
        }

        let mut counts = [0usize; 2];
        for col in 0..width {
            let mut filled = 0;
            for row in 0..height {
                if let Some(disc) = board.cells[row * width + col] {
                    if filled != row {
                        return Err(BoardError::InvalidDiagram(format!(
                            "floating disc at column {col}, row {row}"
                        )));
                    }
                    filled += 1;
                    counts[disc.idx()] += 1;
                    board.hash ^= ZOBRIST.cell_key(disc, col, row, width);
                }
            }
            board.heights[col] = filled;
        }

        let (first, second) = (counts[0], counts[1]);
        if first != second && first != second + 1 {
            return Err(BoardError::InvalidDiagram(format!(
                "disc counts X={first} O={second} cannot arise from alternating turns"
            )));
        }
        board.discs = first + second;

        let first_won = board.has_connect(Disc::First);
        let second_won = board.has_connect(Disc::Second);
        board.winner = match (first_won, second_won) {
            (true, true) => {
                return Err(BoardError::InvalidDiagram("both sides have four in a row".into()));
            }
            (true, false) => Some(Disc::First),
            (false, true) => Some(Disc::Second),
            (false, false) => None,
        };
        // Play stops at the first connect, so only the last mover can hold one
        if let Some(winner) = board.winner {
            let last_mover = if first > second { Disc::First } else { Disc::Second };
            if winner != last_mover {
                return Err(BoardError::InvalidDiagram(format!(
                    "{} has four in a row but {} moved after it",
                    winner.symbol(),
                    last_mover.symbol()
                )));
            }
        }

        Ok(board)
    }

    pub fn try_play(&mut self, col: Column) -> Result<(), BoardError> {
        if col >= self.width {
            return Err(BoardError::ColumnOutOfRange {
                column: col,
                width: self.width,
            });
        }
        if self.is_game_over() {
            return Err(BoardError::GameOver);
        }
        if self.heights[col] >= self.height {
            return Err(BoardError::ColumnFull(col));
        }
        self.play(col);
        Ok(())
    }

    /// Number of discs already in `col`.
    pub fn column_height(&self, col: Column) -> usize {
        self.heights[col]
    }

    pub fn history(&self) -> &[Column] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Column> {
        self.history.last().copied()
    }

    /// Moves played so far in the format `from_moves` reads.
    pub fn move_string(&self) -> String {
        self.history
            .iter()
            .filter_map(|&col| char::from_digit(col as u32, MAX_WIDTH as u32))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.discs == self.width * self.height
    }

    #[inline]
    fn at(&self, col: isize, row: isize) -> Option<Disc> {
        if col < 0 || row < 0 || col as usize >= self.width || row as usize >= self.height {
            return None;
        }
        self.cells[row as usize * self.width + col as usize]
    }

    /// Whether the disc just placed at `(col, row)` completes a line.
    fn connects_through(&self, col: usize, row: usize, disc: Disc) -> bool {
        let (c, r) = (col as isize, row as isize);
        LINE_DIRECTIONS.iter().any(|&(dc, dr)| {
            let mut count = 1;
            for sign in [1isize, -1] {
                let mut k = 1;
                while self.at(c + sign * k * dc, r + sign * k * dr) == Some(disc) {
                    count += 1;
                    k += 1;
                }
            }
            count >= CONNECT
        })
    }

    fn has_connect(&self, disc: Disc) -> bool {
        (0..self.height).any(|row| {
            (0..self.width).any(|col| {
                self.cells[row * self.width + col] == Some(disc)
                    && self.connects_through(col, row, disc)
            })
        })
    }
}

impl GameState for Board {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn cell(&self, col: Column, row: usize) -> Option<Disc> {
        self.cells[row * self.width + col]
    }

    #[inline]
    fn can_play(&self, col: Column) -> bool {
        col < self.width && self.heights[col] < self.height && self.winner.is_none()
    }

    fn play(&mut self, col: Column) {
        debug_assert!(self.can_play(col), "illegal drop in column {col}");
        let disc = self.side_to_move();
        let row = self.heights[col];
        self.cells[row * self.width + col] = Some(disc);
        self.heights[col] += 1;
        self.hash ^= ZOBRIST.cell_key(disc, col, row, self.width);
        self.discs += 1;
        self.history.push(col);
        if self.connects_through(col, row, disc) {
            self.winner = Some(disc);
        }
    }

    fn undo(&mut self) {
        let Some(col) = self.history.pop() else {
            return;
        };
        self.heights[col] -= 1;
        let row = self.heights[col];
        if let Some(disc) = self.cells[row * self.width + col].take() {
            self.hash ^= ZOBRIST.cell_key(disc, col, row, self.width);
        }
        self.discs -= 1;
        // Moves are refused once the game is won, so the parent was still open.
        self.winner = None;
    }

    #[inline]
    fn is_game_over(&self) -> bool {
        self.winner.is_some() || self.is_full()
    }

    #[inline]
    fn winner(&self) -> Option<Disc> {
        self.winner
    }

    #[inline]
    fn moves_played(&self) -> usize {
        self.discs
    }

    #[inline]
    fn position_hash(&self) -> u64 {
        self.hash
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.height).rev() {
            for col in 0..self.width {
                let ch = self.cells[row * self.width + col].map_or('.', Disc::symbol);
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        for col in 0..self.width {
            write!(f, "{}", std::char::from_digit(col as u32, MAX_WIDTH as u32).unwrap_or('?'))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
