use serde::{Deserialize, Serialize};

/// A column index in `[0, width)`. Moves are identified by their column.
pub type Column = usize;

/// Search score. Positive favours the root mover.
pub type Score = i32;

/// Score of a won position for the root mover (negated for a loss).
pub const WIN_SCORE: Score = 900_000;

/// Score of a full board without a winner.
pub const DRAW_SCORE: Score = 0;

/// Open window bound, strictly beyond any score a search can produce.
pub const SCORE_INFINITE: Score = 1_000_000;

/// Number of aligned discs that wins the game.
pub const CONNECT: usize = 4;

pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 6;

/// Largest supported grid in either direction.
pub const MAX_WIDTH: usize = 16;
pub const MAX_HEIGHT: usize = 16;
pub const MAX_CELLS: usize = MAX_WIDTH * MAX_HEIGHT;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disc {
    /// Moves when an even number of discs has been played.
    First,
    Second,
}

impl Disc {
    pub fn other(self) -> Disc {
        match self {
            Disc::First => Disc::Second,
            Disc::Second => Disc::First,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Disc::First => 0,
            Disc::Second => 1,
        }
    }

    /// The side to move after `moves_played` discs.
    pub fn to_move(moves_played: usize) -> Disc {
        if moves_played % 2 == 0 {
            Disc::First
        } else {
            Disc::Second
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Disc::First => 'X',
            Disc::Second => 'O',
        }
    }

    pub fn from_symbol(ch: char) -> Option<Disc> {
        match ch {
            'X' | 'x' => Some(Disc::First),
            'O' | 'o' => Some(Disc::Second),
            _ => None,
        }
    }
}

/// Which column wins when several root moves share the best score.
///
/// Root columns are always explored left to right, so `Leftmost` keeps the
/// incumbent on ties (strict `>`) and `Rightmost` replaces it (`>=`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    #[default]
    Leftmost,
    Rightmost,
}

impl TieBreak {
    /// Whether `candidate` should replace the current best `incumbent`.
    #[inline]
    pub fn prefers(self, candidate: Score, incumbent: Score) -> bool {
        match self {
            TieBreak::Leftmost => candidate > incumbent,
            TieBreak::Rightmost => candidate >= incumbent,
        }
    }
}

impl std::str::FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "leftmost" | "left" | "first" => Ok(TieBreak::Leftmost),
            "rightmost" | "right" | "last" => Ok(TieBreak::Rightmost),
            other => Err(format!("unknown tie-break rule: {other}")),
        }
    }
}
