//! Engine-vs-engine games

use serde::Serialize;
use tracing::{debug, info};

use connect_core::{Board, Column, Disc, Engine, EngineConfig, GameState, Score};

/// How a single game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    FirstWins,
    SecondWins,
    Draw,
}

impl GameOutcome {
    fn from_board(board: &Board) -> Self {
        match board.winner() {
            Some(Disc::First) => GameOutcome::FirstWins,
            Some(Disc::Second) => GameOutcome::SecondWins,
            None => GameOutcome::Draw,
        }
    }

    /// Same game seen with the seats swapped.
    fn flipped(self) -> Self {
        match self {
            GameOutcome::FirstWins => GameOutcome::SecondWins,
            GameOutcome::SecondWins => GameOutcome::FirstWins,
            GameOutcome::Draw => GameOutcome::Draw,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MoveRecord {
    pub column: Column,
    pub score: Score,
    pub depth: Option<u8>,
    pub nodes: u64,
}

/// Full record of one game, seats as played.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub first: String,
    pub second: String,
    pub moves: Vec<MoveRecord>,
    pub outcome: GameOutcome,
    /// Final position as a move string
    pub move_string: String,
}

/// Result of a match from the first engine's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Points per game: a win is 1, a draw a half.
    pub fn score(&self) -> f64 {
        let total = self.total_games();
        if total == 0 {
            return 0.5;
        }
        (self.wins as f64 + self.draws as f64 * 0.5) / total as f64
    }

    fn record(&mut self, outcome_for_engine1: GameOutcome) {
        match outcome_for_engine1 {
            GameOutcome::FirstWins => self.wins += 1,
            GameOutcome::SecondWins => self.losses += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }
}

/// Plays games between two engines from a fixed opening.
pub struct MatchRunner {
    config: EngineConfig,
    opening: Board,
    alternate: bool,
}

impl MatchRunner {
    pub fn new(config: EngineConfig, opening: Board) -> Self {
        Self {
            config,
            opening,
            alternate: true,
        }
    }

    /// Keep engine1 on the first seat for every game.
    pub fn without_alternation(mut self) -> Self {
        self.alternate = false;
        self
    }

    /// Runs `games` games, swapping seats every game unless disabled.
    pub fn run_match(
        &self,
        engine1: &mut dyn Engine<Board>,
        engine2: &mut dyn Engine<Board>,
        games: u32,
    ) -> (MatchResult, Vec<GameRecord>) {
        let mut result = MatchResult::default();
        let mut records = Vec::with_capacity(games as usize);

        for game_num in 0..games {
            let engine1_first = !self.alternate || game_num % 2 == 0;
            let record = if engine1_first {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1)
            };
            let outcome = if engine1_first {
                record.outcome
            } else {
                record.outcome.flipped()
            };
            result.record(outcome);

            info!(
                game = game_num + 1,
                outcome = ?record.outcome,
                moves = %record.move_string,
                wins = result.wins,
                losses = result.losses,
                draws = result.draws,
                "game finished"
            );
            records.push(record);
        }

        (result, records)
    }

    /// Plays one game to the end. Every move gets fresh limits.
    pub fn play_game(
        &self,
        first: &mut dyn Engine<Board>,
        second: &mut dyn Engine<Board>,
    ) -> GameRecord {
        let mut board = self.opening.clone();
        let mut moves = Vec::new();
        first.new_game();
        second.new_game();

        while !board.is_game_over() {
            let limits = self.config.search_limits();
            let mover = board.side_to_move();
            let result = match mover {
                Disc::First => first.search(&board, limits),
                Disc::Second => second.search(&board, limits),
            };
            // An unfinished position always has a legal column
            let Some(column) = result.best_move.or_else(|| board.first_legal()) else {
                break;
            };
            debug!(?mover, column, score = result.score, "move");
            board.play(column);
            moves.push(MoveRecord {
                column,
                score: result.score,
                depth: result.depth,
                nodes: result.nodes,
            });
        }

        GameRecord {
            first: first.name().to_string(),
            second: second.name().to_string(),
            moves,
            outcome: GameOutcome::from_board(&board),
            move_string: board.move_string(),
        }
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
