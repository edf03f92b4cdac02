//! connect4: choose moves and run engine matches from the command line.
//!
//! Usage:
//!   connect4 best --moves 3342 --depth 8
//!   connect4 best --diagram position.txt --json
//!   connect4 play alphabeta minimax --games 4

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use connect_cli::{create_engine, load_position, MatchRunner};
use connect_core::{
    zobrist, Board, EngineConfig, GameState, SearchResult, TieBreak, DEFAULT_HEIGHT,
    DEFAULT_WIDTH,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Engine configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the maximum search depth
    #[arg(short, long, global = true)]
    depth: Option<u8>,

    /// Override the time budget per move, in milliseconds
    #[arg(long, global = true)]
    move_time_ms: Option<u64>,

    /// Override the tie-break rule (leftmost or rightmost)
    #[arg(long, global = true)]
    tie_break: Option<TieBreak>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Choose a column for the side to move
    Best {
        /// Moves played so far, one column digit per move
        #[arg(short, long)]
        moves: Option<String>,

        /// Position diagram file, top row first
        #[arg(long, conflicts_with = "moves")]
        diagram: Option<PathBuf>,

        /// Engine to use (alphabeta or minimax)
        #[arg(short, long, default_value = "alphabeta")]
        engine: String,

        #[arg(long, default_value_t = DEFAULT_WIDTH)]
        width: usize,

        #[arg(long, default_value_t = DEFAULT_HEIGHT)]
        height: usize,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Play games between two engines
    Play {
        first: String,
        second: String,

        /// Number of games; seats swap every game
        #[arg(short, long, default_value_t = 1)]
        games: u32,

        /// Opening moves played before the engines take over
        #[arg(short, long)]
        moves: Option<String>,

        #[arg(long, default_value_t = DEFAULT_WIDTH)]
        width: usize,

        #[arg(long, default_value_t = DEFAULT_HEIGHT)]
        height: usize,

        /// Print game records as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct BestMoveReport<'a> {
    engine: &'a str,
    moves: String,
    side_to_move: char,
    #[serde(flatten)]
    result: &'a SearchResult,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    zobrist::init();
    let config = build_config(&args)?;

    match &args.command {
        Command::Best {
            moves,
            diagram,
            engine,
            width,
            height,
            json,
        } => {
            let board = load_position(moves.as_deref(), diagram.as_deref(), *width, *height)?;
            run_best(&board, engine, &config, *json)
        }
        Command::Play {
            first,
            second,
            games,
            moves,
            width,
            height,
            json,
        } => {
            let opening = load_position(moves.as_deref(), None, *width, *height)?;
            run_play(opening, first, second, *games, config, *json)
        }
    }
}

fn build_config(args: &Args) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(depth) = args.depth {
        config.max_depth = depth;
    }
    if let Some(ms) = args.move_time_ms {
        config.move_time_ms = Some(ms);
    }
    if let Some(rule) = args.tie_break {
        config.tie_break = rule;
    }
    config.validate().context("Invalid engine configuration")?;
    Ok(config)
}

fn run_best(board: &Board, engine_name: &str, config: &EngineConfig, json: bool) -> Result<()> {
    let mut engine = create_engine(engine_name, config)?;
    info!(engine = engine.name(), moves = %board.move_string(), "searching");
    let result = engine.search(board, config.search_limits());

    if json {
        let report = BestMoveReport {
            engine: engine.name(),
            moves: board.move_string(),
            side_to_move: board.side_to_move().symbol(),
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{board}");
    match result.best_move {
        Some(column) => println!(
            "bestmove {column} score {} depth {} nodes {}{}",
            result.score,
            result.depth.map_or_else(|| "-".to_string(), |d| d.to_string()),
            result.nodes,
            if result.stopped { " (stopped)" } else { "" }
        ),
        None => println!("no legal move: the game is over"),
    }
    Ok(())
}

fn run_play(
    opening: Board,
    first: &str,
    second: &str,
    games: u32,
    config: EngineConfig,
    json: bool,
) -> Result<()> {
    let mut engine1 = create_engine(first, &config)?;
    let mut engine2 = create_engine(second, &config)?;

    if !json {
        println!("=== Match: {first} vs {second} ===");
        println!("Games: {games}, Depth: {}", config.max_depth);
        println!();
    }

    let (width, height) = (opening.width(), opening.height());
    let runner = MatchRunner::new(config, opening);
    let (result, records) = runner.run_match(engine1.as_mut(), engine2.as_mut(), games);

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    for (i, record) in records.iter().enumerate() {
        println!(
            "Game {}: {} (X) vs {} (O): {:?} after {}",
            i + 1,
            record.first,
            record.second,
            record.outcome,
            record.move_string
        );
        let mut board = Board::new(width, height)?;
        board.play_moves(&record.move_string)?;
        println!("{board}");
    }
    println!("=== Final Result ===");
    println!(
        "{first}: {} wins, {} losses, {} draws",
        result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);
    Ok(())
}
