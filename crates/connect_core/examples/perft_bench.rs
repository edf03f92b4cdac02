//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p connect_core -- [depth] [moves]
//!
//! With no move string, runs every opening in `OPENINGS`.

use connect_core::{perft, Board};
use std::env;
use std::time::{Duration, Instant};

const OPENINGS: &[(&str, &str)] = &[
    ("Empty board", ""),
    ("Center", "3"),
    ("Center stack", "3333"),
    ("Bottom row", "0123456"),
    ("Crossed threats", "332211"),
];

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(8);

    let openings: Vec<(&str, &str)> = match args.get(2) {
        Some(moves) => vec![("Custom", moves.as_str())],
        None => OPENINGS.to_vec(),
    };

    println!("=== Perft Benchmark ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    for (name, moves) in openings {
        let mut board = match Board::from_moves(moves) {
            Ok(board) => board,
            Err(e) => {
                eprintln!("{name}: {e}");
                continue;
            }
        };

        print!("{name:.<30}");
        let start = Instant::now();
        let nodes = perft(&mut board, depth);
        let elapsed = start.elapsed();
        total_nodes += nodes;
        total_time += elapsed;

        println!(
            " {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)",
            nps(nodes, elapsed)
        );
    }

    println!();
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
}
