use std::time::Instant;

use rayon::prelude::*;

use connect_core::{Board, GameState, perft};

const FULL_PERFT_ENV: &str = "FULL_PERFT";
const NODE_LIMIT: u64 = 2_000_000;

struct PerftCase {
    name: &'static str,
    width: usize,
    height: usize,
    moves: &'static str,
    /// Expected counts for depth 1, 2, ...
    counts: &'static [u64],
}

const CASES: &[PerftCase] = &[
    PerftCase {
        name: "empty 7x6",
        width: 7,
        height: 6,
        moves: "",
        counts: &[7, 49, 343, 2401, 16807, 117649, 823536, 5673234],
    },
    PerftCase {
        name: "center opening",
        width: 7,
        height: 6,
        moves: "3",
        counts: &[7, 49, 343, 2401, 16807, 117648, 801822],
    },
    PerftCase {
        name: "tall center stack",
        width: 7,
        height: 6,
        moves: "3333",
        counts: &[7, 49, 342, 2376, 16416, 107736, 735010],
    },
    PerftCase {
        name: "full bottom row",
        width: 7,
        height: 6,
        moves: "0123456",
        counts: &[7, 49, 343, 2401, 16807, 116886, 811874],
    },
    PerftCase {
        name: "threats on both sides",
        width: 7,
        height: 6,
        moves: "332211",
        counts: &[7, 35, 245, 1295, 8712, 48242, 310260],
    },
    PerftCase {
        name: "empty 4x4",
        width: 4,
        height: 4,
        moves: "",
        counts: &[
            4, 16, 64, 256, 1020, 4020, 15540, 57504, 206904, 690504, 2160504,
        ],
    },
    PerftCase {
        name: "empty 5x4",
        width: 5,
        height: 4,
        moves: "",
        counts: &[5, 25, 125, 625, 3120, 15500, 76300, 363308],
    },
];

fn setup(case: &PerftCase) -> Board {
    let mut board = Board::new(case.width, case.height).expect("valid dimensions");
    board.play_moves(case.moves).expect("valid move string");
    board
}

#[test]
fn perft_reference_positions() {
    let full = std::env::var(FULL_PERFT_ENV).is_ok();

    CASES.par_iter().for_each(|case| {
        let case_start = Instant::now();
        let mut total_nodes = 0u64;
        for (i, &expected) in case.counts.iter().enumerate() {
            let depth = (i + 1) as u8;
            if !full && expected > NODE_LIMIT {
                eprintln!(
                    "Skipping depth {} for {} (expected {} nodes), set {}=1 to run all.",
                    depth, case.name, expected, FULL_PERFT_ENV
                );
                continue;
            }
            let mut board = setup(case);
            let got = perft(&mut board, depth);
            assert_eq!(
                got, expected,
                "Perft mismatch for {} at depth {}",
                case.name, depth
            );
            total_nodes += got;
        }
        eprintln!(
            "{}: {} nodes in {:?}",
            case.name,
            total_nodes,
            case_start.elapsed()
        );
    });
}

#[test]
fn perft_leaves_position_untouched() {
    let mut board = Board::from_moves("3324").unwrap();
    let hash = board.position_hash();
    let history = board.history().to_vec();
    perft(&mut board, 4);
    assert_eq!(board.position_hash(), hash);
    assert_eq!(board.history(), history.as_slice());
}

#[test]
fn perft_stops_at_finished_games() {
    let mut won = Board::from_moves("0011223").unwrap();
    assert_eq!(perft(&mut won, 0), 1);
    assert_eq!(perft(&mut won, 1), 0);
    assert_eq!(perft(&mut won, 3), 0);
}
