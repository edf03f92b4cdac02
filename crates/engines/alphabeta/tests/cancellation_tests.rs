//! Cancelled searches still commit to a legal column.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use alphabeta_engine::AlphaBetaEngine;
use connect_core::{Board, Engine, Evaluator, GameState, SearchLimits};

#[test]
fn test_any_node_budget_yields_legal_move() {
    let board = Board::from_moves("000000").unwrap();
    let evaluator = Arc::new(Evaluator::default());
    for budget in (1..300).chain([1_000, 5_000, 20_000]) {
        let mut engine = AlphaBetaEngine::with_evaluator(evaluator.clone(), 1);
        let result = engine.search(&board, SearchLimits::depth(7).with_max_nodes(budget));
        let column = result.best_move.expect("a column is always chosen");
        assert!(board.can_play(column), "budget {budget} chose full column {column}");
        assert!(result.nodes <= budget);
    }
}

#[test]
fn test_interrupted_depth_keeps_previous_answer() {
    let board = Board::standard();
    let mut full = AlphaBetaEngine::new();
    let reference = full.search(&board, SearchLimits::depth(3));

    // Enough nodes for depth 3 but not depth 4
    let budget = reference.nodes + 1;
    let mut engine = AlphaBetaEngine::new();
    let result = engine.search(&board, SearchLimits::depth(8).with_max_nodes(budget));
    assert!(result.stopped);
    assert_eq!(result.depth, Some(3));
    assert_eq!(result.best_move, reference.best_move);
    assert_eq!(result.score, reference.score);
}

#[test]
fn test_pre_stopped_limits_fall_back_to_leftmost() {
    let board = Board::from_moves("000000").unwrap();
    let limits = SearchLimits::depth(6);
    limits.stop();
    let mut engine = AlphaBetaEngine::new();
    let result = engine.search(&board, limits);
    assert_eq!(result.best_move, Some(1));
    assert_eq!(result.depth, None);
    assert!(result.stopped);
}

#[test]
fn test_stop_from_another_thread() {
    let board = Board::standard();
    let limits = SearchLimits::depth(u8::MAX);
    let handle = limits.time_control.clone();
    let stopper = thread::spawn(move || {
        thread::sleep(Duration::from_millis(50));
        handle.stop();
    });

    let mut engine = AlphaBetaEngine::new();
    let result = engine.search(&board, limits);
    stopper.join().unwrap();

    assert!(result.best_move.is_some());
}

#[test]
fn test_time_budget_is_respected() {
    let board = Board::standard();
    let mut engine = AlphaBetaEngine::new();
    let result = engine.search(&board, SearchLimits::time(Duration::from_millis(30)));
    assert!(result.stopped);
    assert!(result.best_move.is_some());
}
