use super::*;
use connect_core::Board;

#[test]
fn test_visits_full_tree() {
    let mut board = Board::standard();
    let evaluator = Evaluator::default();
    let limits = SearchLimits::depth(3);
    let mut searcher = Minimax::new(&evaluator, Disc::First, &limits);
    searcher.search(&mut board, 3, true);
    assert_eq!(searcher.nodes(), 1 + 7 + 49 + 343);
    assert_eq!(board.moves_played(), 0);
}

#[test]
fn test_finished_game_is_a_leaf() {
    let mut board = Board::from_moves("0011223").unwrap();
    let evaluator = Evaluator::default();
    let limits = SearchLimits::depth(3);
    let mut searcher = Minimax::new(&evaluator, Disc::Second, &limits);
    let score = searcher.search(&mut board, 3, true);
    assert_eq!(score, -connect_core::WIN_SCORE);
    assert_eq!(searcher.nodes(), 1);
}

#[test]
fn test_node_budget_cuts_search() {
    let mut board = Board::standard();
    let evaluator = Evaluator::default();
    let limits = SearchLimits::depth(5).with_max_nodes(100);
    limits.start();
    let mut searcher = Minimax::new(&evaluator, Disc::First, &limits);
    searcher.search(&mut board, 5, true);
    assert!(limits.should_stop());
    assert_eq!(searcher.nodes(), 100);
}
