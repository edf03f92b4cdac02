use super::*;

#[test]
fn test_standard_board_is_empty() {
    let board = Board::standard();
    assert_eq!(board.width(), 7);
    assert_eq!(board.height(), 6);
    assert_eq!(board.moves_played(), 0);
    assert_eq!(board.side_to_move(), Disc::First);
    assert_eq!(board.position_hash(), 0);
    assert!(!board.is_game_over());
    assert_eq!(board.legal_moves(), vec![0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_discs_stack_and_alternate() {
    let board = Board::from_moves("334").unwrap();
    assert_eq!(board.cell(3, 0), Some(Disc::First));
    assert_eq!(board.cell(3, 1), Some(Disc::Second));
    assert_eq!(board.cell(4, 0), Some(Disc::First));
    assert_eq!(board.cell(4, 1), None);
    assert_eq!(board.column_height(3), 2);
    assert_eq!(board.side_to_move(), Disc::Second);
    assert_eq!(board.last_move(), Some(4));
}

#[test]
fn test_undo_restores_position() {
    let mut board = Board::from_moves("3342").unwrap();
    let before = board.clone();
    board.play(5);
    board.undo();
    assert_eq!(board.history(), before.history());
    assert_eq!(board.position_hash(), before.position_hash());
    assert_eq!(board.moves_played(), before.moves_played());
    assert_eq!(board.column_height(5), 0);
}

#[test]
fn test_horizontal_win() {
    // X: 0 1 2 3 on the bottom row, O stacks on top
    let board = Board::from_moves("0011223").unwrap();
    assert_eq!(board.winner(), Some(Disc::First));
    assert!(board.is_game_over());
    assert!(!board.can_play(5));
}

#[test]
fn test_vertical_win() {
    let board = Board::from_moves("0101010").unwrap();
    assert_eq!(board.winner(), Some(Disc::First));
}

#[test]
fn test_diagonal_wins() {
    // Rising diagonal for X from (0,0) to (3,3)
    let mut rising = Board::from_moves("011262236353").unwrap();
    assert_eq!(rising.winner(), None);
    rising.play(3);
    assert_eq!(rising.winner(), Some(Disc::First));

    // Falling diagonal for X from (3,0) up-left to (0,3), mirrored sequence
    let mut falling = Board::from_moves("655404430313").unwrap();
    assert_eq!(falling.winner(), None);
    falling.play(3);
    assert_eq!(falling.winner(), Some(Disc::First));
}

#[test]
fn test_undo_clears_winner() {
    let mut board = Board::from_moves("0011223").unwrap();
    assert_eq!(board.winner(), Some(Disc::First));
    board.undo();
    assert_eq!(board.winner(), None);
    assert!(board.can_play(3));
}

#[test]
fn test_full_board_is_draw() {
    // Every column alternates vertically; column 3 is shifted by one row
    let moves = "000000111111222222433333344444555555666666";
    let board = Board::from_moves(moves).unwrap();
    assert!(board.is_full());
    assert_eq!(board.winner(), None);
    assert!(board.is_game_over());
    assert!(board.legal_moves().is_empty());
}

#[test]
fn test_try_play_errors() {
    let mut board = Board::standard();
    assert_eq!(
        board.try_play(7),
        Err(BoardError::ColumnOutOfRange { column: 7, width: 7 })
    );
    for _ in 0..6 {
        board.try_play(0).unwrap();
    }
    assert_eq!(board.try_play(0), Err(BoardError::ColumnFull(0)));

    let mut won = Board::from_moves("0101010").unwrap();
    assert_eq!(won.try_play(3), Err(BoardError::GameOver));
}

#[test]
fn test_invalid_move_string() {
    let err = Board::from_moves("33z").unwrap_err();
    assert!(matches!(err, BoardError::InvalidMoveString { index: 2, .. }));
}

#[test]
fn test_invalid_dimensions() {
    assert!(Board::new(0, 6).is_err());
    assert!(Board::new(7, 17).is_err());
    assert!(Board::new(16, 16).is_ok());
}

#[test]
fn test_from_diagram_matches_moves() {
    let diagram = "
        .......
        .......
        .......
        .......
        ...O...
        ..XXO..
    ";
    let parsed = Board::from_diagram(diagram).unwrap();
    let played = Board::from_moves("3324").unwrap();
    assert_eq!(parsed.moves_played(), 4);
    assert_eq!(parsed.side_to_move(), Disc::First);
    assert_eq!(parsed.position_hash(), played.position_hash());
    for col in 0..7 {
        assert_eq!(parsed.column_height(col), played.column_height(col));
        for row in 0..6 {
            assert_eq!(parsed.cell(col, row), played.cell(col, row));
        }
    }
}

#[test]
fn test_from_diagram_detects_winner() {
    let board = Board::from_diagram(
        "
        .....
        O....
        O....
        O....
        XXXX.
        ",
    )
    .unwrap();
    assert_eq!(board.width(), 5);
    assert_eq!(board.height(), 5);
    assert_eq!(board.winner(), Some(Disc::First));
}

#[test]
fn test_from_diagram_rejects_play_after_a_win() {
    // O connected but X holds the extra disc, so X moved after the game ended
    let err = Board::from_diagram(
        "
        .....
        O....
        O....
        OXX..
        OXX.X
        ",
    )
    .unwrap_err();
    assert!(matches!(err, BoardError::InvalidDiagram(_)));

    // Without the extra X disc, O moved last and the win stands
    let board = Board::from_diagram(
        "
        .....
        O....
        O....
        OXX..
        OXX..
        ",
    )
    .unwrap();
    assert_eq!(board.winner(), Some(Disc::Second));

    // X connected with equal counts means O moved after the win
    assert!(
        Board::from_diagram(
            "
            .....
            O....
            O....
            OO...
            XXXX.
            "
        )
        .is_err()
    );
}

#[test]
fn test_from_diagram_rejects_bad_input() {
    assert!(Board::from_diagram("").is_err());
    // Floating disc
    assert!(Board::from_diagram("..X..\n.....").is_err());
    // Ragged rows
    assert!(Board::from_diagram("....\n.....").is_err());
    // Impossible counts
    assert!(Board::from_diagram(".....\nOO...").is_err());
    // Unknown symbol
    assert!(Board::from_diagram(".....\nX#...").is_err());
}

#[test]
fn test_display_round_trips_through_diagram() {
    let board = Board::from_moves("334455").unwrap();
    let text = board.to_string();
    let diagram: String = text.lines().take(6).collect::<Vec<_>>().join("\n");
    let parsed = Board::from_diagram(&diagram).unwrap();
    assert_eq!(parsed.position_hash(), board.position_hash());
}

#[test]
fn test_move_string_round_trips() {
    let board = Board::from_moves("33 42 10").unwrap();
    assert_eq!(board.move_string(), "334210");

    let mut wide = Board::new(16, 4).unwrap();
    wide.play_moves("fa0").unwrap();
    assert_eq!(wide.move_string(), "fa0");
    assert_eq!(wide.cell(15, 0), Some(Disc::First));
}
