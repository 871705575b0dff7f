use othello_engine::{
    Color, GameConfig, GameState, MAX_BOARD_SIZE, MIN_BOARD_SIZE, OthelloError, Outcome, Position,
    SetupInput, Tile, WinCondition,
};

fn opening_game() -> GameState {
    let mut game =
        GameState::create(8, 8, Color::Black, WinCondition::Most, Color::White).unwrap();
    game.begin_game();
    game
}

#[test]
fn every_size_in_range_creates_an_empty_board() {
    for columns in MIN_BOARD_SIZE..=MAX_BOARD_SIZE {
        for rows in MIN_BOARD_SIZE..=MAX_BOARD_SIZE {
            let game =
                GameState::create(columns, rows, Color::White, WinCondition::Most, Color::White)
                    .unwrap();
            let board = game.board();

            assert_eq!(board.columns() as usize, columns);
            assert_eq!(board.rows() as usize, rows);
            assert_eq!(board.empty_count() as usize, columns * rows);
            assert!(board.positions().all(|pos| board.tile(pos) == Some(Tile::Empty)));
        }
    }
}

#[test]
fn sizes_outside_range_are_rejected() {
    for (columns, rows) in [(3, 8), (8, 3), (17, 8), (8, 17), (0, 0)] {
        let err = GameState::create(columns, rows, Color::Black, WinCondition::Most, Color::White)
            .unwrap_err();
        assert_eq!(err, OthelloError::InvalidBoardSize { columns, rows });
    }
}

#[test]
fn begin_game_fills_only_the_center_block() {
    let game = opening_game();
    let occupied: Vec<(Position, Tile)> = game
        .board()
        .positions()
        .filter_map(|pos| game.tile(pos).map(|tile| (pos, tile)))
        .filter(|(_, tile)| *tile != Tile::Empty)
        .collect();

    assert_eq!(
        occupied,
        vec![
            (Position::new(4, 4), Tile::White),
            (Position::new(4, 5), Tile::Black),
            (Position::new(5, 4), Tile::Black),
            (Position::new(5, 5), Tile::White),
        ]
    );
}

#[test]
fn standard_opening_moves() {
    let game = opening_game();
    let mut targets = game.legal_targets();
    targets.sort();

    assert_eq!(
        targets,
        vec![
            Position::new(3, 4),
            Position::new(4, 3),
            Position::new(5, 6),
            Position::new(6, 5),
        ]
    );
}

#[test]
fn first_move_flips_one_tile() {
    let mut game = opening_game();

    game.execute_move(Position::new(3, 4)).unwrap();

    assert_eq!(game.tile(Position::new(4, 4)), Some(Tile::Black));
    assert_eq!(game.score(), (1, 4));
    assert_eq!(game.turn(), Color::White);
}

#[test]
fn rejected_move_changes_nothing() {
    let mut game = opening_game();
    let before = game.clone();

    let err = game.execute_move(Position::new(8, 8)).unwrap_err();

    assert_eq!(err, OthelloError::InvalidMove(Position::new(8, 8)));
    assert_eq!(err.to_string(), "illegal move at (8, 8)");
    assert_eq!(game, before);
}

#[test]
fn setup_strings_are_validated() {
    let setup = |player: &str, win: &str, corner: &str| SetupInput {
        columns: 8,
        rows: 8,
        first_player: player.to_string(),
        win_condition: win.to_string(),
        corner_tile: corner.to_string(),
    };

    assert!(GameState::from_setup(setup("BLACK", "MOST", "WHITE")).is_ok());
    assert!(matches!(
        GameState::from_setup(setup("GREY", "MOST", "WHITE")),
        Err(OthelloError::InvalidPlayer(_))
    ));
    assert!(matches!(
        GameState::from_setup(setup("BLACK", "SOME", "WHITE")),
        Err(OthelloError::InvalidWinCondition(_))
    ));
    assert!(matches!(
        GameState::from_setup(setup("BLACK", "MOST", "BLUE")),
        Err(OthelloError::InvalidCornerTile(_))
    ));
}

#[test]
fn greedy_playthrough_keeps_tile_count_invariant() {
    let config = GameConfig {
        columns: 6,
        rows: 6,
        ..GameConfig::default()
    };
    let mut game = GameState::new(config).unwrap();
    game.begin_game();
    let area = 36u16;
    let mut placed = 4u16;

    while !game.is_game_over() {
        let target = game.legal_targets()[0];
        let snapshot = game.play(target).unwrap();
        placed += 1;

        let empty = game.board().empty_count();
        assert_eq!(snapshot.white_count + snapshot.black_count + empty, area);
        assert_eq!(snapshot.white_count + snapshot.black_count, placed);
        assert!(!snapshot.flipped.is_empty());

        if snapshot.is_game_over {
            assert_eq!(snapshot.winner, Some(game.winner()));
            break;
        }
        assert!(game.has_legal_move());
    }

    assert!(game.is_game_over());
    let result = game.to_game_result();
    let expected = match result.white_count.cmp(&result.black_count) {
        std::cmp::Ordering::Greater => Outcome::White,
        std::cmp::Ordering::Less => Outcome::Black,
        std::cmp::Ordering::Equal => Outcome::Tie,
    };
    assert_eq!(result.winner, expected);
}
