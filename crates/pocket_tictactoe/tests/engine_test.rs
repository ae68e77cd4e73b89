//! Behavioural tests for the tic-tac-toe engine.

use pocket_tictactoe::{
    Board, Cell, Game, GameMode, Mark, MoveError, choose_move, position_to_row_col,
    row_col_to_position,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn play(game: &mut Game, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        game.make_move(row, col).expect("legal move");
    }
}

#[test]
fn test_players_alternate_from_x() {
    let mut game = Game::new(GameMode::LocalMultiplayer);
    let mut expected = Mark::X;
    for cell in Cell::ALL {
        assert_eq!(game.current_player(), expected);
        game.make_move(cell.row, cell.col).unwrap();
        expected = expected.opponent();
    }
}

#[test]
fn test_occupied_cell_is_rejected_without_change() {
    let mut game = Game::new(GameMode::LocalMultiplayer);
    play(&mut game, &[(0, 0), (2, 2)]);
    let before = game.clone();
    for (row, col) in [(0, 0), (2, 2)] {
        assert_eq!(
            game.make_move(row, col),
            Err(MoveError::PositionTaken { row, col })
        );
    }
    assert_eq!(game, before);
}

#[test]
fn test_out_of_range_is_rejected_without_change() {
    let mut game = Game::new(GameMode::VsComputer);
    let before = game.clone();
    for (row, col) in [(3, 0), (0, 3), (9, 9)] {
        assert_eq!(
            game.make_move(row, col),
            Err(MoveError::InvalidPosition { row, col })
        );
    }
    assert_eq!(game, before);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        MoveError::PositionTaken { row: 0, col: 1 }.to_string(),
        "position (0, 1) already taken"
    );
    assert_eq!(
        MoveError::InvalidPosition { row: 4, col: 0 }.to_string(),
        "invalid position (4, 0): must be between 0 and 2"
    );
}

#[test]
fn test_position_labels_round_trip() {
    for position in 1..=9 {
        let cell = position_to_row_col(position).expect("valid label");
        assert_eq!(row_col_to_position(cell), Some(position));
    }
    assert_eq!(position_to_row_col(0), None);
    assert_eq!(position_to_row_col(10), None);
}

#[test]
fn test_computer_takes_immediate_win() {
    let mut board = Board::new();
    board.place(Cell::new(0, 0), Mark::O).unwrap();
    board.place(Cell::new(0, 1), Mark::O).unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    assert_eq!(choose_move(&board, Mark::O, &mut rng), Some(Cell::new(0, 2)));
}

#[test]
fn test_computer_blocks_immediate_loss() {
    let mut game = Game::new(GameMode::VsComputer);
    // X (0,0), O (1,1), X (0,1): X threatens (0,2).
    play(&mut game, &[(0, 0), (1, 1), (0, 1)]);
    assert!(game.is_computer_turn());
    let mut rng = StdRng::seed_from_u64(11);
    assert_eq!(game.computer_move(&mut rng), Some(Cell::new(0, 2)));
}

#[test]
fn test_computer_prefers_center() {
    let mut game = Game::new(GameMode::VsComputer);
    play(&mut game, &[(2, 1)]);
    let mut rng = StdRng::seed_from_u64(11);
    assert_eq!(game.computer_move(&mut rng), Some(Cell::CENTER));
}

#[test]
fn test_vs_computer_human_wins_top_row() {
    let mut game = Game::new(GameMode::VsComputer);
    let mut rng = StdRng::seed_from_u64(2024);
    let human_moves = [(0, 0), (0, 1), (0, 2)];
    let mut computer_moves = Vec::new();

    // O's replies are engineered to leave the top row open.
    let scripted_replies = [(1, 1), (2, 2)];
    for (turn, &(row, col)) in human_moves.iter().enumerate() {
        assert!(!game.is_computer_turn());
        game.make_move(row, col).unwrap();
        if game.winner().is_some() {
            break;
        }
        assert!(game.is_computer_turn());
        let suggested = game.computer_move(&mut rng);
        computer_moves.push(suggested);
        let (r, c) = scripted_replies[turn];
        game.make_move(r, c).unwrap();
    }

    assert_eq!(game.winner(), Some(Mark::X));
    assert!(!game.is_board_full());
    assert_eq!(computer_moves[0], Some(Cell::CENTER));
    assert_eq!(computer_moves[1], Some(Cell::new(0, 2)));
}

#[test]
fn test_nine_move_draw() {
    let mut game = Game::new(GameMode::LocalMultiplayer);
    // X O X / X O O / O X X
    play(
        &mut game,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );
    assert_eq!(game.winner(), None);
    assert!(game.is_board_full());
    assert!(game.available_positions().is_empty());
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(game.computer_move(&mut rng), None);
}
