//! End-to-end tic-tac-toe sessions through the terminal driver.

use pocket_games::games::tictactoe::{self, Finish};
use pocket_games::{Answer, PromptError, Prompter, ScriptedPrompter, TerminalPrompter, Theme};
use pocket_tictactoe::{Board, Mark, find_winning_move, position_to_row_col, row_col_to_position};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;

/// Plays X against the computer: win if possible, else block, else the
/// first free preferred position.
///
/// The board is rebuilt from the offered labels: its own picks are X, every
/// other missing label is O.
struct Tactician {
    mine: Vec<usize>,
    preferences: Vec<usize>,
}

impl Tactician {
    fn new(preferences: Vec<usize>) -> Self {
        Self {
            mine: Vec::new(),
            preferences,
        }
    }

    fn board(&self, options: &[&str]) -> Board {
        let mut board = Board::new();
        for position in 1..=9 {
            let cell = position_to_row_col(position).unwrap();
            if self.mine.contains(&position) {
                board.place(cell, Mark::X).unwrap();
            } else if !options.contains(&position.to_string().as_str()) {
                board.place(cell, Mark::O).unwrap();
            }
        }
        board
    }
}

impl Prompter for Tactician {
    fn select(
        &mut self,
        prompt: &str,
        _default: &str,
        options: &[&str],
    ) -> Result<usize, PromptError> {
        if prompt == "Select game mode:" {
            return Ok(1);
        }
        let board = self.board(options);
        let position = find_winning_move(&board, Mark::X)
            .or_else(|| find_winning_move(&board, Mark::O))
            .and_then(row_col_to_position)
            .or_else(|| {
                self.preferences
                    .iter()
                    .copied()
                    .find(|p| options.contains(&p.to_string().as_str()))
            })
            .ok_or_else(|| PromptError::new("no preferred position left"))?;
        self.mine.push(position);
        options
            .iter()
            .position(|o| *o == position.to_string())
            .ok_or_else(|| PromptError::new("position not offered"))
    }

    fn input(&mut self, _prompt: &str, _default: &str) -> Result<String, PromptError> {
        Err(PromptError::new("unexpected input prompt"))
    }

    fn confirm(&mut self, _prompt: &str, _default: bool) -> Result<bool, PromptError> {
        Err(PromptError::new("unexpected confirm prompt"))
    }
}

#[test]
fn test_human_beats_computer_with_a_fork() {
    for seed in 0..8 {
        let mut prompter = Tactician::new(vec![1, 9, 7, 3]);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut out = Vec::new();

        let finish = tictactoe::run(&mut prompter, &mut rng, &mut out, &Theme::plain()).unwrap();

        assert_eq!(finish, Finish::Winner(Mark::X), "seed {seed}");
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Computer places O at position 5"));
        assert!(text.contains("Player X wins!"));
        assert!(!text.contains("Computer (O) wins!"));
    }
}

#[test]
fn test_forced_draw_against_computer() {
    // X 2, O 5 (center), X 3, O 1 (block), X 9, O 6 (block), X 4, O 7 (only corner), X 8.
    let mut prompter = ScriptedPrompter::new([
        Answer::Select(1),
        Answer::Select(1),
        Answer::Select(1),
        Answer::Select(4),
        Answer::Select(0),
        Answer::Select(0),
    ]);
    let mut rng = StdRng::seed_from_u64(11);
    let mut out = Vec::new();

    let finish = tictactoe::run(&mut prompter, &mut rng, &mut out, &Theme::plain()).unwrap();

    assert_eq!(finish, Finish::Draw);
    assert_eq!(prompter.remaining(), 0);
    let text = String::from_utf8(out).unwrap();
    for position in [5, 1, 6, 7] {
        assert!(text.contains(&format!("Computer places O at position {position}")));
    }
    assert!(text.contains("It's a draw!"));
    assert!(text.contains(" O | X | X\n"));
}

#[test]
fn test_local_game_over_the_terminal() {
    // Mode by label, then X 1, O 4, X 2, O 5, X 3 typed as position labels.
    let input = "Local Multiplayer\n\n4\n2\n5\n3\n";
    let mut prompter = TerminalPrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let mut rng = StdRng::seed_from_u64(0);
    let mut out = Vec::new();

    let finish = tictactoe::run(&mut prompter, &mut rng, &mut out, &Theme::plain()).unwrap();

    assert_eq!(finish, Finish::Winner(Mark::X));
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Player O's turn"));
    assert!(text.contains(" X | X | X\n"));
    assert!(text.contains("Player X wins!"));

    let prompts = String::from_utf8(prompter.into_output()).unwrap();
    assert!(prompts.contains("? Select position (1-9):"));
}

#[test]
fn test_closed_input_ends_the_session() {
    let mut prompter = TerminalPrompter::new(Cursor::new(b"2\n5\n".to_vec()), Vec::new());
    let mut rng = StdRng::seed_from_u64(0);
    let mut out = Vec::new();

    let result = tictactoe::run(&mut prompter, &mut rng, &mut out, &Theme::plain());

    assert!(result.is_err());
}
