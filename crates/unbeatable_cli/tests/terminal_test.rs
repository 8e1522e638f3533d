//! Tests for the terminal game loop driven by scripted input.

use std::io::Cursor;
use std::time::Duration;
use unbeatable_cli::Terminal;
use unbeatable_engine::{GameMode, GameResult, Mark, Square};

fn play(mode: GameMode, script: &str) -> (String, unbeatable_engine::GameSession) {
    let mut output = Vec::new();
    let session = {
        let mut terminal = Terminal::new(Cursor::new(script), &mut output, mode, Duration::ZERO);
        terminal.run().expect("terminal run");
        terminal.session().clone()
    };
    (String::from_utf8(output).expect("utf8 output"), session)
}

#[test]
fn test_ai_answers_center_with_corner() {
    let (output, session) = play(GameMode::VsAi { ai: Mark::O }, "5\nq\n");
    assert!(output.contains("AI is thinking..."));
    assert!(output.contains("AI plays Top-left"));
    assert!(!output.contains("Your move: O"));
    assert_eq!(session.board().get(0), Some(Square::Occupied(Mark::O)));
    assert_eq!(session.to_move(), Mark::X);
}

#[test]
fn test_occupied_square_reported() {
    let (output, session) = play(GameMode::VsAi { ai: Mark::O }, "5\n5\n");
    assert!(output.contains("Square 5 (Center) is already occupied"));
    assert!(!output.contains("Square 4"));
    assert_eq!(session.history().len(), 2);
}

#[test]
fn test_two_player_win_announced() {
    let (output, session) = play(GameMode::TwoPlayer, "1\n4\n2\n5\n3\n9\nq\n");
    assert!(output.contains("X Wins!"));
    assert!(output.contains("Game is already over"));
    assert_eq!(session.result(), GameResult::Win(Mark::X));
}

#[test]
fn test_toggle_mode_and_reset() {
    let (output, session) = play(GameMode::VsAi { ai: Mark::O }, "m\n1\nr\n");
    assert!(output.contains("Mode: two players"));
    assert_eq!(session.mode(), GameMode::TwoPlayer);
    assert!(session.history().is_empty());
}

#[test]
fn test_ai_opens_when_playing_x() {
    let (output, session) = play(GameMode::VsAi { ai: Mark::X }, "");
    assert!(output.contains("AI plays Top-left"));
    assert!(!output.contains("Your move: X"));
    assert!(output.contains("Your move: O"));
    assert_eq!(session.history(), &[0]);
}

#[test]
fn test_unknown_input() {
    let (output, _) = play(GameMode::TwoPlayer, "banana\n");
    assert!(output.contains("Unrecognized input: banana"));
}
