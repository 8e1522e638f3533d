//! Result consistency invariant: the stored result matches the board.

use super::Invariant;
use crate::rules::evaluate;
use crate::session::GameSession;
use crate::types::{Board, Mark};

/// Invariant: The stored result equals `evaluate(board)`, and no move
/// before the last one ended the game.
pub struct ResultConsistentInvariant;

impl Invariant<GameSession> for ResultConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        if session.result() != evaluate(session.board()) {
            return false;
        }

        // Every prefix short of the full history must still be in progress
        let history = session.history();
        let mut board = Board::new();
        let mut mark = Mark::X;
        for &index in history.iter().take(history.len().saturating_sub(1)) {
            match crate::rules::apply_move(&board, index, mark) {
                Ok(next) => board = next,
                Err(_) => return false,
            }
            if evaluate(&board).is_terminal() {
                return false;
            }
            mark = mark.opponent();
        }
        true
    }

    fn description() -> &'static str {
        "Stored result matches the board and only the last move may end the game"
    }
}
