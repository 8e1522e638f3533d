//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::session::GameSession;
use crate::types::{Board, Square};

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replaying the history onto an empty board, alternating from X, must
/// touch only empty squares and reproduce the current board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameSession> for MonotonicBoardInvariant {
    fn holds(session: &GameSession) -> bool {
        let mut squares = [Square::Empty; 9];
        let mut mark = crate::Mark::X;

        for &index in session.history() {
            match squares.get_mut(index) {
                Some(sq) if *sq == Square::Empty => *sq = Square::Occupied(mark),
                _ => return false,
            }
            mark = mark.opponent();
        }

        Board::from_squares(squares) == *session.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
