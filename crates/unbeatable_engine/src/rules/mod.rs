//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating boards according to
//! tic-tac-toe rules. Rules are separated from board storage so the search
//! and the session share one definition of a finished game.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Line, check_winner};

use crate::error::InvalidMove;
use crate::types::{Board, GameResult, Mark};
use tracing::{debug, instrument};

/// Evaluates a board.
///
/// Lines are checked before fullness, so a last move that both fills the
/// board and completes a line is a win.
pub fn evaluate(board: &Board) -> GameResult {
    if let Some(winner) = check_winner(board) {
        GameResult::Win(winner)
    } else if is_full(board) {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}

/// Places `mark` at `index`, returning the new board.
///
/// # Errors
///
/// - [`InvalidMove::OutOfRange`] if `index` is not 0-8
/// - [`InvalidMove::GameOver`] if the board is already won or drawn
/// - [`InvalidMove::Occupied`] if the square is taken
#[instrument(skip(board))]
pub fn apply_move(board: &Board, index: usize, mark: Mark) -> Result<Board, InvalidMove> {
    if index >= board.squares().len() {
        return Err(InvalidMove::OutOfRange(index));
    }
    if evaluate(board).is_terminal() {
        return Err(InvalidMove::GameOver);
    }
    if !board.is_empty(index) {
        return Err(InvalidMove::Occupied(index));
    }

    debug!(index, %mark, "Placing mark");
    Ok(board.with_mark(index, mark))
}
