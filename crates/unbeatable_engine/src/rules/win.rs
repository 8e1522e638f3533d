//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Mark, Square};

/// Three square indices that win when held by one mark.
pub type Line = [usize; 3];

/// All winning lines.
pub const LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the first line (in [`LINES`] order) held
/// entirely by one mark, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    let squares = board.squares();

    LINES.iter().find_map(|&[a, b, c]| match squares[a] {
        Square::Occupied(mark) if squares[b] == squares[a] && squares[c] == squares[a] => {
            Some(mark)
        }
        _ => None,
    })
}
