//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// Player identity and cell occupant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Parses `x`/`X` or `o`/`O`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'x' | 'X' => Some(Mark::X),
            'o' | 'O' => Some(Mark::O),
            _ => None,
        }
    }
}

impl FromStr for Mark {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Mark::from_char(c).ok_or(BoardParseError::InvalidChar(c)),
            _ => Err(BoardParseError::InvalidMark(s.to_string())),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
///
/// Boards are small `Copy` values. Every operation that changes a square
/// returns a new board, so search branches never share state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELLS],
        }
    }

    /// Creates a board from squares in row-major order.
    ///
    /// No legality check is made; use [`crate::apply_move`] to build boards
    /// that obey the turn order.
    pub fn from_squares(squares: [Square; CELLS]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Indices of empty squares in ascending order.
    pub fn empty_squares(&self) -> impl Iterator<Item = usize> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, sq)| **sq == Square::Empty)
            .map(|(index, _)| index)
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|sq| **sq == Square::Occupied(mark))
            .count()
    }

    /// Mark to move under the X-first alternation, judged by piece counts.
    pub fn implied_to_move(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Returns a copy with `index` set to `mark`. Caller checks bounds.
    pub(crate) fn with_mark(mut self, index: usize, mark: Mark) -> Self {
        self.squares[index] = Square::Occupied(mark);
        self
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Parses the compact text form: nine cells in row-major order.
///
/// `X`/`O` (either case) are marks and `.`, `_` or `-` are empty cells.
/// Whitespace and `|` separators are skipped, so `"XX.|OO.|..."` works.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; CELLS];
        let mut len = 0;

        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let square = match c {
                '.' | '_' | '-' => Square::Empty,
                other => Square::Occupied(
                    Mark::from_char(other).ok_or(BoardParseError::InvalidChar(other))?,
                ),
            };
            if len < CELLS {
                squares[len] = square;
            }
            len += 1;
        }

        if len != CELLS {
            return Err(BoardParseError::WrongLength(len));
        }
        Ok(Self { squares })
    }
}

/// Error parsing the text form of a board or mark.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),

    /// A character is neither a mark nor an empty-cell marker.
    #[display("Invalid cell character {:?}", _0)]
    InvalidChar(char),

    /// The text is not a single mark character.
    #[display("Invalid mark {:?} (expected X or O)", _0)]
    InvalidMark(String),
}

impl std::error::Error for BoardParseError {}

/// Outcome of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// No line completed and at least one empty square remains.
    InProgress,
    /// A mark completed a line.
    Win(Mark),
    /// Board full with no completed line.
    Draw,
}

impl GameResult {
    /// Returns true for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameResult::Win(mark) => Some(*mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "In progress"),
            GameResult::Win(mark) => write!(f, "{} wins", mark),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board() {
        let board: Board = "XX.OO....".parse().unwrap();
        assert_eq!(board.get(0), Some(Square::Occupied(Mark::X)));
        assert_eq!(board.get(3), Some(Square::Occupied(Mark::O)));
        assert!(board.is_empty(2));
        assert_eq!(board.empty_squares().collect::<Vec<_>>(), vec![2, 5, 6, 7, 8]);
    }

    #[test]
    fn test_parse_board_with_separators() {
        let board: Board = "xo_ | ... | -ox".parse().unwrap();
        assert_eq!(board.count(Mark::X), 2);
        assert_eq!(board.count(Mark::O), 2);
    }

    #[test]
    fn test_parse_board_rejects_bad_input() {
        assert_eq!("XX".parse::<Board>(), Err(BoardParseError::WrongLength(2)));
        assert_eq!(
            "XX.OO.....".parse::<Board>(),
            Err(BoardParseError::WrongLength(10))
        );
        assert_eq!(
            "XX.OO...Z".parse::<Board>(),
            Err(BoardParseError::InvalidChar('Z'))
        );
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let board: Board = "X...O....".parse().unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_implied_to_move() {
        assert_eq!(Board::new().implied_to_move(), Mark::X);
        let board: Board = "X........".parse().unwrap();
        assert_eq!(board.implied_to_move(), Mark::O);
    }

    #[test]
    fn test_parse_mark() {
        assert_eq!("o".parse::<Mark>(), Ok(Mark::O));
        assert_eq!(" X ".parse::<Mark>(), Ok(Mark::X));
        assert!("xo".parse::<Mark>().is_err());
    }

    #[test]
    fn test_out_of_range_is_not_empty() {
        assert!(!Board::new().is_empty(9));
        assert_eq!(Board::new().get(9), None);
    }
}
