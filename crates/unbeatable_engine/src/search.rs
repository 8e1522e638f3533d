//! Exhaustive minimax search.
//!
//! The search walks the full game tree below a position. Each child is
//! scored on its own copy of the board, so no placement leaks between
//! sibling branches.

use crate::error::InvalidState;
use crate::rules::evaluate;
use crate::types::{Board, GameResult, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a position won by the maximizer.
pub const WIN_SCORE: i32 = 10;

/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;

/// A square index with its minimax score.
///
/// Scores are from the maximizer's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Square index (0-8).
    pub index: usize,
    /// Minimax value of playing `index`.
    pub score: i32,
}

/// Minimax searcher parameterized by the mark it optimizes for.
///
/// Terminal scores ignore depth, so a quick win and a slow win score the
/// same and ties go to the lowest index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    maximizer: Mark,
}

impl Minimax {
    /// Creates a searcher that maximizes for `maximizer`.
    pub fn new(maximizer: Mark) -> Self {
        Self { maximizer }
    }

    /// Returns the mark this searcher maximizes for.
    pub fn maximizer(&self) -> Mark {
        self.maximizer
    }

    /// Finds the best move for `to_move`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidState`] if the board is already won or drawn.
    #[instrument(skip(self, board), fields(maximizer = %self.maximizer))]
    pub fn search(&self, board: &Board, to_move: Mark) -> Result<Move, InvalidState> {
        let result = evaluate(board);
        if result.is_terminal() {
            return Err(InvalidState::new(result));
        }

        let mut nodes = 0u64;
        let best = self
            .best_move(*board, to_move, &mut nodes)
            .ok_or(InvalidState::new(result))?;

        debug!(index = best.index, score = best.score, nodes, "Search complete");
        Ok(best)
    }

    /// Minimax value of `board` with `to_move` to play.
    fn score(&self, board: Board, to_move: Mark, nodes: &mut u64) -> i32 {
        *nodes += 1;
        match evaluate(&board) {
            GameResult::Win(mark) => self.terminal_score(mark),
            GameResult::Draw => DRAW_SCORE,
            GameResult::InProgress => self
                .best_move(board, to_move, nodes)
                .map_or(DRAW_SCORE, |best| best.score),
        }
    }

    /// Best child of a non-terminal board, or `None` if no square is empty.
    fn best_move(&self, board: Board, to_move: Mark, nodes: &mut u64) -> Option<Move> {
        let maximizing = to_move == self.maximizer;
        let mut best: Option<Move> = None;

        for index in board.empty_squares() {
            let score = self.score(board.with_mark(index, to_move), to_move.opponent(), nodes);
            let improves = match best {
                None => true,
                Some(current) if maximizing => score > current.score,
                Some(current) => score < current.score,
            };
            if improves {
                best = Some(Move { index, score });
            }
        }

        best
    }

    fn terminal_score(&self, winner: Mark) -> i32 {
        if winner == self.maximizer {
            WIN_SCORE
        } else {
            -WIN_SCORE
        }
    }
}

/// O maximizes, X minimizes.
impl Default for Minimax {
    fn default() -> Self {
        Self::new(Mark::O)
    }
}

/// Finds the best move for `to_move` with O as the maximizer.
///
/// # Errors
///
/// Returns [`InvalidState`] if the board is already won or drawn.
pub fn search(board: &Board, to_move: Mark) -> Result<Move, InvalidState> {
    Minimax::default().search(board, to_move)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_immediate_win() {
        let board: Board = "XX.OO....".parse().unwrap();
        let best = search(&board, Mark::X).unwrap();
        assert_eq!(best, Move { index: 2, score: -WIN_SCORE });
    }

    #[test]
    fn test_o_completes_row() {
        let board: Board = "XX.OO.X..".parse().unwrap();
        let best = search(&board, Mark::O).unwrap();
        assert_eq!(best, Move { index: 5, score: WIN_SCORE });
    }

    #[test]
    fn test_blocks_threat() {
        // X threatens 2-5-8; O must take 8 and then holds the draw
        let board: Board = "..X.OX...".parse().unwrap();
        let best = search(&board, Mark::O).unwrap();
        assert_eq!(best, Move { index: 8, score: DRAW_SCORE });
    }

    #[test]
    fn test_terminal_board_rejected() {
        let board: Board = "XXXOO....".parse().unwrap();
        let err = search(&board, Mark::O).unwrap_err();
        assert_eq!(err.result, GameResult::Win(Mark::X));

        let drawn: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(search(&drawn, Mark::O).unwrap_err().result, GameResult::Draw);
    }

    #[test]
    fn test_last_square() {
        let board: Board = "XOXXOOOX.".parse().unwrap();
        let best = search(&board, Mark::X).unwrap();
        assert_eq!(best.index, 8);
    }

    #[test]
    fn test_equal_wins_tie_to_lowest_index() {
        // O wins with either 2 or 6
        let board: Board = "OO.OXX.XX".parse().unwrap();
        let best = search(&board, Mark::O).unwrap();
        assert_eq!(best, Move { index: 2, score: WIN_SCORE });
    }

    #[test]
    fn test_lost_position_does_not_delay_loss() {
        // Every O reply loses; without depth weighting the lowest index wins the tie
        let board: Board = "XO..X....".parse().unwrap();
        let best = search(&board, Mark::O).unwrap();
        assert_eq!(best, Move { index: 2, score: -WIN_SCORE });
    }

    #[test]
    fn test_maximizer_is_symmetric() {
        let board: Board = "X...O....".parse().unwrap();
        let as_o = Minimax::new(Mark::O).search(&board, Mark::X).unwrap();
        let as_x = Minimax::new(Mark::X).search(&board, Mark::X).unwrap();
        assert_eq!(as_o.index, as_x.index);
        assert_eq!(as_o.score, -as_x.score);
    }
}
