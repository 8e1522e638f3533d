//! One-shot position analysis.

use serde::Serialize;
use std::fmt;
use tracing::instrument;
use unbeatable_engine::{Board, GameResult, Mark, Move, Position, evaluate, search};

/// Analysis of a single position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HintReport {
    /// The analysed board.
    pub board: Board,
    /// Mark to move.
    pub to_move: Mark,
    /// Result of the position as it stands.
    pub result: GameResult,
    /// Best move, present only while the game is in progress.
    pub best: Option<Move>,
}

/// Evaluates `board` and searches it when the game is still open.
///
/// The mark to move defaults to the one implied by piece counts.
#[instrument(skip(board))]
pub fn analyse(board: &Board, to_move: Option<Mark>) -> HintReport {
    let to_move = to_move.unwrap_or_else(|| board.implied_to_move());
    let result = evaluate(board);
    let best = search(board, to_move).ok();

    HintReport {
        board: *board,
        to_move,
        result,
        best,
    }
}

fn outlook(score: i32) -> &'static str {
    match score {
        s if s > 0 => "O wins with best play",
        s if s < 0 => "X wins with best play",
        _ => "draw with best play",
    }
}

impl fmt::Display for HintReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        writeln!(f)?;
        match self.best {
            Some(best) => {
                let label = Position::from_index(best.index)
                    .map(|pos| pos.label())
                    .unwrap_or("?");
                write!(
                    f,
                    "{} to move: play {} ({}), score {} ({})",
                    self.to_move,
                    best.index + 1,
                    label,
                    best.score,
                    outlook(best.score)
                )
            }
            None => write!(f, "Game over: {}", self.result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_finds_win() {
        let board: Board = "XX.OO....".parse().unwrap();
        let report = analyse(&board, None);
        assert_eq!(report.to_move, Mark::X);
        assert_eq!(report.best.map(|m| m.index), Some(2));
        assert!(
            report
                .to_string()
                .ends_with("X to move: play 3 (Top-right), score -10 (X wins with best play)")
        );
    }

    #[test]
    fn test_hint_on_finished_board() {
        let board: Board = "XOXOXOXOX".parse().unwrap();
        let report = analyse(&board, None);
        assert_eq!(report.best, None);
        assert_eq!(report.result, GameResult::Win(Mark::X));
        assert!(report.to_string().ends_with("Game over: X wins"));
    }

    #[test]
    fn test_explicit_mark_overrides_counts() {
        // O taking 2 blocks X and forks on 5 and 6, so it ties with the
        // immediate win at 5 and the lower index is kept
        let board: Board = "XX.OO....".parse().unwrap();
        let report = analyse(&board, Some(Mark::O));
        assert_eq!(report.to_move, Mark::O);
        assert_eq!(report.best, Some(Move { index: 2, score: 10 }));
    }
}
