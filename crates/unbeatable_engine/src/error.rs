//! Engine error types.

use crate::invariants::InvariantViolation;
use crate::types::GameResult;

/// Error applying a move to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// The index is outside 0-8.
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the index is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(usize),

    /// The game has already reached a terminal result.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for InvalidMove {}

/// Search was asked for a move with no in-progress turn to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("No move to search: game state is {}", result)]
pub struct InvalidState {
    /// Result observed when the request was made.
    pub result: GameResult,
}

impl InvalidState {
    /// Creates an error for the observed result.
    pub fn new(result: GameResult) -> Self {
        Self { result }
    }
}

impl std::error::Error for InvalidState {}

/// A stored session breaks one or more session invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSession {
    /// Every invariant the session violates.
    pub violations: Vec<InvariantViolation>,
}

impl std::fmt::Display for InvalidSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Inconsistent session:")?;
        for (i, violation) in self.violations.iter().enumerate() {
            let sep = if i == 0 { " " } else { "; " };
            write!(f, "{}{}", sep, violation.description)?;
        }
        Ok(())
    }
}

impl std::error::Error for InvalidSession {}

/// Any error raised by a session operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum EngineError {
    /// A move was rejected.
    #[display("Invalid move: {}", _0)]
    InvalidMove(InvalidMove),

    /// Search was requested at the wrong time.
    #[display("Invalid state: {}", _0)]
    InvalidState(InvalidState),
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::InvalidMove(e) => Some(e),
            EngineError::InvalidState(e) => Some(e),
        }
    }
}
