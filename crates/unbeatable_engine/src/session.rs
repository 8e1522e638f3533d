//! Game session: one game's state, owned by the caller.

use crate::error::{EngineError, InvalidMove, InvalidSession, InvalidState};
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::rules::{apply_move, evaluate};
use crate::search::{Minimax, Move};
use crate::types::{Board, GameResult, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Who plays which mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// One human against the AI; the AI plays `ai`.
    VsAi {
        /// Mark assigned to the AI.
        ai: Mark,
    },
    /// Two humans share the board.
    TwoPlayer,
}

impl GameMode {
    /// Returns the AI's mark, if this mode has an AI.
    pub fn ai_mark(&self) -> Option<Mark> {
        match self {
            GameMode::VsAi { ai } => Some(*ai),
            GameMode::TwoPlayer => None,
        }
    }
}

/// AI plays O.
impl Default for GameMode {
    fn default() -> Self {
        GameMode::VsAi { ai: Mark::O }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::VsAi { ai } => write!(f, "vs AI (AI plays {})", ai),
            GameMode::TwoPlayer => write!(f, "two players"),
        }
    }
}

/// A single game in progress or finished.
///
/// X always moves first. Once the result is terminal, every move is
/// rejected until [`GameSession::reset`].
///
/// Deserializing checks the session invariants, so a stored board that
/// disagrees with its history is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord")]
pub struct GameSession {
    pub(crate) board: Board,
    pub(crate) to_move: Mark,
    pub(crate) result: GameResult,
    pub(crate) mode: GameMode,
    pub(crate) history: Vec<usize>,
}

/// Unchecked wire form of [`GameSession`].
#[derive(Deserialize)]
struct SessionRecord {
    board: Board,
    to_move: Mark,
    result: GameResult,
    mode: GameMode,
    history: Vec<usize>,
}

impl TryFrom<SessionRecord> for GameSession {
    type Error = InvalidSession;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        let session = Self {
            board: record.board,
            to_move: record.to_move,
            result: record.result,
            mode: record.mode,
            history: record.history,
        };
        SessionInvariants::check_all(&session)
            .map_err(|violations| InvalidSession { violations })?;
        Ok(session)
    }
}

impl GameSession {
    /// Creates a new game in the given mode.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            result: GameResult::InProgress,
            mode,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move.
    ///
    /// Once the game is over this is the mark that made the last move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the current result.
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the indices played, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.result.is_terminal()
    }

    /// Returns true when the AI should move next.
    pub fn is_ai_turn(&self) -> bool {
        !self.is_over() && self.mode.ai_mark() == Some(self.to_move)
    }

    /// Plays the mark to move at `index`.
    ///
    /// The turn passes to the opponent only if the game continues. On
    /// error the session is unchanged.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn play(&mut self, index: usize) -> Result<GameResult, InvalidMove> {
        if self.is_over() {
            warn!(index, "Move rejected: game already over");
            return Err(InvalidMove::GameOver);
        }

        let board = apply_move(&self.board, index, self.to_move).inspect_err(|e| {
            warn!(index, error = %e, "Move rejected");
        })?;

        self.board = board;
        self.history.push(index);
        self.result = evaluate(&self.board);
        if !self.result.is_terminal() {
            self.to_move = self.to_move.opponent();
        } else {
            info!(result = %self.result, moves = self.history.len(), "Game over");
        }

        debug_assert!(
            SessionInvariants::check_all(self).is_ok(),
            "Session invariants violated: {:?}",
            SessionInvariants::check_all(self)
        );

        Ok(self.result)
    }

    /// Searches for and plays the AI's move.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidState`] if the game is over or it is
    /// not the AI's turn.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn ai_move(&mut self) -> Result<Move, EngineError> {
        let Some(ai) = self.mode.ai_mark().filter(|_| self.is_ai_turn()) else {
            return Err(InvalidState::new(self.result).into());
        };

        let best = Minimax::new(ai).search(&self.board, self.to_move)?;
        debug!(index = best.index, score = best.score, "AI chose move");
        self.play(best.index)?;
        Ok(best)
    }

    /// Returns to an empty board with X to move, keeping the mode.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        *self = Self::new(self.mode);
    }

    /// Switches mode and starts a new game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
