//! Unbeatable tic-tac-toe engine.
//!
//! Board representation, win/draw detection, and an exhaustive minimax
//! search for the AI's move.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`apply_move`] and [`evaluate`] are pure
//!   functions over `Copy` values
//! - **Move search**: [`Minimax`] scores every continuation of a position;
//!   [`search`] uses the default O-maximizes convention
//! - **Session**: [`GameSession`] owns one game's state and turn order
//!
//! # Example
//!
//! ```
//! use unbeatable_engine::{GameMode, GameResult, GameSession};
//!
//! let mut session = GameSession::new(GameMode::default());
//! session.play(4).unwrap();
//! let reply = session.ai_move().unwrap();
//! assert_ne!(reply.index, 4);
//! assert_eq!(session.result(), GameResult::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod invariants;
mod position;
pub mod rules;
mod search;
mod session;
mod types;

pub use error::{EngineError, InvalidMove, InvalidSession, InvalidState};
pub use position::Position;
pub use rules::{LINES, Line, apply_move, check_winner, evaluate, is_full};
pub use search::{DRAW_SCORE, Minimax, Move, WIN_SCORE, search};
pub use session::{GameMode, GameSession};
pub use types::{Board, BoardParseError, CELLS, GameResult, Mark, Square};
