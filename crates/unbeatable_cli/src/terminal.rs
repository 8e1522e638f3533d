//! Line-oriented terminal front-end.
//!
//! Renders the board as text, reads one command per line, and asks the
//! engine for the AI's reply when it is the AI's turn.

use anyhow::Result;
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{debug, info, instrument};
use unbeatable_engine::{GameMode, GameResult, GameSession, InvalidMove, Mark, Position};

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place a mark.
    Play(Position),
    /// Start over.
    Reset,
    /// Switch between AI and two-player mode.
    ToggleMode,
    /// Leave the game.
    Quit,
    /// Blank line.
    Empty,
    /// Anything else.
    Unknown,
}

impl Input {
    /// Parses a line of input.
    pub fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "" => Input::Empty,
            "q" | "quit" | "exit" => Input::Quit,
            "r" | "reset" => Input::Reset,
            "m" | "mode" => Input::ToggleMode,
            other => Position::from_label_or_number(other)
                .map(Input::Play)
                .unwrap_or(Input::Unknown),
        }
    }
}

/// Interactive game over a reader and a writer.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    session: GameSession,
    ai_mark: Mark,
    ai_delay: Duration,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Creates a terminal game in `mode`.
    ///
    /// `ai_mark` is used when toggling from two-player back to AI mode.
    pub fn new(input: R, output: W, mode: GameMode, ai_delay: Duration) -> Self {
        Self {
            input,
            output,
            session: GameSession::new(mode),
            ai_mark: mode.ai_mark().unwrap_or(Mark::O),
            ai_delay,
        }
    }

    /// Returns the session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Runs until the player quits or input ends.
    #[instrument(skip(self), fields(mode = %self.session.mode()))]
    pub fn run(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Tic-tac-toe, {}. Enter 1-9 or a position name; r resets, m switches mode, q quits.",
            self.session.mode()
        )?;
        self.render()?;

        loop {
            if self.session.is_ai_turn() {
                self.ai_turn()?;
                continue;
            }

            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("Input closed");
                break;
            }

            match Input::parse(&line) {
                Input::Quit => break,
                Input::Empty => continue,
                Input::Reset => {
                    self.session.reset();
                    self.render()?;
                }
                Input::ToggleMode => self.toggle_mode()?,
                Input::Play(pos) => match self.session.play(pos.to_index()) {
                    Ok(result) => self.after_move(result)?,
                    Err(e) => writeln!(self.output, "{}", describe_rejection(&e))?,
                },
                Input::Unknown => {
                    writeln!(self.output, "Unrecognized input: {}", line.trim())?;
                }
            }
        }

        info!(result = %self.session.result(), "Leaving game");
        Ok(())
    }

    fn ai_turn(&mut self) -> Result<()> {
        writeln!(self.output, "AI is thinking...")?;
        self.output.flush()?;
        if !self.ai_delay.is_zero() {
            std::thread::sleep(self.ai_delay);
        }

        let best = self.session.ai_move()?;
        if let Some(pos) = Position::from_index(best.index) {
            writeln!(self.output, "AI plays {}", pos)?;
        }
        let result = self.session.result();
        self.after_move(result)
    }

    fn toggle_mode(&mut self) -> Result<()> {
        let mode = match self.session.mode() {
            GameMode::VsAi { .. } => GameMode::TwoPlayer,
            GameMode::TwoPlayer => GameMode::VsAi { ai: self.ai_mark },
        };
        self.session.set_mode(mode);
        writeln!(self.output, "Mode: {}", mode)?;
        self.render()
    }

    fn after_move(&mut self, result: GameResult) -> Result<()> {
        self.render()?;
        match result {
            GameResult::InProgress => Ok(()),
            GameResult::Win(mark) => {
                writeln!(self.output, "{} Wins! Press r to play again or q to quit.", mark)?;
                Ok(())
            }
            GameResult::Draw => {
                writeln!(self.output, "It's a draw! Press r to play again or q to quit.")?;
                Ok(())
            }
        }
    }

    fn render(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.session.board())?;
        writeln!(self.output)?;
        if !self.session.is_over() && !self.session.is_ai_turn() {
            writeln!(self.output, "Your move: {}", self.session.to_move())?;
        }
        Ok(())
    }
}

/// Words a rejected move using the 1-based numbers shown on the board.
fn describe_rejection(err: &InvalidMove) -> String {
    match *err {
        InvalidMove::Occupied(index) => match Position::from_index(index) {
            Some(pos) => format!("Square {} ({}) is already occupied", index + 1, pos),
            None => format!("Square {} is already occupied", index + 1),
        },
        InvalidMove::OutOfRange(index) => {
            format!("Square {} is not on the board (enter 1-9)", index + 1)
        }
        InvalidMove::GameOver => "Game is already over. Press r to play again.".to_string(),
    }
}
