//! Command-line interface for unbeatable.

use clap::{Parser, Subcommand};
use unbeatable_engine::Mark;

/// Unbeatable - tic-tac-toe against a perfect minimax opponent
#[derive(Parser, Debug)]
#[command(name = "unbeatable")]
#[command(about = "Tic-tac-toe with an unbeatable AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Path to the play configuration file
        #[arg(short, long, default_value = "unbeatable.toml")]
        config: std::path::PathBuf,

        /// Two players share the terminal instead of playing the AI
        #[arg(long)]
        pvp: bool,

        /// Mark the AI plays (X or O)
        #[arg(long)]
        ai_mark: Option<Mark>,

        /// Pause before the AI moves, in milliseconds
        #[arg(long)]
        ai_delay_ms: Option<u64>,
    },

    /// Evaluate a position and suggest the best move
    Hint {
        /// Board as nine cells in row-major order, e.g. "XX.OO...."
        #[arg(short, long)]
        board: String,

        /// Mark to move (defaults to the one implied by piece counts)
        #[arg(short, long)]
        to_move: Option<Mark>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_overrides() {
        let cli = Cli::parse_from(["unbeatable", "play", "--pvp", "--ai-mark", "x"]);
        match cli.command {
            Command::Play { pvp, ai_mark, .. } => {
                assert!(pvp);
                assert_eq!(ai_mark, Some(Mark::X));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_hint() {
        let cli = Cli::parse_from(["unbeatable", "hint", "--board", "XX.OO....", "--json"]);
        match cli.command {
            Command::Hint { board, to_move, json } => {
                assert_eq!(board, "XX.OO....");
                assert_eq!(to_move, None);
                assert!(json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_mark() {
        assert!(Cli::try_parse_from(["unbeatable", "play", "--ai-mark", "z"]).is_err());
    }
}
