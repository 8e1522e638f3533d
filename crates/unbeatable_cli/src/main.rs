//! Unbeatable - terminal tic-tac-toe.

use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use unbeatable_cli::{Cli, Command, PlayConfig, Terminal, analyse};
use unbeatable_engine::{Board, Mark};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            pvp,
            ai_mark,
            ai_delay_ms,
        } => run_play(&config, pvp, ai_mark, ai_delay_ms),
        Command::Hint {
            board,
            to_move,
            json,
        } => run_hint(&board, to_move, json),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip_all, fields(config_path = %config.display()))]
fn run_play(
    config: &std::path::Path,
    pvp: bool,
    ai_mark: Option<Mark>,
    ai_delay_ms: Option<u64>,
) -> Result<()> {
    let config = PlayConfig::load_or_default(config)?.with_overrides(pvp, ai_mark, ai_delay_ms);
    info!(mode = %config.game_mode(), "Starting game");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut terminal = Terminal::new(
        stdin.lock(),
        stdout.lock(),
        config.game_mode(),
        Duration::from_millis(*config.ai_delay_ms()),
    );
    terminal.run()
}

/// Print the analysis of a single position
#[instrument]
fn run_hint(board: &str, to_move: Option<Mark>, json: bool) -> Result<()> {
    let board: Board = board.parse()?;
    let report = analyse(&board, to_move);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
