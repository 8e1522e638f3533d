//! Terminal front-end for the unbeatable tic-tac-toe engine.
//!
//! - **Config**: TOML play settings with command-line overrides
//! - **Hint**: one-shot analysis of a position
//! - **Terminal**: interactive line-oriented game loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod hint;
mod terminal;

pub use cli::{Cli, Command};
pub use config::{ConfigError, ModeSetting, PlayConfig};
pub use hint::{HintReport, analyse};
pub use terminal::{Input, Terminal};
