//! Play configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};
use unbeatable_engine::{GameMode, Mark};

/// Opponent selection as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum ModeSetting {
    /// Play against the AI.
    #[default]
    #[display("ai")]
    Ai,
    /// Two humans at one terminal.
    #[display("pvp")]
    Pvp,
}

/// Configuration for a terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Opponent selection.
    #[serde(default)]
    mode: ModeSetting,

    /// Mark the AI plays in AI mode.
    #[serde(default = "default_ai_mark")]
    ai_mark: Mark,

    /// Pause before the AI answers, in milliseconds.
    #[serde(default = "default_ai_delay_ms")]
    ai_delay_ms: u64,
}

fn default_ai_mark() -> Mark {
    Mark::O
}

fn default_ai_delay_ms() -> u64 {
    500
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            mode: ModeSetting::default(),
            ai_mark: default_ai_mark(),
            ai_delay_ms: default_ai_delay_ms(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, ai_mark = %config.ai_mark, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(
        mut self,
        pvp: bool,
        ai_mark: Option<Mark>,
        ai_delay_ms: Option<u64>,
    ) -> Self {
        if pvp {
            self.mode = ModeSetting::Pvp;
        }
        if let Some(mark) = ai_mark {
            self.ai_mark = mark;
        }
        if let Some(delay) = ai_delay_ms {
            self.ai_delay_ms = delay;
        }
        self
    }

    /// Engine game mode for this configuration.
    pub fn game_mode(&self) -> GameMode {
        match self.mode {
            ModeSetting::Ai => GameMode::VsAi { ai: self.ai_mark },
            ModeSetting::Pvp => GameMode::TwoPlayer,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_popup() {
        let config = PlayConfig::default();
        assert_eq!(config.game_mode(), GameMode::VsAi { ai: Mark::O });
        assert_eq!(*config.ai_delay_ms(), 500);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: PlayConfig = toml::from_str("mode = \"pvp\"").unwrap();
        assert_eq!(config.game_mode(), GameMode::TwoPlayer);
        assert_eq!(*config.ai_mark(), Mark::O);
    }

    #[test]
    fn test_overrides() {
        let config = PlayConfig::default().with_overrides(false, Some(Mark::X), Some(0));
        assert_eq!(config.game_mode(), GameMode::VsAi { ai: Mark::X });
        assert_eq!(*config.ai_delay_ms(), 0);
        let config = config.with_overrides(true, None, None);
        assert_eq!(config.game_mode(), GameMode::TwoPlayer);
    }
}
