//! Player settings: defaults, then an optional TOML file, then CLI flags.

use std::fs;
use std::path::{Path, PathBuf};

use chess_core::Color;
use minimax_engine::{SearchConfig, SearchConfigError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Delay before the bot starts thinking, as in the browser version.
pub const DEFAULT_BOT_DELAY_MS: u64 = 500;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Search(#[from] SearchConfigError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Color shown at the bottom of the board; the bot plays the other one.
    pub human_color: Color,
    pub bot_enabled: bool,
    pub bot_delay_ms: u64,
    pub search: SearchConfig,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            human_color: Color::White,
            bot_enabled: true,
            bot_delay_ms: DEFAULT_BOT_DELAY_MS,
            search: SearchConfig::default(),
        }
    }
}

/// Values given on the command line. `None` leaves the file's value alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub human_color: Option<Color>,
    pub depth: Option<u8>,
    pub no_bot: bool,
}

impl PlayerConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.search.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Reads `path` if given, then applies the command line on top.
    pub fn resolve(path: Option<&Path>, overrides: Overrides) -> Result<Self, ConfigError> {
        let base = match path {
            Some(p) => Self::load(p)?,
            None => Self::default(),
        };
        base.with_overrides(overrides)
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Self, ConfigError> {
        if let Some(color) = overrides.human_color {
            self.human_color = color;
        }
        if let Some(depth) = overrides.depth {
            self.search.depth = depth;
        }
        if overrides.no_bot {
            self.bot_enabled = false;
        }
        self.search.validate()?;
        Ok(self)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
