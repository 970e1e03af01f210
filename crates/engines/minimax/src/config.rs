use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Plies searched by default, counting the bot's own root move.
pub const DEFAULT_DEPTH: u8 = 2;

/// Deepest search accepted from configuration.
pub const MAX_DEPTH: u8 = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchConfigError {
    #[error("search depth must be between 1 and {MAX_DEPTH}, got {0}")]
    Depth(u8),
}

/// Search settings, loadable from a `[search]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Total plies, root move included.
    pub depth: u8,
    /// Sort root moves by (from, to, promotion) before choosing, so ties
    /// break the same way whatever order the rules engine produced.
    pub canonical_order: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            canonical_order: false,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(depth: u8) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), SearchConfigError> {
        if (1..=MAX_DEPTH).contains(&self.depth) {
            Ok(())
        } else {
            Err(SearchConfigError::Depth(self.depth))
        }
    }
}
