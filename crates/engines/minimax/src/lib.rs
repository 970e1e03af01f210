//! Minimax Chess Bot
//!
//! Picks the computer player's move in a human-vs-bot game:
//! - Material + pawn/knight piece-square evaluation, scored for the bot
//! - Fixed-depth minimax with alpha-beta pruning
//! - Decisive outcomes as `Score::Win` / `Score::Loss` rather than numbers
//!
//! The search plays and takes back moves in place on a [`RulesEngine`];
//! the bot's color is always passed in explicitly.

mod config;
mod eval;
mod score;
mod search;

use chess_core::{Color, Move, MoveError, RulesEngine};

pub use config::{SearchConfig, SearchConfigError, DEFAULT_DEPTH, MAX_DEPTH};
pub use eval::{evaluate, piece_value, positional_bonus, PIECE_VALUES};
pub use score::Score;
pub use search::{choose_bot_move, decide, search, AppliedMove, RootDecision};

/// Bot wrapper that keeps its configuration and the last decision it made.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    config: SearchConfig,
    last: Option<RootDecision>,
}

impl MinimaxEngine {
    pub fn new(config: SearchConfig) -> Result<Self, SearchConfigError> {
        config.validate()?;
        Ok(Self { config, last: None })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Chooses and plays the move for `bot`. `Ok(None)` when there is none.
    pub fn play<R: RulesEngine + ?Sized>(
        &mut self,
        rules: &mut R,
        bot: Color,
    ) -> Result<Option<Move>, MoveError> {
        self.last = decide(rules, bot, &self.config)?;
        search::commit(rules, self.last, &self.config)
    }

    /// Decision behind the most recent [`MinimaxEngine::play`], if it found a move.
    pub fn last_decision(&self) -> Option<&RootDecision> {
        self.last.as_ref()
    }

    pub fn new_game(&mut self) {
        self.last = None;
    }

    pub fn name(&self) -> &str {
        "Minimax v1.0"
    }
}
