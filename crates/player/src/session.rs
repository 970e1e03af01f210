//! State of a human-vs-bot game at the terminal.

use chess_core::{parse_uci_move, Color, Game, GameStatus, Move, MoveError, RulesEngine};
use minimax_engine::{evaluate, Score};
use thiserror::Error;

use crate::config::PlayerConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("the game is over, type 'new' to play again")]
    GameOver,
    #[error("wait for the bot to move")]
    BotToMove,
    #[error(transparent)]
    Move(#[from] MoveError),
}

/// One game plus the player's view of it
#[derive(Debug, Clone)]
pub struct Session {
    /// Game being played
    pub game: Game,
    /// Color drawn at the bottom, which is the human's color
    pub orientation: Color,
    pub bot_enabled: bool,
    /// Square picked with `moves <square>`
    pub selected_square: Option<u8>,
    /// Destinations of the selected piece
    pub legal_targets: Vec<u8>,
    /// Last move (for highlighting)
    pub last_move: Option<Move>,
}

/// Plural color name used in status lines.
pub fn side_name(color: Color) -> &'static str {
    match color {
        Color::White => "Whites",
        Color::Black => "Blacks",
    }
}

impl Session {
    pub fn new(config: &PlayerConfig) -> Self {
        Self::with_game(Game::new(), config)
    }

    pub fn with_game(game: Game, config: &PlayerConfig) -> Self {
        Self {
            game,
            orientation: config.human_color,
            bot_enabled: config.bot_enabled,
            selected_square: None,
            legal_targets: Vec::new(),
            last_move: None,
        }
    }

    pub fn human_color(&self) -> Color {
        self.orientation
    }

    /// The bot always plays the side drawn at the top.
    pub fn bot_color(&self) -> Color {
        self.orientation.other()
    }

    /// True when the bot is on, the game is running and it is the bot's move.
    pub fn is_bot_turn(&self) -> bool {
        self.bot_enabled
            && self.game.side_to_move() == self.bot_color()
            && !self.game.is_game_over()
    }

    /// Selects the piece on `sq` and returns where it can go.
    ///
    /// Only pieces of the side to move are selectable; anything else clears
    /// the selection.
    pub fn select(&mut self, sq: u8) -> &[u8] {
        self.selected_square = None;
        self.legal_targets.clear();

        let ours = self
            .game
            .piece_at(sq)
            .is_some_and(|pc| pc.color == self.game.side_to_move());
        if ours {
            self.selected_square = Some(sq);
            for mv in self.game.legal_moves(Some(sq)) {
                // Promotions share a destination.
                if !self.legal_targets.contains(&mv.to) {
                    self.legal_targets.push(mv.to);
                }
            }
        }
        &self.legal_targets
    }

    /// Plays the human's move given as `e2e4`, `e2 e4` or `e7e8n`.
    pub fn play_human(&mut self, text: &str) -> Result<Move, PlayError> {
        if self.game.is_game_over() {
            return Err(PlayError::GameOver);
        }
        if self.is_bot_turn() {
            return Err(PlayError::BotToMove);
        }
        let mv = parse_uci_move(self.game.position(), text)?;
        self.record(mv)?;
        Ok(mv)
    }

    /// Replays a move the bot chose on its own copy of the game.
    pub fn apply_bot_move(&mut self, mv: Move) -> Result<(), MoveError> {
        self.record(mv)
    }

    fn record(&mut self, mv: Move) -> Result<(), MoveError> {
        self.game.apply_move(mv)?;
        self.last_move = Some(mv);
        self.selected_square = None;
        self.legal_targets.clear();
        Ok(())
    }

    /// Resets the board and returns the greeting for the new game.
    pub fn new_game(&mut self) -> String {
        self.game.reset();
        self.selected_square = None;
        self.legal_targets.clear();
        self.last_move = None;
        format!("New game started. {}", self.turn_text())
    }

    /// Returns the new state.
    pub fn toggle_bot(&mut self) -> bool {
        self.bot_enabled = !self.bot_enabled;
        self.bot_enabled
    }

    /// Turns the board around; the human takes the other color.
    pub fn flip(&mut self) -> Color {
        self.orientation = self.orientation.other();
        self.orientation
    }

    /// Takes back moves until it is the human's turn again, or a single move
    /// when the bot is off. Returns how many plies were taken back.
    pub fn undo(&mut self) -> usize {
        let mut undone = 0;
        while self.game.undo_last_move().is_some() {
            undone += 1;
            if !self.bot_enabled || self.game.side_to_move() == self.human_color() {
                break;
            }
        }
        self.last_move = self.game.history().last().copied();
        self.selected_square = None;
        self.legal_targets.clear();
        undone
    }

    /// Position score from the bot's side.
    pub fn evaluation(&self) -> Score {
        evaluate(&self.game, self.bot_color())
    }

    fn turn_text(&self) -> String {
        let side = self.game.side_to_move();
        let who = if side == self.human_color() { "You" } else { "Bot" };
        format!("Turn of {} ({who}).", side_name(side))
    }

    pub fn status_text(&self) -> String {
        match self.game.status() {
            GameStatus::Checkmate { winner } => format!("CHECKMATE! {} WON.", side_name(winner)),
            GameStatus::Draw(_) => "GAME OVER: DRAW.".to_string(),
            GameStatus::InProgress => {
                let mut status = self.turn_text();
                if self.game.in_check() {
                    status.push_str(" The King is in CHECK!");
                }
                status
            }
        }
    }

    /// Move list as `1. W: e4 | B: e5`, one line per move pair.
    pub fn history_lines(&self) -> Vec<String> {
        self.game
            .san_history()
            .chunks(2)
            .enumerate()
            .map(|(i, pair)| match pair {
                [white, black] => format!("{}. W: {white} | B: {black}", i + 1),
                [white] => format!("{}. W: {white}", i + 1),
                _ => unreachable!("chunks(2) yields one or two moves"),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
