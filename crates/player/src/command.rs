//! Parsing of the lines typed at the prompt.

use chess_core::coord_to_sq;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move text such as `e2e4`, `e2 e4` or `e7e8n`, resolved against the game later.
    Move(String),
    /// Show where the piece on this square can go.
    Moves(u8),
    NewGame,
    ToggleBot,
    Flip,
    Undo,
    Eval,
    History,
    Board,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty input")]
    Empty,
    #[error("'{0}' is not a square")]
    BadSquare(String),
    #[error("unknown command '{0}', type 'help'")]
    Unknown(String),
}

pub const HELP: &str = "\
Commands:
  e2e4 | e2 e4     move a piece (pawns promote to a queen unless e7e8n etc.)
  moves <square>   highlight where the piece on <square> can go
  new              start a new game
  bot              switch the bot on or off
  flip             turn the board around (you take the other color)
  undo             take back your last move and the bot's reply
  eval             evaluation from the bot's side
  history          moves played so far
  board            redraw the board
  help             this text
  quit             leave";

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Err(CommandError::Empty);
    };

    let cmd = match first.to_ascii_lowercase().as_str() {
        "new" => Command::NewGame,
        "bot" => Command::ToggleBot,
        "flip" => Command::Flip,
        "undo" => Command::Undo,
        "eval" => Command::Eval,
        "history" => Command::History,
        "board" => Command::Board,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "moves" => {
            let square = words.next().unwrap_or_default();
            let sq = coord_to_sq(square).ok_or_else(|| CommandError::BadSquare(square.to_string()))?;
            Command::Moves(sq)
        }
        word if looks_like_move(word) => Command::Move(line.to_string()),
        word => return Err(CommandError::Unknown(word.to_string())),
    };
    Ok(cmd)
}

/// A move starts with a square; the rest is checked against the legal moves.
fn looks_like_move(word: &str) -> bool {
    word.get(0..2).and_then(coord_to_sq).is_some()
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod command_tests;
