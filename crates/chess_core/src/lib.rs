//! Chess rules for the bot player: position, legal move generation,
//! apply/undo with history, and game-termination detection.

pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod types;
pub mod zobrist;

pub use board::*;
pub use error::{FenError, MoveError};
pub use game::{DrawReason, Game, GameStatus};
pub use movegen::*;
pub use notation::{move_to_uci, parse_uci_move, to_san};
pub use perft::perft;
pub use types::*;
pub use zobrist::ZOBRIST;

// =============================================================================
// Rules engine contract, consumed by the search
// =============================================================================

/// Operations a searcher needs from the rules of the game.
///
/// `apply_move` and `undo_last_move` mutate in place and must be exact
/// inverses: after an apply followed by an undo, every query below answers
/// exactly as before.
pub trait RulesEngine {
    /// Legal moves for the side to move, optionally only those of the piece on `from`.
    fn legal_moves(&self, from: Option<u8>) -> Vec<Move>;

    /// Plays a legal move; anything else is rejected and leaves the game untouched.
    fn apply_move(&mut self, mv: Move) -> Result<(), MoveError>;

    /// Takes back the most recent move, returning it. `None` when nothing was played.
    fn undo_last_move(&mut self) -> Option<Move>;

    fn side_to_move(&self) -> Color;

    fn piece_at(&self, sq: u8) -> Option<Piece>;

    /// Checkmate or any kind of draw.
    fn is_game_over(&self) -> bool {
        self.in_checkmate() || self.in_draw()
    }

    fn in_check(&self) -> bool;
    fn in_checkmate(&self) -> bool;
    fn in_stalemate(&self) -> bool;
    fn in_threefold_repetition(&self) -> bool;
    fn has_insufficient_material(&self) -> bool;

    /// Stalemate, fifty-move rule, threefold repetition or insufficient material.
    fn in_draw(&self) -> bool;
}
