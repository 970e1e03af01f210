//! Error types for position setup and move application.

use thiserror::Error;

use crate::types::Move;

/// Reasons a FEN string can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("expected at least 4 FEN fields, found {0}")]
    MissingFields(usize),
    #[error("expected 8 ranks in board field, found {0}")]
    RankCount(usize),
    #[error("rank {rank} does not describe exactly 8 files")]
    RankLength { rank: usize },
    #[error("invalid piece character '{0}'")]
    PieceChar(char),
    #[error("invalid side to move '{0}'")]
    SideToMove(String),
    #[error("invalid castling character '{0}'")]
    CastlingChar(char),
    #[error("invalid en-passant square '{0}'")]
    EnPassant(String),
    #[error("invalid move counter '{0}'")]
    Counter(String),
    #[error("{0:?} has no king on the board")]
    MissingKing(crate::types::Color),
}

/// Reasons the rules engine refuses to play a move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("illegal move {mv}")]
    Illegal { mv: Move },
    #[error("no piece of the side to move on {square}")]
    NoPieceOnSquare { square: String },
    #[error("could not parse move '{0}'")]
    Unparsable(String),
}
