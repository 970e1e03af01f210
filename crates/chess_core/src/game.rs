//! A game in progress: a position plus everything needed to take moves back
//! and to detect repetition.

use crate::board::{Position, Undo};
use crate::error::{FenError, MoveError};
use crate::movegen::{has_legal_move, legal_moves_from_into};
use crate::notation::to_san;
use crate::types::*;
use crate::RulesEngine;

/// Why a finished game was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    Stalemate,
    FiftyMoveRule,
    ThreefoldRepetition,
    InsufficientMaterial,
}

/// Game result as seen from the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Color },
    Draw(DrawReason),
}

/// Position with an undo stack and a hash history.
///
/// Every [`Game::apply_move`] pushes onto both stacks and every
/// [`Game::undo_last_move`] pops both, so apply followed by undo leaves the
/// game equal (`==`) to what it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    position: Position,
    played: Vec<(Move, Undo)>,
    /// Hash of every position reached, starting with the initial one.
    hashes: Vec<u64>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::from_position(Position::startpos())
    }

    pub fn from_position(position: Position) -> Self {
        let hashes = vec![position.position_hash()];
        Self {
            position,
            played: Vec::new(),
            hashes,
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Position::from_fen(fen).map(Self::from_position)
    }

    /// Back to the standard starting position with an empty history.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn fen(&self) -> String {
        self.position.to_fen()
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> Vec<Move> {
        self.played.iter().map(|(mv, _)| *mv).collect()
    }

    /// Moves played so far in Standard Algebraic Notation.
    pub fn san_history(&self) -> Vec<String> {
        let mut replay = self.clone();
        while replay.undo_last_move().is_some() {}

        let mut out = Vec::with_capacity(self.played.len());
        for (mv, _) in &self.played {
            out.push(to_san(&replay.position, *mv));
            replay.push(*mv);
        }
        out
    }

    pub fn status(&self) -> GameStatus {
        if !has_legal_move(&self.position) {
            return if self.position.in_check(self.position.side_to_move) {
                GameStatus::Checkmate {
                    winner: self.position.side_to_move.other(),
                }
            } else {
                GameStatus::Draw(DrawReason::Stalemate)
            };
        }
        if self.position.is_fifty_move_draw() {
            GameStatus::Draw(DrawReason::FiftyMoveRule)
        } else if self.repetitions() >= 3 {
            GameStatus::Draw(DrawReason::ThreefoldRepetition)
        } else if self.position.is_insufficient_material() {
            GameStatus::Draw(DrawReason::InsufficientMaterial)
        } else {
            GameStatus::InProgress
        }
    }

    /// How often the current position has occurred, counting itself.
    pub fn repetitions(&self) -> usize {
        let current = self.position.position_hash();
        self.hashes.iter().filter(|&&h| h == current).count()
    }

    fn push(&mut self, mv: Move) {
        let undo = self.position.make_move(mv);
        self.played.push((mv, undo));
        self.hashes.push(self.position.position_hash());
    }
}

impl RulesEngine for Game {
    fn legal_moves(&self, from: Option<u8>) -> Vec<Move> {
        let mut scratch = self.position.clone();
        let mut out = Vec::with_capacity(64);
        legal_moves_from_into(&mut scratch, from, &mut out);
        out
    }

    /// Plays `mv` if it matches a legal move on from, to and promotion.
    /// Castling and en-passant flags are taken from the generated move.
    fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let owner = self.position.piece_at(mv.from);
        if owner.is_none_or(|pc| pc.color != self.position.side_to_move) {
            return Err(MoveError::NoPieceOnSquare {
                square: sq_to_coord(mv.from),
            });
        }
        let legal = self
            .legal_moves(Some(mv.from))
            .into_iter()
            .find(|m| m.to == mv.to && m.promo == mv.promo)
            .ok_or(MoveError::Illegal { mv })?;
        self.push(legal);
        Ok(())
    }

    fn undo_last_move(&mut self) -> Option<Move> {
        let (mv, undo) = self.played.pop()?;
        self.hashes.pop();
        self.position.unmake_move(mv, undo);
        Some(mv)
    }

    fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.position.piece_at(sq)
    }

    fn is_game_over(&self) -> bool {
        self.status() != GameStatus::InProgress
    }

    fn in_check(&self) -> bool {
        self.position.in_check(self.position.side_to_move)
    }

    fn in_checkmate(&self) -> bool {
        matches!(self.status(), GameStatus::Checkmate { .. })
    }

    fn in_stalemate(&self) -> bool {
        !self.in_check() && !has_legal_move(&self.position)
    }

    fn in_threefold_repetition(&self) -> bool {
        self.repetitions() >= 3
    }

    fn has_insufficient_material(&self) -> bool {
        self.position.is_insufficient_material()
    }

    fn in_draw(&self) -> bool {
        matches!(self.status(), GameStatus::Draw(_))
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
