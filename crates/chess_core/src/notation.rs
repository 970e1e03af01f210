//! Coordinate (UCI-style) and Standard Algebraic Notation for moves.

use crate::board::Position;
use crate::error::MoveError;
use crate::movegen::{has_legal_move, legal_moves};
use crate::types::*;

pub fn move_to_uci(mv: Move) -> String {
    mv.to_string()
}

/// Parses `e2e4`, `e2 e4`, `e2-e4` or `e7e8n` against the legal moves of `pos`.
///
/// A missing promotion piece defaults to a queen.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Result<Move, MoveError> {
    let compact: String = txt
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    let unparsable = || MoveError::Unparsable(txt.to_string());

    if !(4..=5).contains(&compact.len()) || !compact.is_ascii() {
        return Err(unparsable());
    }
    let from = coord_to_sq(&compact[0..2]).ok_or_else(unparsable)?;
    let to = coord_to_sq(&compact[2..4]).ok_or_else(unparsable)?;
    let promo = match compact[4..].chars().next() {
        Some(ch) => Some(
            PieceKind::from_letter(ch)
                .filter(|k| PieceKind::PROMOTIONS.contains(k))
                .ok_or_else(unparsable)?,
        ),
        None => None,
    };

    let candidates: Vec<Move> = legal_moves(pos)
        .into_iter()
        .filter(|m| m.from == from && m.to == to)
        .collect();
    let wanted = match candidates.first() {
        Some(m) if m.promo.is_some() => promo.or(Some(PieceKind::Queen)),
        _ => promo,
    };
    candidates
        .into_iter()
        .find(|m| m.promo == wanted)
        .ok_or(MoveError::Illegal {
            mv: Move {
                promo: wanted,
                ..Move::new(from, to)
            },
        })
}

/// SAN for `mv`, which must be legal in `pos`.
pub fn to_san(pos: &Position, mv: Move) -> String {
    let Some(piece) = pos.piece_at(mv.from) else {
        return move_to_uci(mv);
    };

    let mut san = if mv.is_castle {
        let side = if mv.to > mv.from { "O-O" } else { "O-O-O" };
        side.to_string()
    } else {
        body(pos, mv, piece)
    };

    let mut after = pos.clone();
    after.make_move(mv);
    if after.in_check(after.side_to_move) {
        san.push(if has_legal_move(&after) { '+' } else { '#' });
    }
    san
}

fn body(pos: &Position, mv: Move, piece: Piece) -> String {
    let mut san = String::new();
    let is_capture = mv.is_en_passant || pos.piece_at(mv.to).is_some();

    if piece.kind == PieceKind::Pawn {
        if is_capture {
            san.push((b'a' + (mv.from % 8)) as char);
        }
    } else {
        san.push(piece.kind.letter());
        // Other pieces of the same kind that can reach the same square.
        let rivals: Vec<u8> = legal_moves(pos)
            .into_iter()
            .filter(|m| {
                m.to == mv.to
                    && m.from != mv.from
                    && pos.piece_at(m.from).is_some_and(|pc| pc.kind == piece.kind)
            })
            .map(|m| m.from)
            .collect();
        if !rivals.is_empty() {
            let file_unique = rivals.iter().all(|&s| file_of(s) != file_of(mv.from));
            let rank_unique = rivals.iter().all(|&s| rank_of(s) != rank_of(mv.from));
            let coord = sq_to_coord(mv.from);
            if file_unique {
                san.push_str(&coord[..1]);
            } else if rank_unique {
                san.push_str(&coord[1..]);
            } else {
                san.push_str(&coord);
            }
        }
    }

    if is_capture {
        san.push('x');
    }
    san.push_str(&sq_to_coord(mv.to));
    if let Some(promo) = mv.promo {
        san.push('=');
        san.push(promo.letter());
    }
    san
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
