use crate::board::{DIAGONALS, KING_DELTAS, KNIGHT_DELTAS, ORTHOGONALS, Position, last_rank};
use crate::types::*;

/// Generate all legal moves, returning a freshly allocated vector.
/// Internally delegates to `legal_moves_into`, cloning the position only once.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
///
/// Order is deterministic: squares a1..h8, then per-piece direction order.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    legal_moves_from_into(pos, None, out);
}

/// Like [`legal_moves_into`], restricted to the piece on `only` when given.
pub fn legal_moves_from_into(pos: &mut Position, only: Option<u8>, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves(pos, only, out);

    let mover = pos.side_to_move;
    // Filter illegal moves in-place by playing them on the mutable position.
    out.retain(|&mv| {
        let undo = pos.make_move(mv);
        let illegal = pos.in_check(mover);
        pos.unmake_move(mv, undo);
        !illegal
    });
}

/// True when the side to move has at least one legal move.
pub fn has_legal_move(pos: &Position) -> bool {
    let mut tmp = pos.clone();
    let mut pseudo = Vec::with_capacity(64);
    pseudo_moves(&tmp, None, &mut pseudo);
    let mover = tmp.side_to_move;
    pseudo.into_iter().any(|mv| {
        let undo = tmp.make_move(mv);
        let legal = !tmp.in_check(mover);
        tmp.unmake_move(mv, undo);
        legal
    })
}

fn pseudo_moves(pos: &Position, only: Option<u8>, out: &mut Vec<Move>) {
    let us = pos.side_to_move;
    let ours = pos
        .pieces()
        .filter(|&(s, pc)| pc.color == us && only.is_none_or(|o| o == s));
    for (from, pc) in ours {
        match pc.kind {
            PieceKind::Pawn => gen_pawn(pos, from, us, out),
            PieceKind::Knight => gen_steps(pos, from, us, &KNIGHT_DELTAS, out),
            PieceKind::Bishop => gen_slider(pos, from, us, &DIAGONALS, out),
            PieceKind::Rook => gen_slider(pos, from, us, &ORTHOGONALS, out),
            PieceKind::Queen => {
                gen_slider(pos, from, us, &DIAGONALS, out);
                gen_slider(pos, from, us, &ORTHOGONALS, out);
            }
            PieceKind::King => {
                gen_steps(pos, from, us, &KING_DELTAS, out);
                gen_castle(pos, from, us, out);
            }
        }
    }
}

/// Pushes a pawn move, expanding it into all promotions on the last rank.
fn push_pawn_move(from: u8, to: u8, c: Color, out: &mut Vec<Move>) {
    if rank_of(to) == last_rank(c) {
        out.extend(
            PieceKind::PROMOTIONS
                .iter()
                .map(|&pk| Move::promotion(from, to, pk)),
        );
    } else {
        out.push(Move::new(from, to));
    }
}

fn gen_pawn(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    let dir = c.forward();
    let start_rank = match c {
        Color::White => 1,
        Color::Black => 6,
    };

    if let Some(to) = sq(f, r + dir)
        && pos.piece_at(to).is_none()
    {
        push_pawn_move(from, to, c, out);
        if r == start_rank
            && let Some(to2) = sq(f, r + 2 * dir)
            && pos.piece_at(to2).is_none()
        {
            out.push(Move::new(from, to2));
        }
    }

    for df in [-1, 1] {
        let Some(to) = sq(f + df, r + dir) else {
            continue;
        };
        match pos.piece_at(to) {
            Some(target) if target.color != c => push_pawn_move(from, to, c, out),
            None if pos.en_passant == Some(to) => out.push(Move {
                is_en_passant: true,
                ..Move::new(from, to)
            }),
            _ => {}
        }
    }
}

/// Single-step movers: knight and king.
fn gen_steps(pos: &Position, from: u8, c: Color, deltas: &[(i8, i8)], out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    for &(df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr)
            && pos.piece_at(to).is_none_or(|pc| pc.color != c)
        {
            out.push(Move::new(from, to));
        }
    }
}

fn gen_slider(pos: &Position, from: u8, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    let f0 = file_of(from);
    let r0 = rank_of(from);
    for &(df, dr) in dirs {
        let (mut f, mut r) = (f0 + df, r0 + dr);
        while let Some(to) = sq(f, r) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) => {
                    if pc.color != c {
                        out.push(Move::new(from, to));
                    }
                    break;
                }
            }
            f += df;
            r += dr;
        }
    }
}

fn gen_castle(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    // (king home, kingside right, queenside right)
    let (home, king_side, queen_side) = match c {
        Color::White => (4u8, pos.castling.wk, pos.castling.wq),
        Color::Black => (60u8, pos.castling.bk, pos.castling.bq),
    };
    if from != home || pos.in_check(c) {
        return;
    }

    let enemy = c.other();
    let empty = |squares: &[u8]| squares.iter().all(|&s| pos.piece_at(s).is_none());
    let safe = |squares: &[u8]| squares.iter().all(|&s| !pos.is_square_attacked(s, enemy));

    // Kingside: f and g files empty and not attacked.
    if king_side && empty(&[home + 1, home + 2]) && safe(&[home + 1, home + 2]) {
        out.push(Move {
            is_castle: true,
            ..Move::new(home, home + 2)
        });
    }
    // Queenside: b, c and d files empty; only c and d need to be safe.
    if queen_side && empty(&[home - 1, home - 2, home - 3]) && safe(&[home - 1, home - 2]) {
        out.push(Move {
            is_castle: true,
            ..Move::new(home, home - 2)
        });
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
