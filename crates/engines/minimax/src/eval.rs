//! Material plus piece-square evaluation from the bot's point of view.

use chess_core::{file_of, rank_of, Color, Piece, PieceKind, RulesEngine};

use crate::score::Score;

/// Material values in centipawns, indexed by `PieceKind::idx()`.
/// The king's value only keeps king captures out of reach of any trade.
pub const PIECE_VALUES: [i32; 6] = [100, 320, 330, 500, 900, 20_000];

/// Pawn bonuses, white's point of view, row 0 = rank 1.
#[rustfmt::skip]
const PAWN_TABLE: [[i32; 8]; 8] = [
    [  0,   0,   0,   0,   0,   0,   0,   0],
    [  5,  10,  10, -20, -20,  10,  10,   5],
    [  5,  -5, -10,   0,   0, -10,  -5,   5],
    [  0,   0,   0,  20,  20,   0,   0,   0],
    [  5,   5,  10,  25,  25,  10,   5,   5],
    [ 10,  10,  20,  30,  30,  20,  10,  10],
    [ 50,  50,  50,  50,  50,  50,  50,  50],
    [  0,   0,   0,   0,   0,   0,   0,   0],
];

/// Knight bonuses, white's point of view, row 0 = rank 1.
#[rustfmt::skip]
const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20,   0,   5,   5,   0, -20, -40],
    [-30,   5,  10,  15,  15,  10,   5, -30],
    [-30,   0,  15,  20,  20,  15,   0, -30],
    [-30,   5,  15,  20,  20,  15,   5, -30],
    [-30,   0,  10,  15,  15,  10,   0, -30],
    [-40, -20,   0,   0,   0,   0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    PIECE_VALUES[kind.idx()]
}

/// Positional bonus for `piece` on `sq`. Only pawns and knights have tables.
///
/// Tables are read on the board-array row (0 = rank 8): white mirrors it to
/// `table[7 - row]`, black reads `table[row]` as is.
pub fn positional_bonus(piece: Piece, sq: u8) -> i32 {
    let table = match piece.kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        _ => return 0,
    };
    let row = (7 - rank_of(sq)) as usize;
    let col = file_of(sq) as usize;
    match piece.color {
        Color::White => table[7 - row][col],
        Color::Black => table[row][col],
    }
}

/// Scores the position for `bot`: positive is good for the bot.
///
/// A finished game is `Loss` when the bot is the side to move and `Win`
/// otherwise. Draws are not told apart from mates.
pub fn evaluate<R: RulesEngine + ?Sized>(rules: &R, bot: Color) -> Score {
    if rules.is_game_over() {
        outcome_score(rules, bot)
    } else {
        material_score(rules, bot)
    }
}

/// Score of a finished game.
pub(crate) fn outcome_score<R: RulesEngine + ?Sized>(rules: &R, bot: Color) -> Score {
    if rules.side_to_move() == bot {
        Score::Loss
    } else {
        Score::Win
    }
}

/// Material and piece-square balance, ignoring whether the game is over.
pub(crate) fn material_score<R: RulesEngine + ?Sized>(rules: &R, bot: Color) -> Score {
    let mut score = 0i32;
    for sq in 0..64u8 {
        if let Some(pc) = rules.piece_at(sq) {
            let total = piece_value(pc.kind) + positional_bonus(pc, sq);
            if pc.color == bot {
                score += total;
            } else {
                score -= total;
            }
        }
    }
    Score::Material(score)
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
