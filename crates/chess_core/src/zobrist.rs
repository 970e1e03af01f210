//! Zobrist keys for repetition detection.
//!
//! A position hash is the XOR of one random key per (piece, square), plus
//! keys for black to move, each castling right and the en-passant file.
//! Keys are generated at compile time from a fixed seed so hashes are stable
//! across runs.

use crate::types::Piece;

pub struct ZobristKeys {
    /// Indexed by [color][piece_kind][square]
    pub pieces: [[[u64; 64]; 6]; 2],
    /// XORed in when black is to move
    pub side_to_move: u64,
    /// [wk, wq, bk, bq]
    pub castling: [u64; 4],
    /// En-passant file 0-7
    pub en_passant: [u64; 8],
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

const fn xorshift64(mut state: u64) -> u64 {
    state ^= state << 13;
    state ^= state >> 7;
    state ^= state << 17;
    state
}

/// Next `N` values of the key stream.
const fn next_keys<const N: usize>(state: &mut u64) -> [u64; N] {
    let mut keys = [0u64; N];
    let mut i = 0;
    while i < N {
        *state = xorshift64(*state);
        keys[i] = *state;
        i += 1;
    }
    keys
}

impl ZobristKeys {
    pub const fn new() -> Self {
        let mut state = 0x9E37_79B9_7F4A_7C15u64;

        let mut pieces = [[[0u64; 64]; 6]; 2];
        let mut slot = 0;
        while slot < 12 {
            pieces[slot / 6][slot % 6] = next_keys(&mut state);
            slot += 1;
        }
        let [side_to_move] = next_keys(&mut state);

        ZobristKeys {
            pieces,
            side_to_move,
            castling: next_keys(&mut state),
            en_passant: next_keys(&mut state),
        }
    }

    #[inline(always)]
    pub fn piece_key(&self, piece: Piece, sq: u8) -> u64 {
        self.pieces[piece.color.idx()][piece.kind.idx()][sq as usize]
    }

    /// 0=wk, 1=wq, 2=bk, 3=bq
    #[inline(always)]
    pub fn castling_key(&self, index: usize) -> u64 {
        self.castling[index]
    }

    #[inline(always)]
    pub fn ep_key(&self, file: u8) -> u64 {
        self.en_passant[file as usize]
    }
}

pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
