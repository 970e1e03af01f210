use crate::error::FenError;
use crate::types::*;
use crate::zobrist::ZOBRIST;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];
pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];
pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights {
        wk: false,
        wq: false,
        bk: false,
        bq: false,
    };
    pub const ALL: CastlingRights = CastlingRights {
        wk: true,
        wq: true,
        bk: true,
        bq: true,
    };

    /// Rights in Zobrist key order: wk, wq, bk, bq.
    pub fn as_array(&self) -> [bool; 4] {
        [self.wk, self.wq, self.bk, self.bq]
    }

    /// Drops any right tied to a rook or king leaving / being captured on `sq`.
    fn touch(&mut self, sq: u8) {
        match sq {
            0 => self.wq = false,
            7 => self.wk = false,
            4 => {
                self.wk = false;
                self.wq = false;
            }
            56 => self.bq = false,
            63 => self.bk = false,
            60 => {
                self.bk = false;
                self.bq = false;
            }
            _ => {}
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

/// State needed to take back a move played with [`Position::make_move`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Undo {
    pub captured: Option<Piece>,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub moved_piece: Piece,
    pub rook_move: Option<(u8, u8)>, // (rook_from, rook_to) for castling
    pub ep_captured_sq: Option<u8>,  // square actually captured in en-passant
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    pub fn empty() -> Self {
        Position {
            board: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn startpos() -> Self {
        let mut p = Position {
            castling: CastlingRights::ALL,
            ..Position::empty()
        };

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            p.board[f] = Some(Piece::new(Color::White, kind));
            p.board[8 + f] = Some(Piece::new(Color::White, PieceKind::Pawn));
            p.board[48 + f] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            p.board[56 + f] = Some(Piece::new(Color::Black, kind));
        }
        p
    }

    /// Parses Forsyth-Edwards Notation. Move counters are optional.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::MissingFields(parts.len()));
        }

        let mut pos = Position::empty();

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            let mut file: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let kind = PieceKind::from_letter(ch).ok_or(FenError::PieceChar(ch))?;
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let s = sq(file, rank).ok_or(FenError::RankLength {
                        rank: 8 - rank_idx,
                    })?;
                    pos.board[s as usize] = Some(Piece::new(color, kind));
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::RankLength {
                        rank: 8 - rank_idx,
                    });
                }
            }
            if file != 8 {
                return Err(FenError::RankLength {
                    rank: 8 - rank_idx,
                });
            }
        }

        pos.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::SideToMove(other.to_string())),
        };

        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => pos.castling.wk = true,
                    'Q' => pos.castling.wq = true,
                    'k' => pos.castling.bk = true,
                    'q' => pos.castling.bq = true,
                    _ => return Err(FenError::CastlingChar(c)),
                }
            }
        }

        pos.en_passant = match parts[3] {
            "-" => None,
            ep => Some(coord_to_sq(ep).ok_or_else(|| FenError::EnPassant(ep.to_string()))?),
        };

        let counter = |field: Option<&&str>, default: u32| -> Result<u32, FenError> {
            match field {
                Some(s) => s.parse().map_err(|_| FenError::Counter(s.to_string())),
                None => Ok(default),
            }
        };
        pos.halfmove_clock = counter(parts.get(4), 0)?;
        pos.fullmove_number = counter(parts.get(5), 1)?;

        for c in [Color::White, Color::Black] {
            if pos.king_sq(c).is_none() {
                return Err(FenError::MissingKing(c));
            }
        }

        Ok(pos)
    }

    pub fn to_fen(&self) -> String {
        let mut out = String::new();
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                match self.board[(rank * 8 + file) as usize] {
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(pc.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        out.push(' ');
        let rights: String = self
            .castling
            .as_array()
            .iter()
            .zip(['K', 'Q', 'k', 'q'])
            .filter_map(|(&on, ch)| on.then_some(ch))
            .collect();
        out.push_str(if rights.is_empty() { "-" } else { &rights });

        out.push(' ');
        match self.en_passant {
            Some(ep) => out.push_str(&sq_to_coord(ep)),
            None => out.push('-'),
        }

        out.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        out
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        (0..64u8).find(|&s| self.board[s as usize] == Some(Piece::new(c, PieceKind::King)))
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    /// Iterates occupied squares in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (u8, Piece)> + '_ {
        self.board
            .iter()
            .enumerate()
            .filter_map(|(i, pc)| pc.map(|pc| (i as u8, pc)))
    }

    pub fn in_check(&self, c: Color) -> bool {
        match self.king_sq(c) {
            Some(ksq) => self.is_square_attacked(ksq, c.other()),
            None => false,
        }
    }

    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        let tf = file_of(target);
        let tr = rank_of(target);
        let holds = |s: Option<u8>, kinds: &[PieceKind]| -> bool {
            s.and_then(|s| self.piece_at(s))
                .is_some_and(|pc| pc.color == by && kinds.contains(&pc.kind))
        };

        // A pawn attacks from one rank behind the target, from its own point of view.
        let pr = tr - by.forward();
        if holds(sq(tf - 1, pr), &[PieceKind::Pawn]) || holds(sq(tf + 1, pr), &[PieceKind::Pawn]) {
            return true;
        }

        if KNIGHT_DELTAS
            .iter()
            .any(|&(df, dr)| holds(sq(tf + df, tr + dr), &[PieceKind::Knight]))
        {
            return true;
        }
        if KING_DELTAS
            .iter()
            .any(|&(df, dr)| holds(sq(tf + df, tr + dr), &[PieceKind::King]))
        {
            return true;
        }

        let ray_hits = |dirs: &[(i8, i8)], kinds: &[PieceKind]| {
            dirs.iter().any(|&(df, dr)| {
                let (mut f, mut r) = (tf + df, tr + dr);
                while let Some(s) = sq(f, r) {
                    if let Some(pc) = self.piece_at(s) {
                        return pc.color == by && kinds.contains(&pc.kind);
                    }
                    f += df;
                    r += dr;
                }
                false
            })
        };

        ray_hits(&DIAGONALS, &[PieceKind::Bishop, PieceKind::Queen])
            || ray_hits(&ORTHOGONALS, &[PieceKind::Rook, PieceKind::Queen])
    }

    /// Zobrist hash over placement, side to move, castling rights and
    /// en-passant file. Move clocks are ignored so repeated positions collide.
    pub fn position_hash(&self) -> u64 {
        let mut h = 0u64;
        for (s, pc) in self.pieces() {
            h ^= ZOBRIST.piece_key(pc, s);
        }
        if self.side_to_move == Color::Black {
            h ^= ZOBRIST.side_to_move;
        }
        for (i, on) in self.castling.as_array().into_iter().enumerate() {
            if on {
                h ^= ZOBRIST.castling_key(i);
            }
        }
        if let Some(ep) = self.en_passant {
            h ^= ZOBRIST.ep_key(ep % 8);
        }
        h
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// Neither side can mate: bare kings, a single minor piece, or only
    /// bishops that all stand on one square color.
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors = 0;
        let mut bishop_shades = [false; 2];
        let mut knights = 0;
        for (s, pc) in self.pieces() {
            match pc.kind {
                PieceKind::King => {}
                PieceKind::Bishop => {
                    minors += 1;
                    bishop_shades[((file_of(s) + rank_of(s)) % 2) as usize] = true;
                }
                PieceKind::Knight => {
                    minors += 1;
                    knights += 1;
                }
                _ => return false,
            }
        }
        match minors {
            0 | 1 => true,
            _ => knights == 0 && !(bishop_shades[0] && bishop_shades[1]),
        }
    }

    /// Plays `mv` without checking legality and returns what is needed to take it back.
    ///
    /// # Panics
    ///
    /// Panics if `mv.from` is empty. Callers only pass moves produced by the
    /// move generator.
    pub fn make_move(&mut self, mv: Move) -> Undo {
        let Move { from, to, .. } = mv;
        let moved = self.piece_at(from).expect("no piece on from-square");
        let mut captured = self.piece_at(to);

        let undo_base = Undo {
            captured: None,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            moved_piece: moved,
            rook_move: None,
            ep_captured_sq: None,
        };

        self.en_passant = None;
        let mut reset_hmc = moved.kind == PieceKind::Pawn || captured.is_some();

        let mut ep_captured_sq = None;
        if mv.is_en_passant
            && let Some(cs) = sq(file_of(to), rank_of(to) - moved.color.forward())
        {
            captured = self.piece_at(cs);
            self.set_piece(cs, None);
            ep_captured_sq = Some(cs);
            reset_hmc = true;
        }

        self.set_piece(from, None);
        let landed = match (moved.kind, last_rank(moved.color) == rank_of(to)) {
            (PieceKind::Pawn, true) => Piece::new(moved.color, mv.promo.unwrap_or(PieceKind::Queen)),
            _ => moved,
        };
        self.set_piece(to, Some(landed));

        let mut rook_move = None;
        if mv.is_castle
            && moved.kind == PieceKind::King
            && let Some((rf, rt)) = castle_rook_squares(from, to)
            && let Some(rook) = self.piece_at(rf)
        {
            self.set_piece(rf, None);
            self.set_piece(rt, Some(rook));
            rook_move = Some((rf, rt));
        }

        self.castling.touch(from);
        self.castling.touch(to);

        if moved.kind == PieceKind::Pawn && (rank_of(to) - rank_of(from)).abs() == 2 {
            self.en_passant = sq(file_of(from), (rank_of(from) + rank_of(to)) / 2);
        }

        self.halfmove_clock = if reset_hmc {
            0
        } else {
            self.halfmove_clock + 1
        };
        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.other();

        Undo {
            captured,
            rook_move,
            ep_captured_sq,
            ..undo_base
        }
    }

    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        if let Some((rf, rt)) = undo.rook_move {
            let rook = self.piece_at(rt);
            self.set_piece(rt, None);
            self.set_piece(rf, rook);
        }

        // The moved piece goes back as it was, which also reverts promotions.
        self.set_piece(mv.from, Some(undo.moved_piece));
        match undo.ep_captured_sq {
            Some(cs) => {
                self.set_piece(mv.to, None);
                self.set_piece(cs, undo.captured);
            }
            None => self.set_piece(mv.to, undo.captured),
        }
    }
}

pub(crate) fn last_rank(c: Color) -> i8 {
    match c {
        Color::White => 7,
        Color::Black => 0,
    }
}

/// Rook (from, to) squares for a king's castling move.
pub(crate) fn castle_rook_squares(king_from: u8, king_to: u8) -> Option<(u8, u8)> {
    match (king_from, king_to) {
        (4, 6) => Some((7, 5)),
        (4, 2) => Some((0, 3)),
        (60, 62) => Some((63, 61)),
        (60, 58) => Some((56, 59)),
        _ => None,
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
