//! Text rendering of the board.

use chess_core::{Color, Piece, PieceKind, RulesEngine};

use crate::session::Session;

pub fn piece_char(color: Color, kind: PieceKind) -> char {
    match (color, kind) {
        (Color::White, PieceKind::King) => '♔',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::Black, PieceKind::King) => '♚',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Pawn) => '♟',
    }
}

/// Renders a session's board from the human's side, with coordinates on
/// every edge. The selected piece is shown as `[x]`, reachable empty
/// squares as `•` and capturable pieces as `(x)`.
pub struct BoardView<'a> {
    session: &'a Session,
    flipped: bool,
}

impl<'a> BoardView<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self {
            session,
            flipped: session.orientation == Color::Black,
        }
    }

    pub fn render(&self) -> String {
        let files: Vec<u8> = if self.flipped {
            (0..8).rev().collect()
        } else {
            (0..8).collect()
        };
        let ranks: Vec<u8> = if self.flipped {
            (0..8).collect()
        } else {
            (0..8).rev().collect()
        };

        let mut edge = String::from("   ");
        for &f in &files {
            edge.push(' ');
            edge.push((b'a' + f) as char);
            edge.push(' ');
        }

        let mut out = String::new();
        out.push_str(&edge);
        out.push('\n');
        for &r in &ranks {
            out.push_str(&format!(" {} ", r + 1));
            for &f in &files {
                out.push_str(&self.render_square(r * 8 + f));
            }
            out.push_str(&format!(" {}\n", r + 1));
        }
        out.push_str(&edge);
        out
    }

    fn render_square(&self, sq: u8) -> String {
        let piece = self.session.game.piece_at(sq);
        let glyph = piece.map_or('.', |Piece { color, kind }| piece_char(color, kind));

        if self.session.selected_square == Some(sq) {
            format!("[{glyph}]")
        } else if self.session.legal_targets.contains(&sq) {
            match piece {
                Some(_) => format!("({glyph})"),
                None => " • ".to_string(),
            }
        } else {
            format!(" {glyph} ")
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
