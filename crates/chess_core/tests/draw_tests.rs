//! Game-over detection through the rules engine interface:
//! - Stalemate
//! - Fifty-move rule
//! - Threefold repetition
//! - Insufficient material
//! - Checkmate versus plain check

use chess_core::{DrawReason, Game, GameStatus, Position, RulesEngine, parse_uci_move};

fn game(fen: &str) -> Game {
    Game::from_fen(fen).expect("valid FEN")
}

// =============================================================================
// Stalemate Tests
// =============================================================================

#[test]
fn test_stalemate_king_in_corner() {
    // Black king a8, white queen b6, white king c7
    let g = game("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");

    assert!(g.legal_moves(None).is_empty());
    assert!(g.in_stalemate());
    assert!(!g.in_check());
    assert!(!g.in_checkmate());
    assert!(g.in_draw());
    assert_eq!(g.status(), GameStatus::Draw(DrawReason::Stalemate));
}

#[test]
fn test_stalemate_king_and_pawn_endgame() {
    let g = game("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1");

    assert!(g.in_stalemate());
    assert!(g.is_game_over());
}

// =============================================================================
// Fifty-Move Rule Tests
// =============================================================================

#[test]
fn test_fifty_move_rule_at_100_halfmoves() {
    let g = game("8/8/8/4k3/8/4K3/4P3/8 w - - 100 60");
    assert_eq!(g.status(), GameStatus::Draw(DrawReason::FiftyMoveRule));
}

#[test]
fn test_fifty_move_rule_at_99_halfmoves() {
    let g = game("8/8/8/4k3/8/4K3/4P3/8 w - - 99 60");
    assert!(!g.is_game_over());
}

#[test]
fn test_fifty_move_rule_reset_on_pawn_move() {
    let mut g = game("8/8/8/4k3/8/3K4/4P3/8 w - - 99 60");
    let push = parse_uci_move(g.position(), "e2e3").unwrap();
    g.apply_move(push).unwrap();

    assert_eq!(g.position().halfmove_clock, 0);
    assert!(!g.is_game_over());
}

#[test]
fn test_fifty_move_rule_reached_by_quiet_move() {
    let mut g = game("8/8/8/4k3/8/3K4/4P3/8 w - - 99 60");
    let king = parse_uci_move(g.position(), "d3c3").unwrap();
    g.apply_move(king).unwrap();

    assert!(g.in_draw());
    g.undo_last_move();
    assert!(!g.in_draw());
}

// =============================================================================
// Insufficient Material Tests
// =============================================================================

#[test]
fn test_insufficient_material_cases() {
    let drawn = [
        ("8/8/8/4k3/8/4K3/8/8 w - - 0 1", "K vs K"),
        ("8/8/8/4k3/8/4KB2/8/8 w - - 0 1", "K+B vs K"),
        ("8/8/8/4k3/8/4KN2/8/8 w - - 0 1", "K+N vs K"),
        ("8/8/4b3/4k3/8/4K3/8/8 w - - 0 1", "K vs K+B"),
        ("8/8/4n3/4k3/8/4K3/8/8 w - - 0 1", "K vs K+N"),
        // c1 and f8 are both dark squares
        ("5b2/8/8/4k3/8/4K3/8/2B5 w - - 0 1", "K+B vs K+B, same shade"),
    ];
    for (fen, label) in drawn {
        let g = game(fen);
        assert!(g.has_insufficient_material(), "{label} should be insufficient");
        assert_eq!(
            g.status(),
            GameStatus::Draw(DrawReason::InsufficientMaterial),
            "{label}"
        );
    }
}

#[test]
fn test_sufficient_material_cases() {
    let playable = [
        ("2b5/8/8/4k3/8/4K3/8/2B5 w - - 0 1", "K+B vs K+B, opposite shades"),
        ("8/8/8/4k3/8/4K3/4P3/8 w - - 0 1", "K+P vs K"),
        ("8/8/8/4k3/8/4K3/8/4R3 w - - 0 1", "K+R vs K"),
        ("8/8/8/4k3/8/4K3/8/4Q3 w - - 0 1", "K+Q vs K"),
        ("8/8/8/4k3/8/4K3/3NN3/8 w - - 0 1", "K+N+N vs K"),
    ];
    for (fen, label) in playable {
        let g = game(fen);
        assert!(!g.has_insufficient_material(), "{label} should be sufficient");
        assert!(!g.is_game_over(), "{label}");
    }
}

// =============================================================================
// Position Hash Tests (for threefold repetition)
// =============================================================================

#[test]
fn test_position_hash_ignores_move_clocks() {
    let a = Position::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3")
        .unwrap();
    let b = Position::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 6 5")
        .unwrap();
    assert_eq!(a.position_hash(), b.position_hash());
}

#[test]
fn test_position_hash_distinguishes_state() {
    let base = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    let variants = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Kq - 0 1",
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 1",
    ];
    let h = Position::from_fen(base).unwrap().position_hash();
    for fen in variants {
        assert_ne!(Position::from_fen(fen).unwrap().position_hash(), h, "{fen}");
    }

    let with_ep = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
    let without_ep = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";
    assert_ne!(
        Position::from_fen(with_ep).unwrap().position_hash(),
        Position::from_fen(without_ep).unwrap().position_hash()
    );
}

#[test]
fn test_threefold_repetition_by_rook_shuffle() {
    let mut g = game("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
    for _ in 0..2 {
        for txt in ["a1a2", "e8d8", "a2a1", "d8e8"] {
            let mv = parse_uci_move(g.position(), txt).unwrap();
            g.apply_move(mv).unwrap();
        }
    }
    assert!(g.in_threefold_repetition());
    assert_eq!(g.status(), GameStatus::Draw(DrawReason::ThreefoldRepetition));
}

// =============================================================================
// Checkmate versus check
// =============================================================================

#[test]
fn test_checkmate_is_not_stalemate() {
    // Scholar's mate
    let g = game("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4");

    assert!(g.legal_moves(None).is_empty());
    assert!(g.in_check());
    assert!(g.in_checkmate());
    assert!(!g.in_stalemate());
    assert!(!g.in_draw());
}

#[test]
fn test_check_is_not_checkmate() {
    let g = game("rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2");

    assert!(!g.legal_moves(None).is_empty());
    assert!(g.in_check());
    assert!(!g.is_game_over());
}
