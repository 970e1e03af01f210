use super::*;

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

#[test]
fn test_parse_accepts_separators() {
    let start = Position::startpos();
    for txt in ["e2e4", "e2 e4", "e2-e4", "E2E4"] {
        let mv = parse_uci_move(&start, txt).unwrap();
        assert_eq!((mv.from, mv.to), (12, 28), "parsing {txt}");
    }
}

#[test]
fn test_parse_rejects_garbage_and_illegal() {
    let start = Position::startpos();
    assert!(matches!(
        parse_uci_move(&start, "hello"),
        Err(MoveError::Unparsable(_))
    ));
    assert!(matches!(
        parse_uci_move(&start, "e2e5"),
        Err(MoveError::Illegal { .. })
    ));
}

#[test]
fn test_parse_promotion_defaults_to_queen() {
    let p = pos("8/P6k/8/8/8/8/8/K7 w - - 0 1");
    assert_eq!(parse_uci_move(&p, "a7a8").unwrap().promo, Some(PieceKind::Queen));
    assert_eq!(parse_uci_move(&p, "a7a8n").unwrap().promo, Some(PieceKind::Knight));
}

#[test]
fn test_san_basic_moves() {
    let start = Position::startpos();
    assert_eq!(to_san(&start, parse_uci_move(&start, "e2e4").unwrap()), "e4");
    assert_eq!(to_san(&start, parse_uci_move(&start, "g1f3").unwrap()), "Nf3");
}

#[test]
fn test_san_castle_capture_and_mate() {
    let castle = pos("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    assert_eq!(to_san(&castle, parse_uci_move(&castle, "e1g1").unwrap()), "O-O");
    assert_eq!(to_san(&castle, parse_uci_move(&castle, "e1c1").unwrap()), "O-O-O");

    let ep = pos("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
    assert_eq!(to_san(&ep, parse_uci_move(&ep, "e5d6").unwrap()), "exd6");

    let mate = pos("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1");
    assert_eq!(to_san(&mate, parse_uci_move(&mate, "e1e8").unwrap()), "Qe8#");
}

#[test]
fn test_san_disambiguates_by_file() {
    // Both knights can reach d2.
    let p = pos("4k3/8/8/8/8/8/8/1N2KN2 w - - 0 1");
    assert_eq!(to_san(&p, parse_uci_move(&p, "b1d2").unwrap()), "Nbd2");
}

#[test]
fn test_san_check_suffix() {
    let p = pos("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
    assert_eq!(to_san(&p, parse_uci_move(&p, "a1a8").unwrap()), "Ra8+");
}
