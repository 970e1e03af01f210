use super::*;

fn session() -> Session {
    Session::new(&PlayerConfig::default())
}

fn play(s: &mut Session, moves: &[&str]) {
    for m in moves {
        let mv = parse_uci_move(s.game.position(), m).unwrap();
        s.game.apply_move(mv).unwrap();
    }
}

#[test]
fn test_bot_plays_the_other_color() {
    let mut s = session();
    assert_eq!(s.human_color(), Color::White);
    assert_eq!(s.bot_color(), Color::Black);
    assert!(!s.is_bot_turn());

    assert_eq!(s.flip(), Color::Black);
    assert_eq!(s.bot_color(), Color::White);
    assert!(s.is_bot_turn());

    s.toggle_bot();
    assert!(!s.is_bot_turn());
}

#[test]
fn test_human_move_then_bot_turn() {
    let mut s = session();
    let mv = s.play_human("e2 e4").unwrap();
    assert_eq!(mv, Move::new(12, 28));
    assert_eq!(s.last_move, Some(mv));
    assert!(s.is_bot_turn());
    assert_eq!(s.play_human("d2d4"), Err(PlayError::BotToMove));
}

#[test]
fn test_illegal_human_move_leaves_game() {
    let mut s = session();
    let before = s.game.clone();
    assert!(matches!(
        s.play_human("e2e5"),
        Err(PlayError::Move(MoveError::Illegal { .. }))
    ));
    assert!(matches!(
        s.play_human("e7e5"),
        Err(PlayError::Move(MoveError::Illegal { .. }))
    ));
    assert!(matches!(
        s.play_human("e2"),
        Err(PlayError::Move(MoveError::Unparsable(_)))
    ));
    assert_eq!(s.game, before);
}

#[test]
fn test_without_bot_human_plays_both_sides() {
    let mut s = Session::new(&PlayerConfig {
        bot_enabled: false,
        ..PlayerConfig::default()
    });
    s.play_human("e2e4").unwrap();
    s.play_human("e7e5").unwrap();
    assert_eq!(s.game.history().len(), 2);
}

#[test]
fn test_select_lists_targets() {
    let mut s = session();
    let mut targets = s.select(12).to_vec();
    targets.sort();
    assert_eq!(targets, vec![20, 28]);
    assert_eq!(s.selected_square, Some(12));

    // Black piece while white is to move.
    assert!(s.select(52).is_empty());
    assert_eq!(s.selected_square, None);
}

#[test]
fn test_promotion_targets_not_repeated() {
    let game = Game::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
    let mut s = Session::with_game(game, &PlayerConfig::default());
    assert_eq!(s.select(48), &[56]);
}

#[test]
fn test_undo_takes_back_bot_reply_too() {
    let mut s = session();
    s.play_human("e2e4").unwrap();
    let reply = parse_uci_move(s.game.position(), "e7e5").unwrap();
    s.apply_bot_move(reply).unwrap();

    assert_eq!(s.undo(), 2);
    assert!(s.game.history().is_empty());
    assert_eq!(s.last_move, None);
    assert_eq!(s.undo(), 0);

    s.toggle_bot();
    play(&mut s, &["d2d4", "d7d5"]);
    assert_eq!(s.undo(), 1);
    assert_eq!(s.last_move, Some(Move::new(11, 27)));
}

#[test]
fn test_new_game_greeting() {
    let mut s = session();
    play(&mut s, &["e2e4"]);
    s.select(52);
    assert_eq!(s.new_game(), "New game started. Turn of Whites (You).");
    assert!(s.game.history().is_empty());
    assert!(s.legal_targets.is_empty());

    s.flip();
    assert_eq!(s.new_game(), "New game started. Turn of Whites (Bot).");
}

#[test]
fn test_status_lines() {
    let mut s = session();
    assert_eq!(s.status_text(), "Turn of Whites (You).");

    play(&mut s, &["e2e4", "f7f6", "d2d4"]);
    assert_eq!(s.status_text(), "Turn of Blacks (Bot).");
    play(&mut s, &["g7g5"]);
    play(&mut s, &["d1h5"]);
    assert_eq!(s.status_text(), "CHECKMATE! Whites WON.");

    let stalemate = Game::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    let s = Session::with_game(stalemate, &PlayerConfig::default());
    assert_eq!(s.status_text(), "GAME OVER: DRAW.");

    let check = Game::from_fen("4k3/8/8/8/8/8/8/R3K2r w - - 0 1").unwrap();
    let s = Session::with_game(check, &PlayerConfig::default());
    assert_eq!(s.status_text(), "Turn of Whites (You). The King is in CHECK!");
}

#[test]
fn test_game_over_blocks_moves() {
    let mut s = session();
    s.toggle_bot();
    play(&mut s, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert_eq!(s.status_text(), "CHECKMATE! Blacks WON.");
    assert_eq!(s.play_human("a2a3"), Err(PlayError::GameOver));
}

#[test]
fn test_history_pairs_moves() {
    let mut s = session();
    assert!(s.history_lines().is_empty());
    play(&mut s, &["e2e4", "e7e5", "g1f3"]);
    assert_eq!(s.history_lines(), vec!["1. W: e4 | B: e5", "2. W: Nf3"]);
}

#[test]
fn test_evaluation_from_bot_side() {
    // White is a rook up; the bot plays black.
    let game = Game::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
    let s = Session::with_game(game, &PlayerConfig::default());
    assert_eq!(s.evaluation(), Score::Material(-500));
}
