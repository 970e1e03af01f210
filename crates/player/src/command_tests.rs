use super::*;

#[test]
fn test_keywords() {
    assert_eq!(parse_command("new"), Ok(Command::NewGame));
    assert_eq!(parse_command("  BOT "), Ok(Command::ToggleBot));
    assert_eq!(parse_command("flip"), Ok(Command::Flip));
    assert_eq!(parse_command("undo"), Ok(Command::Undo));
    assert_eq!(parse_command("eval"), Ok(Command::Eval));
    assert_eq!(parse_command("history"), Ok(Command::History));
    assert_eq!(parse_command("?"), Ok(Command::Help));
    assert_eq!(parse_command("q"), Ok(Command::Quit));
}

#[test]
fn test_moves_needs_a_square() {
    assert_eq!(parse_command("moves e2"), Ok(Command::Moves(12)));
    assert_eq!(parse_command("moves G8"), Ok(Command::Moves(62)));
    assert_eq!(
        parse_command("moves"),
        Err(CommandError::BadSquare(String::new()))
    );
    assert_eq!(
        parse_command("moves z9"),
        Err(CommandError::BadSquare("z9".into()))
    );
}

#[test]
fn test_move_text_passed_through() {
    assert_eq!(parse_command("e2e4"), Ok(Command::Move("e2e4".into())));
    assert_eq!(parse_command(" e2 e4 "), Ok(Command::Move("e2 e4".into())));
    assert_eq!(parse_command("a7a8n"), Ok(Command::Move("a7a8n".into())));
}

#[test]
fn test_rejects_noise() {
    assert_eq!(parse_command("   "), Err(CommandError::Empty));
    assert_eq!(
        parse_command("castle"),
        Err(CommandError::Unknown("castle".into()))
    );
    assert_eq!(parse_command("é4"), Err(CommandError::Unknown("é4".into())));
}
