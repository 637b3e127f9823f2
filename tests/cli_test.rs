#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;

    use torpedo::console::{
        coord_to_string, parse_command, parse_coord, play, print_board, Command,
    };
    use torpedo::{ConsolePresenter, GameConfig, GameSession, GameStatus, SHOT_BUDGET};

    fn seeded(seed: u64) -> GameSession {
        GameSession::with_seed(GameConfig::default(), seed).unwrap()
    }

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("B7"), Some((6, 1)));
        assert_eq!(parse_coord("b10"), Some((9, 1)));
        assert_eq!(parse_coord("K1"), Some((0, 10)));
        assert_eq!(parse_coord("A0"), None);
        assert_eq!(parse_coord("7B"), None);
        assert_eq!(parse_coord("C"), None);
        assert_eq!(parse_coord(""), None);
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command(" c3 \n"), Some(Command::Fire(2, 2)));
        assert_eq!(parse_command("QUIT"), Some(Command::Quit));
        assert_eq!(parse_command("new\n"), Some(Command::NewGame));
        assert_eq!(parse_command("reset"), Some(Command::NewGame));
        assert_eq!(parse_command("fire"), None);
    }

    #[test]
    fn test_coord_to_string() {
        assert_eq!(coord_to_string(6, 1), "B7");
        assert_eq!(coord_to_string(0, 9), "J1");
        assert_eq!(coord_to_string(3, 40), "(3, 40)");
        for r in 0..10 {
            for c in 0..10 {
                assert_eq!(parse_coord(&coord_to_string(r, c)), Some((r, c)));
            }
        }
    }

    #[test]
    fn test_print_board_reveal() {
        let session = seeded(3);
        let mut hidden = Vec::new();
        print_board(&mut hidden, session.board(), false).unwrap();
        let hidden = String::from_utf8(hidden).unwrap();
        assert_eq!(hidden.matches('S').count(), 0);
        assert_eq!(hidden.lines().count(), 11);

        let mut shown = Vec::new();
        print_board(&mut shown, session.board(), true).unwrap();
        let shown = String::from_utf8(shown).unwrap();
        assert_eq!(shown.matches('S').count(), 17);
    }

    #[test]
    fn test_play_single_shot_then_quit() {
        let mut session = seeded(4);
        let mut presenter = ConsolePresenter::new(Vec::new());
        play(&mut session, Cursor::new("A1\nnonsense\nquit\nB2\n"), &mut presenter, false).unwrap();

        let text = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(text.contains("Torpedoes Remaining: 30"));
        assert!(text.contains("Torpedoes Remaining: 29"));
        assert!(text.contains("Invalid input"));
        assert_eq!(session.remaining_shots(), 29);
        assert!(session.has_started());
    }

    #[test]
    fn test_play_lose_then_new_game() {
        let mut session = seeded(8);
        let mut script = String::new();
        for (r, c) in (!session.board().ship_map())
            .iter_set_bits()
            .take(SHOT_BUDGET as usize)
        {
            script.push_str(&coord_to_string(r, c));
            script.push('\n');
        }
        script.push_str("A1\nnew\n");

        let mut presenter = ConsolePresenter::new(Vec::new());
        play(&mut session, Cursor::new(script), &mut presenter, false).unwrap();

        let text = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(text.contains("Out of torpedoes! Game Over."));
        assert!(text.contains("Type 'new' to play again"));
        assert_eq!(text.matches("Make your first move!").count(), 2);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.remaining_shots(), SHOT_BUDGET);
    }
}
