#[cfg(feature = "std")]
mod cli_tests {
    use std::io::Cursor;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use seabattle::cli::{
        board_lines, parse_coordinate, ConsoleRenderer, LineInput, ParseCoordinateError,
    };
    use seabattle::{
        Board, Coordinate, Game, GameConfig, HumanPlayer, InputSource, Orientation,
        Renderer, Role, Ship, ShotError, ShotOutcome,
    };

    #[test]
    fn test_parse_one_indexed_pair() {
        assert_eq!(parse_coordinate("1 1"), Ok(Coordinate::new(0, 0)));
        assert_eq!(parse_coordinate("  3   4 \n"), Ok(Coordinate::new(2, 3)));
        assert_eq!(parse_coordinate("0 7"), Ok(Coordinate::new(-1, 6)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(
            parse_coordinate("1"),
            Err(ParseCoordinateError::WrongCount(1))
        );
        assert_eq!(
            parse_coordinate("1 2 3"),
            Err(ParseCoordinateError::WrongCount(3))
        );
        assert_eq!(
            parse_coordinate("a 2"),
            Err(ParseCoordinateError::NotANumber("a".into()))
        );
        assert_eq!(
            parse_coordinate("-1 2"),
            Err(ParseCoordinateError::NotANumber("-1".into()))
        );
        assert!(parse_coordinate("99999999999 1").is_err());
    }

    #[test]
    fn test_line_input_prompts_until_valid() {
        let mut out = Vec::new();
        let coord = {
            let mut input = LineInput::new(Cursor::new("garbage\nx y\n2 3\n"), &mut out);
            input.read_coordinate()
        };
        assert_eq!(coord, Coordinate::new(1, 2));

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Enter coordinates x y: ").count(), 3);
        assert!(text.contains("Enter coordinates as 'x y'"));
        assert!(text.contains("Enter whole numbers!"));
    }

    #[test]
    fn test_board_lines_show_and_hide_ships() {
        let mut board = Board::new();
        board
            .place_ship(Ship::new(Coordinate::new(0, 0), 2, Orientation::Horizontal))
            .unwrap();
        board.finalize();
        board.resolve_shot(Coordinate::new(0, 0)).unwrap();
        board.resolve_shot(Coordinate::new(2, 2)).unwrap();

        let lines = board_lines(&board);
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "  | 1 | 2 | 3 | 4 | 5 | 6 |");
        assert_eq!(lines[1], "1 | X | ■ |   |   |   |   | 1");
        assert_eq!(lines[3], "3 |   |   | T |   |   |   | 3");

        board.set_visible(false);
        assert_eq!(board_lines(&board)[1], "1 | X |   |   |   |   |   | 1");

        board.resolve_shot(Coordinate::new(0, 1)).unwrap();
        let lines = board_lines(&board);
        assert_eq!(lines[1], "1 | X | X | * |   |   |   | 1");
        assert_eq!(lines[2], "2 | * | * | * |   |   |   | 2");
    }

    #[test]
    fn test_console_messages() {
        let mut renderer = ConsoleRenderer::new(Vec::new());
        renderer.turn_started(Role::Computer);
        renderer.shot_rejected(ShotError::AlreadyShot(Coordinate::new(0, 0)));
        renderer.shot_resolved(Coordinate::new(1, 4), ShotOutcome::Hit);
        renderer.turn_started(Role::Human);
        renderer.shot_rejected(ShotError::OutOfBounds(Coordinate::new(9, 9)));
        renderer.shot_resolved(Coordinate::new(0, 0), ShotOutcome::Sunk);

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(
            text,
            "Computer's move.\n\
             Computer fired at (2, 5)\n\
             Ship hit!\n\
             Your move.\n\
             You are trying to shoot outside the board!\n\
             Ship destroyed!\n"
        );
    }

    #[test]
    fn test_scripted_console_game() {
        // Sweep every cell; the sweep alone is enough to sink the whole fleet.
        let script: String = (1..=6)
            .flat_map(|r| (1..=6).map(move |c| format!("{} {}\n", r, c)))
            .collect();
        let mut screen = Vec::new();
        let outcome = {
            let human = HumanPlayer::new(LineInput::new(Cursor::new(script), std::io::sink()));
            let mut renderer = ConsoleRenderer::new(&mut screen);
            renderer.greet();
            let mut game = Game::new(
                &GameConfig::default(),
                SmallRng::seed_from_u64(77),
                Box::new(human),
                renderer,
            )
            .unwrap();
            game.run_loop()
        };

        let text = String::from_utf8(screen).unwrap();
        assert!(text.starts_with("Welcome to Sea Battle!"));
        assert!(text.contains("Your board"));
        match outcome.winner {
            Role::Human => assert!(text.ends_with("You won!\n")),
            Role::Computer => assert!(text.ends_with("The computer won!\n")),
        }
    }
}
