use lib::janggi::{Cell, Color, Game, GameState, Kind, MoveError, PieceId};

fn id(color: Color, kind: Kind, index: u8) -> PieceId {
    PieceId::new(color, kind, index)
}

#[test]
fn short_game_ends_in_checkmate() {
    let mut game = Game::with_setup(
        Color::Blue,
        [
            (id(Color::Red, Kind::General, 1), Cell::E2),
            (id(Color::Red, Kind::Chariot, 1), Cell::I2),
            (id(Color::Red, Kind::Chariot, 2), Cell::A9),
            (id(Color::Blue, Kind::General, 1), Cell::D10),
            (id(Color::Blue, Kind::Soldier, 1), Cell::I5),
        ],
    )
    .unwrap();

    assert_eq!(game.make_move("i5", "h5"), Ok(()));
    assert_eq!(game.make_move("i2", "i10"), Ok(()));
    assert!(game.is_in_check(Color::Blue));
    assert_eq!(game.state(), GameState::RedWon);
    assert_eq!(
        game.make_move("h5", "h4"),
        Err(MoveError::GameOver(GameState::RedWon))
    );
}

#[test]
fn opening_exchange_of_soldiers() {
    let mut game = Game::default();

    for (from, to) in [("c7", "c6"), ("c4", "c5"), ("c6", "c5")] {
        assert_eq!(game.make_move(from, to), Ok(()));
    }

    assert_eq!(game.board()[Cell::C5], Some(id(Color::Blue, Kind::Soldier, 2)));
    assert_eq!(game.player(Color::Red).pieces().len(), 15);
    assert_eq!(game.turn(), Color::Red);
    assert_eq!(game.turns(), 4);
}

#[test]
fn general_walks_the_palace_diagonals() {
    let mut game = Game::default();

    assert_eq!(game.make_move("e9", "e8"), Ok(()));
    assert_eq!(game.make_move("e2", "e2"), Ok(()));
    assert_eq!(game.make_move("e8", "d8"), Ok(()));
    assert_eq!(game.make_move("e2", "e2"), Ok(()));

    let diagonal = game.legal_destinations(Cell::D8);
    assert!(diagonal.contains(&Cell::E9));
    assert!(!diagonal.contains(&Cell::C8));
}
